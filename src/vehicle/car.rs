use std::{fmt, io::Write};

/// Per-type fuel constants shared by every fueled vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSpec {
    /// Litres burned per 100 km.
    pub consumption_per_100km: f64,
    /// Tank capacity in litres.
    pub max_fuel: f64,
}

impl FuelSpec {
    pub const fn new(consumption_per_100km: f64, max_fuel: f64) -> Self {
        Self {
            consumption_per_100km,
            max_fuel,
        }
    }

    pub fn fuel_for(&self, kilometers: u64) -> f64 {
        kilometers as f64 / 100.0 * self.consumption_per_100km
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    name: &'static str,
    spec: FuelSpec,
    fuel_level: f64,
    mileage_km: u64,
}

impl Car {
    /// A car with a full tank and no mileage.
    pub fn new(name: &'static str, spec: FuelSpec) -> Self {
        Self {
            name,
            spec,
            fuel_level: spec.max_fuel,
            mileage_km: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fuel_level(&self) -> f64 {
        self.fuel_level
    }

    pub fn mileage_km(&self) -> u64 {
        self.mileage_km
    }

    pub fn drive<W: Write>(&mut self, kilometers: u64, out: &mut W) -> std::io::Result<bool> {
        let required = self.spec.fuel_for(kilometers);
        if required > self.fuel_level {
            writeln!(out, "Not enough fuel to drive {kilometers} km")?;
            return Ok(false);
        }

        writeln!(out, "{}: Drive {kilometers} km", self.name)?;
        self.mileage_km += kilometers;
        self.fuel_level -= required;
        Ok(true)
    }

    pub fn refuel<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Refuel {}", self.name)?;
        self.fuel_level = self.spec.max_fuel;
        Ok(())
    }

    pub fn status(&self) -> CarStatus<'_> {
        CarStatus(self)
    }
}

pub struct CarStatus<'a>(&'a Car);

impl fmt::Display for CarStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} status: Mileage(km)={}, Fuel level(l)={}",
            self.0.name,
            self.0.mileage_km,
            significant(self.0.fuel_level)
        )
    }
}

/// Six significant digits, switching to exponent notation outside `1e-4..1e6`,
/// with trailing zeros dropped (`22`, `12.3457`, `1.5e-07`).
fn significant(value: f64) -> String {
    const DIGITS: i32 = 6;

    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // Rounding to six digits can carry into the next power of ten, so take the
    // exponent from the rounded form.
    let sci = format!("{:.*e}", (DIGITS - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
