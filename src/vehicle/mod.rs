pub mod bicycle;
pub mod car;

use std::io::Write;

use crate::vehicle::{
    bicycle::Bicycle,
    car::{Car, FuelSpec},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VehicleKind {
    Sedan,
    Suv,
    Bus,
    Bicycle,
}

impl VehicleKind {
    /// Fleet order used by the driver.
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Sedan,
        VehicleKind::Suv,
        VehicleKind::Bus,
        VehicleKind::Bicycle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Sedan => "Sedan",
            VehicleKind::Suv => "Suv",
            VehicleKind::Bus => "Bus",
            VehicleKind::Bicycle => Bicycle::NAME,
        }
    }

    pub fn fuel_spec(self) -> Option<FuelSpec> {
        match self {
            VehicleKind::Sedan => Some(FuelSpec::new(7.0, 50.0)),
            VehicleKind::Suv => Some(FuelSpec::new(11.0, 80.0)),
            VehicleKind::Bus => Some(FuelSpec::new(25.0, 120.0)),
            VehicleKind::Bicycle => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Vehicle {
    Car(Car),
    Bicycle(Bicycle),
}

impl Vehicle {
    pub fn new(kind: VehicleKind) -> Self {
        match kind.fuel_spec() {
            Some(spec) => Vehicle::Car(Car::new(kind.name(), spec)),
            None => Vehicle::Bicycle(Bicycle::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Vehicle::Car(car) => car.name(),
            Vehicle::Bicycle(_) => Bicycle::NAME,
        }
    }

    pub fn mileage_km(&self) -> u64 {
        match self {
            Vehicle::Car(car) => car.mileage_km(),
            Vehicle::Bicycle(bike) => bike.mileage_km(),
        }
    }

    pub fn fuel_level(&self) -> Option<f64> {
        match self {
            Vehicle::Car(car) => Some(car.fuel_level()),
            Vehicle::Bicycle(_) => None,
        }
    }

    /// Tries to cover `kilometers`, returning false if the tank can't cover it.
    pub fn drive<W: Write>(&mut self, kilometers: u64, out: &mut W) -> std::io::Result<bool> {
        match self {
            Vehicle::Car(car) => car.drive(kilometers, out),
            Vehicle::Bicycle(bike) => Ok(bike.drive(kilometers)),
        }
    }

    pub fn refuel<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        match self {
            Vehicle::Car(car) => car.refuel(out),
            Vehicle::Bicycle(_) => Ok(()),
        }
    }

    pub fn report_status<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            Vehicle::Car(car) => writeln!(out, "{}", car.status()),
            Vehicle::Bicycle(bike) => writeln!(out, "{bike}"),
        }
    }
}
