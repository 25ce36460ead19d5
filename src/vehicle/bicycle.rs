use std::fmt;

/// Unfueled vehicle: every drive succeeds and only mileage is tracked.
#[derive(Debug, Clone, Default)]
pub struct Bicycle {
    mileage_km: u64,
}

impl Bicycle {
    pub const NAME: &'static str = "Bicycle";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn mileage_km(&self) -> u64 {
        self.mileage_km
    }

    pub fn drive(&mut self, kilometers: u64) -> bool {
        self.mileage_km += kilometers;
        true
    }
}

impl fmt::Display for Bicycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} status: Mileage(km)={}", Self::NAME, self.mileage_km)
    }
}
