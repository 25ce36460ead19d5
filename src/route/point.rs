use geo_types::Point;

/// A named waypoint on an integer kilometre grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePoint {
    pub position: Point<i32>,
    pub name: String,
}

impl RoutePoint {
    pub fn new(x_km: i32, y_km: i32, name: impl Into<String>) -> Self {
        Self {
            position: Point::new(x_km, y_km),
            name: name.into(),
        }
    }

    pub fn x_km(&self) -> i32 {
        self.position.x()
    }

    pub fn y_km(&self) -> i32 {
        self.position.y()
    }

    /// Straight-line distance rounded down to a whole kilometre, using an
    /// exact integer square root of `dx² + dy²`.
    pub fn distance_km(&self, other: &RoutePoint) -> u64 {
        let dx = u128::from((i64::from(other.x_km()) - i64::from(self.x_km())).unsigned_abs());
        let dy = u128::from((i64::from(other.y_km()) - i64::from(self.y_km())).unsigned_abs());

        // At most (2^32 - 1) * sqrt(2), well inside u64.
        (dx * dx + dy * dy).isqrt() as u64
    }
}
