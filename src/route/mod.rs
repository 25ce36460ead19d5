pub mod io;
pub mod point;

use std::io::Write;

use itertools::Itertools;
use tracing::debug;

use crate::{route::point::RoutePoint, vehicle::Vehicle};

/// How a single vehicle fared on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fewer than two points; nothing was driven.
    Incomplete,
    Completed,
    /// Gave up on the zero-based `leg` after the refuel retry also failed.
    Aborted { leg: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Route {
    points: Vec<RoutePoint>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: RoutePoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn legs(&self) -> impl Iterator<Item = (&RoutePoint, &RoutePoint)> {
        self.points.iter().tuple_windows()
    }

    pub fn total_distance_km(&self) -> u64 {
        self.legs()
            .map(|(from, to)| from.distance_km(to))
            .sum()
    }

    /// Drives `vehicle` leg by leg. A failed leg gets one refuel and one retry
    /// before the route is abandoned.
    pub fn run<W: Write>(
        &self,
        vehicle: &mut Vehicle,
        out: &mut W,
    ) -> std::io::Result<RunOutcome> {
        if self.points.len() < 2 {
            writeln!(out, "Path is incomplete")?;
            return Ok(RunOutcome::Incomplete);
        }

        vehicle.report_status(out)?;

        for (leg, (from, to)) in self.legs().enumerate() {
            let distance = from.distance_km(to);
            debug!(
                vehicle = vehicle.name(),
                leg,
                from = %from.name,
                to = %to.name,
                distance,
                "driving leg"
            );

            if !vehicle.drive(distance, out)? {
                vehicle.refuel(out)?;
                debug!(vehicle = vehicle.name(), leg, "retrying after refuel");

                if !vehicle.drive(distance, out)? {
                    debug!(
                        vehicle = vehicle.name(),
                        leg,
                        distance,
                        "leg out of range on a full tank"
                    );
                    writeln!(out, "Unable to drive the route")?;
                    return Ok(RunOutcome::Aborted { leg });
                }
            }

            vehicle.report_status(out)?;
        }

        Ok(RunOutcome::Completed)
    }
}
