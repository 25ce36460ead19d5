use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::info;

use crate::{
    route::{Route, RunOutcome},
    vehicle::{Vehicle, VehicleKind},
};
mod logging;
mod route;
mod vehicle;

#[derive(Parser)]
struct Args {
    /// Path to the route description (whitespace separated `x y name` triples)
    route_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    let route = Route::read(&args.route_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_fleet(&route, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Runs the route once for each vehicle kind, separating the traces with a blank line.
fn run_fleet<W: Write>(route: &Route, out: &mut W) -> io::Result<Vec<RunOutcome>> {
    let mut outcomes = Vec::with_capacity(VehicleKind::ALL.len());

    for kind in VehicleKind::ALL {
        let mut vehicle = Vehicle::new(kind);
        let outcome = route.run(&mut vehicle, out)?;
        writeln!(out)?;

        info!(
            vehicle = vehicle.name(),
            ?outcome,
            mileage_km = vehicle.mileage_km(),
            fuel_level = ?vehicle.fuel_level(),
            "route finished"
        );
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::point::RoutePoint;

    #[test]
    fn every_vehicle_runs_despite_aborts() {
        let route = Route::parse("0 0 Depot\n0 720 Far\n");

        let mut out: Vec<u8> = vec![];
        let outcomes = run_fleet(&route, &mut out).unwrap();

        assert_eq!(
            outcomes,
            [
                RunOutcome::Aborted { leg: 0 },
                RunOutcome::Completed,
                RunOutcome::Aborted { leg: 0 },
                RunOutcome::Completed,
            ]
        );

        let text = String::from_utf8(out).unwrap();
        let blocks: Vec<_> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].starts_with("Sedan status"));
        assert!(blocks[0].ends_with("Unable to drive the route"));
        assert!(blocks[1].ends_with("Suv status: Mileage(km)=720, Fuel level(l)=0.8"));
        assert!(blocks[2].starts_with("Bus status"));
        assert_eq!(
            blocks[3],
            "Bicycle status: Mileage(km)=0\nBicycle status: Mileage(km)=720"
        );
        assert_eq!(blocks[4], "");
    }

    #[test]
    fn incomplete_route_for_every_vehicle() {
        let mut route = Route::new();
        route.add_point(RoutePoint::new(1, 1, "Alone"));

        let mut out: Vec<u8> = vec![];
        let outcomes = run_fleet(&route, &mut out).unwrap();

        assert!(outcomes.iter().all(|o| *o == RunOutcome::Incomplete));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Path is incomplete\n\n".repeat(4)
        );
    }

    #[test]
    fn route_file_argument_is_required() {
        assert!(Args::try_parse_from(["route-runner"]).is_err());

        let args = Args::try_parse_from(["route-runner", "route.txt"]).unwrap();
        assert_eq!(args.route_file, PathBuf::from("route.txt"));
    }
}
