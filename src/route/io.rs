use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::route::{point::RoutePoint, Route};

impl Route {
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to open the specified file: {}", path.display()))?;

        let route = Self::parse(&contents);
        debug!(
            path = %path.display(),
            points = route.len(),
            total_km = route.total_distance_km(),
            "read route"
        );
        Ok(route)
    }

    /// Builds a route from whitespace separated `x y name` triples.
    ///
    /// Parsing never fails: a coordinate that isn't an integer reads as 0 and a
    /// short final triple is padded with 0 / an empty name.
    pub fn parse(s: &str) -> Self {
        let mut route = Route::new();
        let mut tokens = s.split_whitespace();

        while let Some(x) = tokens.next() {
            let index = route.len();
            let x_km = coordinate(x, index);
            let y_km = match tokens.next() {
                Some(y) => coordinate(y, index),
                None => {
                    warn!(index, "route point is missing its y coordinate and name");
                    0
                }
            };
            let name = tokens.next().unwrap_or_else(|| {
                warn!(index, "route point is missing its name");
                ""
            });

            route.add_point(RoutePoint::new(x_km, y_km, name));
        }

        if route.is_empty() {
            warn!("route file has no points");
        }

        route
    }
}

fn coordinate(token: &str, index: usize) -> i32 {
    token.parse().unwrap_or_else(|_| {
        warn!(index, token, "route coordinate is not an integer, using 0");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_across_lines() {
        let route = Route::parse("0 0 Home\n3 4 Shop\n  -10   7 Park\n");
        assert_eq!(
            route.points(),
            [
                RoutePoint::new(0, 0, "Home"),
                RoutePoint::new(3, 4, "Shop"),
                RoutePoint::new(-10, 7, "Park"),
            ]
        );
    }

    #[test]
    fn trailing_newline_adds_no_point() {
        assert_eq!(Route::parse("1 2 A\n\n").len(), 1);
        assert!(Route::parse("").is_empty());
        assert!(Route::parse(" \n\t").is_empty());
    }

    #[test]
    fn malformed_coordinates_default_to_zero() {
        let route = Route::parse("abc 5 A 2 1.5 B");
        assert_eq!(
            route.points(),
            [RoutePoint::new(0, 5, "A"), RoutePoint::new(2, 0, "B")]
        );
    }

    #[test]
    fn short_final_triple_is_padded() {
        let route = Route::parse("1 1 A 9");
        assert_eq!(route.points()[1], RoutePoint::new(9, 0, ""));

        let route = Route::parse("1 1 A 9 8");
        assert_eq!(route.points()[1], RoutePoint::new(9, 8, ""));
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = std::env::temp_dir().join("route-runner-no-such-file.txt");
        let err = Route::read(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Unable to open the specified file: {}", path.display())
        );
    }

    #[test]
    fn reads_route_file() {
        let path = std::env::temp_dir().join(format!("route-runner-{}.txt", std::process::id()));
        std::fs::write(&path, "0 0 A\n0 400 B\n").unwrap();

        let route = Route::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route.total_distance_km(), 400);
    }
}
