//! Text record format for a single curve.
//!
//! A record is one line of whitespace-separated `x,y` tokens in sample
//! order. Numbers are written with Rust's shortest round-trip formatting,
//! so the decimal separator is always `.` regardless of locale.

use super::{Curve, Point};
use crate::error::{PlotError, Result};

/// Serialize a curve's points into one record line (no trailing newline).
pub fn serialize(curve: &Curve) -> String {
    serialize_points(curve.points())
}

/// Serialize raw points into one record line.
pub fn serialize_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse one record line back into points.
pub fn deserialize(line: &str) -> Result<Vec<Point>> {
    line.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<Point> {
    let Some((x, y)) = token.split_once(',') else {
        return Err(PlotError::malformed(token, "missing ',' between x and y"));
    };

    if y.contains(',') {
        return Err(PlotError::malformed(token, "more than two components"));
    }

    let x = parse_number(token, x)?;
    let y = parse_number(token, y)?;
    Ok(Point::new(x, y))
}

fn parse_number(token: &str, part: &str) -> Result<f64> {
    part.parse::<f64>()
        .map_err(|e| PlotError::malformed(token, format!("'{}' is not a number ({})", part, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn writes_space_separated_pairs() {
        let curve = Curve::from_points(vec![Point::new(1.0, 2.0), Point::new(-0.5, 3.25)]);
        assert_eq!(serialize(&curve), "1,2 -0.5,3.25");
    }

    #[test]
    fn round_trips_points() {
        let curve = Curve::from_points(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        let points = deserialize(&serialize(&curve)).unwrap();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].x, 1.0);
        assert_relative_eq!(points[0].y, 2.0);
        assert_relative_eq!(points[1].x, 3.0);
        assert_relative_eq!(points[1].y, 4.0);
    }

    #[test]
    fn round_trip_is_exact_for_awkward_values() {
        let points = vec![
            Point::new(0.1 + 0.2, 1.0 / 3.0),
            Point::new(-1e-300, 6.02214076e23),
        ];
        assert_eq!(deserialize(&serialize_points(&points)).unwrap(), points);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let points = deserialize("  1,2\t3,4  ").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn empty_line_has_no_points() {
        assert!(deserialize("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_tokens() {
        for line in ["1,2 34", "1;2", "a,b", "1,2,3", "1,", ",1"] {
            assert!(
                matches!(deserialize(line), Err(PlotError::MalformedRecord { .. })),
                "accepted {:?}",
                line
            );
        }
    }
}
