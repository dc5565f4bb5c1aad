use geo::{LineString, Simplify};

use crate::domain::{Polygon, Ring};

pub fn simplify_ring(ring: &[(f64, f64)], epsilon: f64) -> Ring {
    if ring.len() < 5 {
        return ring.to_vec();
    }

    let line: LineString<f64> = ring
        .iter()
        .map(|&(lng, lat)| geo::coord! { x: lng, y: lat })
        .collect();

    let simplified: Ring = line.simplify(&epsilon).0.into_iter().map(|c| (c.x, c.y)).collect();

    // A ring below 3 vertices is no longer a ring
    if simplified.len() < 3 {
        return ring.to_vec();
    }

    simplified
}

pub fn simplify_polygon(polygon: &Polygon, epsilon: f64) -> Polygon {
    Polygon {
        outer: simplify_ring(&polygon.outer, epsilon),
        holes: polygon.holes.iter().map(|h| simplify_ring(h, epsilon)).collect(),
    }
}

/// Map a 0-3 simplification level to a Douglas-Peucker epsilon in degrees.
/// Level 0 disables simplification entirely.
pub fn epsilon_for_level(level: u8) -> Option<f64> {
    match level {
        0 => None,
        1 => Some(0.01),
        2 => Some(0.05),
        _ => Some(0.1),
    }
}
