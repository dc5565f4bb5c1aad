use crate::domain::Polygon;

/// Guard against zero denominators in edge intersection and segment math
const EPSILON: f64 = 1e-12;

/// Crossing-number (ray casting) point-in-ring test.
///
/// The ring is treated as implicitly closed: edge `j -> i` starts with
/// `j = len - 1`. A horizontal edge never flips parity because the degenerate
/// denominator is guarded with a small epsilon rather than special-cased.
pub fn point_in_ring(lng: f64, lat: f64, ring: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for i in 0..ring.len() {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];
        let intersect =
            ((yi > lat) != (yj > lat)) && (lng < (xj - xi) * (lat - yi) / ((yj - yi) + EPSILON) + xi);
        if intersect {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Inside the outer ring and not inside any hole ring.
///
/// A polygon with an empty outer ring contains nothing.
pub fn point_in_polygon(lng: f64, lat: f64, polygon: &Polygon) -> bool {
    if polygon.outer.is_empty() {
        return false;
    }
    if !point_in_ring(lng, lat, &polygon.outer) {
        return false;
    }
    for hole in &polygon.holes {
        if point_in_ring(lng, lat, hole) {
            return false;
        }
    }
    true
}

/// Distance from (px, py) to the segment (ax, ay)-(bx, by).
///
/// Closest-point projection with the parameter clamped to [0, 1]; planar
/// distance in (lng, lat) degrees, not great-circle. Zero-length segments are
/// handled by the epsilon in the denominator.
pub fn dist_point_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let abx = bx - ax;
    let aby = by - ay;
    let apx = px - ax;
    let apy = py - ay;
    let t = ((apx * abx + apy * aby) / (abx * abx + aby * aby + EPSILON)).clamp(0.0, 1.0);
    let cx = ax + abx * t;
    let cy = ay + aby * t;
    let dx = px - cx;
    let dy = py - cy;
    dx.hypot(dy)
}

/// Minimum distance from a point to the edges of a ring.
///
/// Only consecutive vertex pairs are tested; the closing edge from the last
/// vertex back to the first is intentionally skipped to match the reference
/// classifier's behavior.
pub fn min_dist_to_ring(lng: f64, lat: f64, ring: &[(f64, f64)]) -> f64 {
    let mut min = f64::INFINITY;
    for window in ring.windows(2) {
        let (ax, ay) = window[0];
        let (bx, by) = window[1];
        let d = dist_point_segment(lng, lat, ax, ay, bx, by);
        if d < min {
            min = d;
        }
    }
    min
}

/// Axis-aligned bounding box of a ring in (lng, lat) degrees
#[derive(Debug, Clone)]
pub struct Bounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Compute the bbox of a ring, starting from the far corners of the
    /// geographic coordinate space
    pub fn from_ring(ring: &[(f64, f64)]) -> Self {
        let mut bounds = Self {
            min_lng: 180.0,
            max_lng: -180.0,
            min_lat: 90.0,
            max_lat: -90.0,
        };
        for &(lng, lat) in ring {
            bounds.min_lng = bounds.min_lng.min(lng);
            bounds.max_lng = bounds.max_lng.max(lng);
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
        }
        bounds
    }

    /// Expand the bbox by `padding` degrees on all sides
    pub fn pad(&mut self, padding: f64) {
        self.min_lng -= padding;
        self.max_lng += padding;
        self.min_lat -= padding;
        self.max_lat += padding;
    }
}
