/// Ordered boundary coordinates as (lng, lat) pairs in degrees.
/// Implicitly closed; no duplicate closing vertex is required.
pub type Ring = Vec<(f64, f64)>;

/// A polygon with an outer boundary and zero or more hole rings.
///
/// Holes are assumed to lie within the outer ring; malformed input is not
/// rejected, it just classifies unpredictably.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(outer: Ring) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    pub fn with_holes(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    pub fn is_valid(&self) -> bool {
        self.outer.len() >= 3
    }
}
