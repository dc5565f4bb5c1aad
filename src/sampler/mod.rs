use crate::config::SamplerConfig;
use crate::domain::Polygon;
use crate::geometry::{Bounds, Vec3, lat_lng_to_vec3, min_dist_to_ring, point_in_polygon};

/// The classified dot field: projected sample points split into coast
/// (near the outer boundary) and interior, in generation order
#[derive(Debug, Clone, Default)]
pub struct DotField {
    pub coast: Vec<Vec3>,
    pub interior: Vec<Vec3>,
}

impl DotField {
    pub fn total(&self) -> usize {
        self.coast.len() + self.interior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coast.is_empty() && self.interior.is_empty()
    }
}

/// Generates the stippled landmass dot field from polygon boundaries.
///
/// # Algorithm
/// Per polygon, in input order:
/// 1. Pad the outer ring's bbox by `bbox_padding`
/// 2. Walk a staggered lat/lng grid over the bbox: odd rows (counted from
///    the bbox bottom in `grid_step` units) shift longitudes by half a step,
///    breaking up axis-aligned artifacts
/// 3. Accept a sample if it is inside the polygon (holes excluded) or within
///    `grid_step * edge_proximity_factor` of the outer ring
/// 4. Classify by distance to the outer ring: within `coast_threshold` is
///    coast, otherwise interior
/// 5. Project at `dot_radius` and append
///
/// Generation stops the moment the combined count reaches
/// `max_total_points`; the cap is global across all polygons.
#[derive(Debug, Clone)]
pub struct DotSampler {
    config: SamplerConfig,
}

impl DotSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Sample every polygon until done or the point cap is hit.
    ///
    /// Deterministic and order-stable: identical input and config yield
    /// identical sequences. Total over malformed polygons, which simply
    /// contribute no samples.
    pub fn sample(&self, polygons: &[Polygon]) -> DotField {
        let mut field = DotField::default();
        for polygon in polygons {
            if !self.sample_polygon(polygon, &mut field) {
                break;
            }
        }
        field
    }

    /// Returns false once the global cap is reached
    fn sample_polygon(&self, polygon: &Polygon, field: &mut DotField) -> bool {
        if polygon.outer.is_empty() {
            return true;
        }
        let outer = &polygon.outer;

        let mut bounds = Bounds::from_ring(outer);
        bounds.pad(self.config.bbox_padding);

        let step = self.config.grid_step;
        let edge_cutoff = step * self.config.edge_proximity_factor;

        let lat_end = bounds.max_lat.ceil();
        let lng_start = bounds.min_lng.floor();
        let lng_end = bounds.max_lng.ceil();

        let mut lat = bounds.min_lat.floor();
        while lat <= lat_end {
            let row = ((lat - bounds.min_lat) / step).round() as i64;
            let lng_offset = if row % 2 != 0 { step * 0.5 } else { 0.0 };

            let mut lng = lng_start;
            while lng <= lng_end {
                let l = lng + lng_offset;

                let d = min_dist_to_ring(l, lat, outer);
                let on_edge = d < edge_cutoff;
                if point_in_polygon(l, lat, polygon) || on_edge {
                    let pos = lat_lng_to_vec3(lat, l, self.config.dot_radius);
                    if d <= self.config.coast_threshold {
                        field.coast.push(pos);
                    } else {
                        field.interior.push(pos);
                    }
                    if field.total() >= self.config.max_total_points {
                        return false;
                    }
                }

                lng += step;
            }

            lat += step;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Polygon {
        Polygon::new(vec![(0.0, 0.0), (0.0, size), (size, size), (size, 0.0)])
    }

    fn config() -> SamplerConfig {
        SamplerConfig {
            grid_step: 1.0,
            coast_threshold: 1.0,
            ..SamplerConfig::default()
        }
    }

    #[test]
    fn test_sample_empty_input() {
        let sampler = DotSampler::new(config());
        let field = sampler.sample(&[]);
        assert!(field.is_empty());
    }

    #[test]
    fn test_sample_degenerate_polygon() {
        let sampler = DotSampler::new(config());
        let field = sampler.sample(&[Polygon::new(Vec::new())]);
        assert!(field.is_empty());
    }

    #[test]
    fn test_sample_square_classifies_both() {
        let sampler = DotSampler::new(config());
        let field = sampler.sample(&[square(40.0)]);
        assert!(!field.coast.is_empty());
        assert!(!field.interior.is_empty());
    }

    #[test]
    fn test_samples_lie_on_dot_sphere() {
        let sampler = DotSampler::new(config());
        let field = sampler.sample(&[square(10.0)]);
        let radius = SamplerConfig::default().dot_radius;
        for p in field.coast.iter().chain(field.interior.iter()) {
            assert!((p.norm() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hole_excludes_samples() {
        let solid = square(20.0);
        let holed = Polygon::with_holes(
            solid.outer.clone(),
            vec![vec![(5.0, 5.0), (5.0, 15.0), (15.0, 15.0), (15.0, 5.0)]],
        );

        let sampler = DotSampler::new(config());
        let with_hole = sampler.sample(&[holed]).total();
        let without_hole = sampler.sample(&[solid]).total();
        assert!(with_hole < without_hole);
    }

    #[test]
    fn test_global_cap_is_exact() {
        let cfg = SamplerConfig {
            max_total_points: 25,
            ..config()
        };
        let sampler = DotSampler::new(cfg);
        // Two polygons with far more than 25 candidate samples between them
        let field = sampler.sample(&[square(40.0), square(40.0)]);
        assert_eq!(field.total(), 25);
    }

    #[test]
    fn test_cap_spans_polygons() {
        let sampler = DotSampler::new(config());
        let one = sampler.sample(&[square(10.0)]).total();
        let cfg = SamplerConfig {
            max_total_points: one + 5,
            ..config()
        };
        let sampler = DotSampler::new(cfg);
        let field = sampler.sample(&[square(10.0), square(10.0)]);
        assert_eq!(field.total(), one + 5);
    }

    #[test]
    fn test_deterministic() {
        let polygons = vec![
            square(15.0),
            Polygon::new(vec![(30.0, -10.0), (30.0, 5.0), (50.0, 5.0), (50.0, -10.0)]),
        ];
        let sampler = DotSampler::new(config());
        let a = sampler.sample(&polygons);
        let b = sampler.sample(&polygons);
        assert_eq!(a.coast, b.coast);
        assert_eq!(a.interior, b.interior);
    }

    #[test]
    fn test_small_polygon_is_all_coast() {
        // Every sample in a 2x2 square sits within one grid step of the
        // boundary
        let sampler = DotSampler::new(config());
        let field = sampler.sample(&[square(2.0)]);
        assert!(!field.coast.is_empty());
        assert!(field.interior.is_empty());
    }
}
