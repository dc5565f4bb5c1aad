pub mod projection;
pub mod rings;
pub mod simplify;

pub use projection::{Vec3, lat_lng_to_vec3};
pub use rings::{Bounds, dist_point_segment, min_dist_to_ring, point_in_polygon, point_in_ring};
pub use simplify::{epsilon_for_level, simplify_polygon};
