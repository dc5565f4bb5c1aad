pub mod location;
pub mod polygon;

pub use location::Location;
pub use polygon::{Polygon, Ring};
