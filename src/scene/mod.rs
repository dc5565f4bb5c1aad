pub mod pins;
pub mod writer;

pub use pins::{PinMarker, project_pins};
pub use writer::{Scene, write_scene};
