pub mod locations;
pub mod world;

use std::path::PathBuf;
use thiserror::Error;

pub use locations::load_locations;
pub use world::{Feature, FeatureCollection, Geometry, load_world};

/// Errors while loading input datasets. Malformed individual geometries are
/// not errors; only unreadable or unparseable files are.
#[derive(Debug, Error)]
pub enum GeodataError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
