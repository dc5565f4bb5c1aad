use std::path::Path;

use crate::domain::Location;

use super::GeodataError;

/// Load the pinned locations table from a JSON array
pub fn load_locations(path: &Path) -> Result<Vec<Location>, GeodataError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GeodataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let locations = serde_json::from_str(&contents).map_err(|source| GeodataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(locations)
}
