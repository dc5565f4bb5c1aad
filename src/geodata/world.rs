use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::domain::{Polygon, Ring};

use super::GeodataError;

/// GeoJSON-like feature collection. Only the geometry is used; properties
/// are carried along untouched for debugging.
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    /// Anything that fails to parse as a known geometry becomes `None` so a
    /// single bad feature cannot fail the whole dataset
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Value>,
}

fn lenient_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Geometry variants the sampler understands. Coordinates stay untyped here
/// because malformed nesting must skip the feature, not fail the whole load.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: Value,
    },
    MultiPolygon {
        coordinates: Value,
    },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Normalize into a uniform list of polygons. Unsupported types and
    /// malformed coordinate arrays contribute nothing.
    pub fn polygons(&self) -> Vec<Polygon> {
        match self {
            Geometry::Polygon { coordinates } => parse_polygon(coordinates).into_iter().collect(),
            Geometry::MultiPolygon { coordinates } => match coordinates.as_array() {
                Some(polys) => polys.iter().filter_map(parse_polygon).collect(),
                None => Vec::new(),
            },
            Geometry::Unsupported => Vec::new(),
        }
    }
}

impl FeatureCollection {
    /// All polygons across all features, in feature order
    pub fn polygons(&self) -> Vec<Polygon> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .flat_map(|g| g.polygons())
            .collect()
    }
}

fn parse_coord(value: &Value) -> Option<(f64, f64)> {
    let pair = value.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    Some((pair[0].as_f64()?, pair[1].as_f64()?))
}

fn parse_ring(value: &Value) -> Option<Ring> {
    let coords = value.as_array()?;
    if coords.len() < 3 {
        return None;
    }
    coords.iter().map(parse_coord).collect()
}

fn parse_polygon(value: &Value) -> Option<Polygon> {
    let rings = value.as_array()?;
    let mut iter = rings.iter();
    let outer = parse_ring(iter.next()?)?;
    // A malformed hole invalidates the whole polygon rather than silently
    // dropping the exclusion it represents
    let holes: Option<Vec<Ring>> = iter.map(parse_ring).collect();
    Some(Polygon::with_holes(outer, holes?))
}

/// Load a world dataset from a GeoJSON file
pub fn load_world(path: &Path) -> Result<FeatureCollection, GeodataError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GeodataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let collection = serde_json::from_str(&contents).map_err(|source| GeodataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FeatureCollection {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_polygon_feature() {
        let fc = parse(
            r#"{"features": [{"geometry": {"type": "Polygon",
                "coordinates": [[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]]}}]}"#,
        );
        let polygons = fc.polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].outer.len(), 4);
        assert!(polygons[0].holes.is_empty());
    }

    #[test]
    fn test_multipolygon_feature() {
        let fc = parse(
            r#"{"features": [{"geometry": {"type": "MultiPolygon", "coordinates": [
                [[[0, 0], [0, 1], [1, 1]]],
                [[[5, 5], [5, 6], [6, 6]], [[5.2, 5.2], [5.2, 5.4], [5.4, 5.4]]]
            ]}}]}"#,
        );
        let polygons = fc.polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[1].holes.len(), 1);
    }

    #[test]
    fn test_unsupported_geometry_skipped() {
        let fc = parse(
            r#"{"features": [
                {"geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
                {"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
                {"geometry": null},
                {"geometry": {}},
                {"geometry": 7},
                {}
            ]}"#,
        );
        assert!(fc.polygons().is_empty());
    }

    #[test]
    fn test_malformed_coordinates_skipped() {
        // Ring with too few points, ring with non-numeric coords, bad nesting
        let fc = parse(
            r#"{"features": [
                {"geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]}},
                {"geometry": {"type": "Polygon", "coordinates": [[["a", 0], [0, 1], [1, 1]]]}},
                {"geometry": {"type": "Polygon", "coordinates": 42}}
            ]}"#,
        );
        assert!(fc.polygons().is_empty());
    }

    #[test]
    fn test_coordinates_with_altitude() {
        let fc = parse(
            r#"{"features": [{"geometry": {"type": "Polygon",
                "coordinates": [[[0, 0, 100], [0, 1, 100], [1, 1, 100]]]}}]}"#,
        );
        assert_eq!(fc.polygons().len(), 1);
    }
}
