use serde::Serialize;

use crate::domain::Location;
use crate::geometry::lat_lng_to_vec3;

/// A location pin with its projected position and the display metadata the
/// tooltip layer shows on hover
#[derive(Debug, Clone, Serialize)]
pub struct PinMarker {
    pub id: String,
    pub name: String,
    /// Cartesian position on the pin sphere
    pub position: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Project each location onto the pin sphere, preserving input order
pub fn project_pins(locations: &[Location], radius: f64) -> Vec<PinMarker> {
    locations
        .iter()
        .map(|loc| PinMarker {
            id: loc.id.clone(),
            name: loc.name.clone(),
            position: lat_lng_to_vec3(loc.lat, loc.lng, radius).as_f32(),
            player_name: loc.player_name.clone(),
            team: loc.team.clone(),
            country: loc.country.clone(),
            image: loc.image.clone(),
            count: loc.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::radii;

    fn location(id: &str, name: &str, lat: f64, lng: f64) -> Location {
        Location {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lng,
            player_name: None,
            team: None,
            country: None,
            image: None,
            count: None,
        }
    }

    #[test]
    fn test_project_pins_order_and_radius() {
        let locations = vec![
            location("1", "Detroit", 42.3314, -83.0458),
            location("2", "Sydney", -33.8688, 151.2093),
        ];
        let pins = project_pins(&locations, radii::PINS);

        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].name, "Detroit");
        assert_eq!(pins[1].name, "Sydney");
        for pin in &pins {
            let [x, y, z] = pin.position;
            let norm = ((x * x + y * y + z * z) as f64).sqrt();
            assert!((norm - radii::PINS).abs() < 1e-5);
        }
    }
}
