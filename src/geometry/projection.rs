use serde::Serialize;

/// A 3D Cartesian point on or near the globe surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length; for projected points this equals the sphere radius
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Coordinates as an f32 triplet for compact scene output
    pub fn as_f32(&self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

/// Project latitude/longitude (degrees) onto a sphere of the given radius.
///
/// Uses the renderer's sphere orientation convention:
/// - phi = (90 - lat) * pi/180
/// - theta = (lng + 180) * pi/180
/// - x = -r * sin(phi) * cos(theta)
/// - z =  r * sin(phi) * sin(theta)
/// - y =  r * cos(phi)
///
/// Dot placement and pin placement must agree on this orientation, so every
/// projection in the crate goes through this one function.
pub fn lat_lng_to_vec3(lat: f64, lng: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lng + 180.0).to_radians();

    let x = -(radius * phi.sin() * theta.cos());
    let z = radius * phi.sin() * theta.sin();
    let y = radius * phi.cos();

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_norm() {
        for &(lat, lng) in &[(0.0, 0.0), (45.0, 45.0), (-60.0, 170.0), (12.3, -87.6)] {
            let p = lat_lng_to_vec3(lat, lng, 2.01);
            assert!((p.norm() - 2.01).abs() < 1e-12);
        }
    }

    #[test]
    fn test_projection_poles() {
        // Poles are independent of longitude
        let north_a = lat_lng_to_vec3(90.0, 0.0, 1.0);
        let north_b = lat_lng_to_vec3(90.0, 123.0, 1.0);
        assert!((north_a.y - 1.0).abs() < 1e-12);
        assert!((north_a.x - north_b.x).abs() < 1e-12);
        assert!((north_a.z - north_b.z).abs() < 1e-12);

        let south = lat_lng_to_vec3(-90.0, 45.0, 1.0);
        assert!((south.y + 1.0).abs() < 1e-12);
        assert!(south.x.abs() < 1e-12);
        assert!(south.z.abs() < 1e-12);
    }

    #[test]
    fn test_projection_equator_reference() {
        // lat=0, lng=-180: phi=90deg, theta=0 -> (-r, 0, 0)
        let p = lat_lng_to_vec3(0.0, -180.0, 2.0);
        assert!((p.x + 2.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_projection_radius_scales_linearly() {
        let a = lat_lng_to_vec3(30.0, 60.0, 1.0);
        let b = lat_lng_to_vec3(30.0, 60.0, 2.1);
        assert!((b.x - a.x * 2.1).abs() < 1e-12);
        assert!((b.y - a.y * 2.1).abs() < 1e-12);
        assert!((b.z - a.z * 2.1).abs() < 1e-12);
    }
}
