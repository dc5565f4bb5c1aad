use serde::Deserialize;
use std::path::PathBuf;

/// Sphere radii shared between the generator and the renderer.
///
/// LAYERED SPHERES: the renderer draws the opaque globe at the base radius;
/// the dot field sits just above it so dots never z-fight the surface, and
/// pins float above the dots. All three must use the same projection
/// convention or pins drift relative to their landmass.
pub mod radii {
    /// Opaque globe surface
    pub const GLOBE: f64 = 2.0;
    /// Dot field, slightly above the surface
    pub const DOTS: f64 = 2.01;
    /// Location pins, above the dot field
    pub const PINS: f64 = 2.1;
}

/// Tunables for the dot-field sampler.
///
/// Defaults reproduce the reference visualization; `grid_step` is the main
/// density knob and `coast_threshold` normally tracks it.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Degrees between adjacent samples (lower => denser field)
    pub grid_step: f64,
    /// Distance from the outer boundary (degrees) under which a sample is
    /// classified as coast
    pub coast_threshold: f64,
    /// Hard cap on combined coast+interior count across the whole dataset
    pub max_total_points: usize,
    /// Degrees added around each polygon's bbox to avoid clipping
    /// edge-adjacent samples
    pub bbox_padding: f64,
    /// Fraction of `grid_step` within which a sample counts as on the edge
    /// even when the strict inside test fails
    pub edge_proximity_factor: f64,
    /// Radius at which accepted samples are projected
    pub dot_radius: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            grid_step: 0.55,
            coast_threshold: 0.55,
            max_total_points: 30_000,
            bbox_padding: 0.5,
            edge_proximity_factor: 0.6,
            dot_radius: radii::DOTS,
        }
    }
}

fn default_simplify() -> u8 {
    0
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub world: Option<PathBuf>,
    #[serde(default)]
    pub locations: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub grid_step: Option<f64>,
    #[serde(default)]
    pub coast_threshold: Option<f64>,
    #[serde(default)]
    pub max_points: Option<usize>,
    #[serde(default)]
    pub bbox_padding: Option<f64>,
    #[serde(default)]
    pub edge_factor: Option<f64>,
    #[serde(default = "default_simplify")]
    pub simplify: u8,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("globedots.toml"));
    paths.push(PathBuf::from(".globedots.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("globedots").join("config.toml"));
        paths.push(config_dir.join("globedots.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".globedots.toml"));
        paths.push(home.join(".config").join("globedots").join("config.toml"));
    }

    paths
}
