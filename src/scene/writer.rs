use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::PinMarker;
use crate::config::radii;
use crate::sampler::DotField;

/// The document handed to the renderer: both dot sequences, all pins, and
/// the sphere radii everything was projected at
#[derive(Debug, Serialize)]
pub struct Scene {
    pub radii: SceneRadii,
    pub coast: Vec<[f32; 3]>,
    pub interior: Vec<[f32; 3]>,
    pub pins: Vec<PinMarker>,
}

#[derive(Debug, Serialize)]
pub struct SceneRadii {
    pub globe: f64,
    pub dots: f64,
    pub pins: f64,
}

impl Scene {
    pub fn new(field: &DotField, pins: Vec<PinMarker>) -> Self {
        Self {
            radii: SceneRadii {
                globe: radii::GLOBE,
                dots: radii::DOTS,
                pins: radii::PINS,
            },
            coast: field.coast.iter().map(|p| p.as_f32()).collect(),
            interior: field.interior.iter().map(|p| p.as_f32()).collect(),
            pins,
        }
    }
}

/// Write the scene as JSON
pub fn write_scene(path: &Path, scene: &Scene) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create scene file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, scene).context("Failed to serialize scene")?;
    writer.flush()?;
    Ok(())
}
