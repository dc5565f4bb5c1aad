//! globedots - Generate stippled globe point clouds and pin positions from GeoJSON data

pub mod config;
pub mod domain;
pub mod geodata;
pub mod geometry;
pub mod sampler;
pub mod scene;

pub use config::SamplerConfig;
pub use sampler::{DotField, DotSampler};
