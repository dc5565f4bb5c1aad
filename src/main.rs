use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod domain;
mod geodata;
mod geometry;
mod sampler;
mod scene;

use config::{FileConfig, SamplerConfig};
use geodata::{load_locations, load_world};
use geometry::{epsilon_for_level, simplify_polygon};
use sampler::DotSampler;
use scene::{Scene, project_pins, write_scene};

/// Generate stippled globe point clouds and pin positions from GeoJSON data
///
/// Examples:
///   # Generate a scene from a world dataset with default density
///   globedots -w world.geojson -o scene.json
///
///   # Denser dot field with pins
///   globedots -w world.geojson -l locations.json --grid-step 0.4
///
///   # Coarse preview capped at 5000 dots
///   globedots -w world.geojson --grid-step 1.5 --max-points 5000 --simplify 2
///
///   # Use a config file
///   globedots --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "globedots")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches globedots.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// World polygon dataset (GeoJSON FeatureCollection)
    #[arg(short = 'w', long)]
    world: Option<PathBuf>,

    /// Pinned locations file (JSON array); omit for a pinless scene
    #[arg(short = 'l', long)]
    locations: Option<PathBuf>,

    /// Output scene file path
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Degrees between adjacent dot samples (lower => denser field)
    #[arg(long)]
    grid_step: Option<f64>,

    /// Distance from the outer boundary (degrees) under which a dot is coast
    /// (defaults to the grid step)
    #[arg(long)]
    coast_threshold: Option<f64>,

    /// Hard cap on total dot count across the whole dataset
    #[arg(long)]
    max_points: Option<usize>,

    /// Padding (degrees) added around each polygon's bounding box
    #[arg(long)]
    bbox_padding: Option<f64>,

    /// Fraction of the grid step within which a dot counts as on the edge
    #[arg(long)]
    edge_factor: Option<f64>,

    /// Boundary simplification level: 0=off (default), 1=light, 2=medium, 3=aggressive
    /// Higher values speed up sampling but may lose coastline detail
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
    simplify: u8,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let world = args
        .world
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.world.clone()));
    let locations_path = args
        .locations
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.locations.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()))
        .unwrap_or_else(|| PathBuf::from("scene.json"));
    let grid_step = args
        .grid_step
        .or_else(|| file_config.as_ref().and_then(|c| c.grid_step));
    let coast_threshold = args
        .coast_threshold
        .or_else(|| file_config.as_ref().and_then(|c| c.coast_threshold));
    let max_points = args
        .max_points
        .or_else(|| file_config.as_ref().and_then(|c| c.max_points));
    let bbox_padding = args
        .bbox_padding
        .or_else(|| file_config.as_ref().and_then(|c| c.bbox_padding));
    let edge_factor = args
        .edge_factor
        .or_else(|| file_config.as_ref().and_then(|c| c.edge_factor));
    let simplify = if args.simplify != 0 {
        args.simplify
    } else {
        file_config.as_ref().map(|c| c.simplify).unwrap_or(0)
    };
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let Some(world) = world else {
        bail!("Must provide a world dataset with --world/-w or in the config file");
    };

    let defaults = SamplerConfig::default();
    let sampler_config = SamplerConfig {
        grid_step: grid_step.unwrap_or(defaults.grid_step),
        // Coast threshold tracks the grid step unless pinned explicitly
        coast_threshold: coast_threshold
            .or(grid_step)
            .unwrap_or(defaults.coast_threshold),
        max_total_points: max_points.unwrap_or(defaults.max_total_points),
        bbox_padding: bbox_padding.unwrap_or(defaults.bbox_padding),
        edge_proximity_factor: edge_factor.unwrap_or(defaults.edge_proximity_factor),
        dot_radius: defaults.dot_radius,
    };
    if sampler_config.grid_step <= 0.0 {
        bail!("--grid-step must be positive");
    }

    println!("globedots - Globe Dot Field Generator");
    println!("=====================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  World: {}", world.display());
        if let Some(ref l) = locations_path {
            println!("  Locations: {}", l.display());
        }
        println!("  Grid step: {} deg", sampler_config.grid_step);
        println!("  Coast threshold: {} deg", sampler_config.coast_threshold);
        println!("  Max points: {}", sampler_config.max_total_points);
        println!("  BBox padding: {} deg", sampler_config.bbox_padding);
        println!("  Edge factor: {}", sampler_config.edge_proximity_factor);
        println!("  Simplify level: {}", simplify);
        println!("  Output: {}", output.display());
        println!();
    }

    let spinner = create_spinner("Loading world dataset...");
    let start = Instant::now();
    let collection = load_world(&world).context("Failed to load world dataset")?;
    let mut polygons = collection.polygons();
    spinner.finish_with_message(format!(
        "Loaded {} features -> {} polygons [{:.1}s]",
        collection.features.len(),
        polygons.len(),
        start.elapsed().as_secs_f32()
    ));
    if polygons.is_empty() {
        bail!("No polygon geometry found in {}", world.display());
    }

    if let Some(epsilon) = epsilon_for_level(simplify) {
        let before: usize = polygons.iter().map(|p| p.outer.len()).sum();
        polygons = polygons.iter().map(|p| simplify_polygon(p, epsilon)).collect();
        let after: usize = polygons.iter().map(|p| p.outer.len()).sum();
        if verbose {
            println!("  Simplified boundaries: {} -> {} vertices", before, after);
        }
    }

    let spinner = create_spinner("Sampling dot field...");
    let start = Instant::now();
    let sampler = DotSampler::new(sampler_config.clone());
    let field = sampler.sample(&polygons);
    spinner.finish_with_message(format!(
        "Sampled {} dots ({} coast, {} interior) [{:.1}s]",
        field.total(),
        field.coast.len(),
        field.interior.len(),
        start.elapsed().as_secs_f32()
    ));
    if field.total() >= sampler_config.max_total_points && verbose {
        println!(
            "  Hit the {} point cap; raise --max-points or --grid-step for full coverage",
            sampler_config.max_total_points
        );
    }

    let pins = if let Some(ref path) = locations_path {
        let spinner = create_spinner("Projecting location pins...");
        let locations = load_locations(path).context("Failed to load locations")?;
        let pins = project_pins(&locations, config::radii::PINS);
        spinner.finish_with_message(format!("Projected {} pins", pins.len()));
        pins
    } else {
        Vec::new()
    };

    let spinner = create_spinner("Writing scene file...");
    let start = Instant::now();
    let scene = Scene::new(&field, pins);
    write_scene(&output, &scene).context("Failed to write scene file")?;
    spinner.finish_with_message(format!(
        "Wrote {} [{:.1}s]",
        output.display(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done: {} dots, {} pins in {:.1}s",
        scene.coast.len() + scene.interior.len(),
        scene.pins.len(),
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
