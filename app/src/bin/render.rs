use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use mountains::{SceneConfig, raster, svg};

/// Render a layered mountain scene to PNG and/or SVG without opening a window
#[derive(Parser, Debug)]
#[command(name = "render", version, about)]
struct Cli {
    /// Scene config (JSON). Defaults to the built-in five-layer scene
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root seed, overriding the config's
    #[arg(long)]
    seed: Option<u64>,

    /// Advance the root seed this many times before rendering
    #[arg(long, default_value_t = 0)]
    regenerate: u32,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 2048)]
    width: u32,

    /// Canvas height in pixels (defaults to half the width)
    #[arg(long)]
    height: Option<u32>,

    /// Write a PNG here
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// Write an SVG here
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Write the effective scene config (after seed changes) here
    #[arg(long, value_name = "FILE")]
    dump_config: Option<PathBuf>,
}

fn run(cli: Cli) -> mountains::Result<()> {
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    for _ in 0..cli.regenerate {
        config.regenerate();
    }

    let width = cli.width;
    let height = cli.height.unwrap_or(width / 2);
    println!("Rendering {}x{} scene, seed {}", width, height, config.seed);

    // Without explicit outputs fall back to a PNG named after the seed
    let png = match (&cli.png, &cli.svg) {
        (None, None) => Some(PathBuf::from(format!("mountains_{}.png", config.seed))),
        (png, _) => png.clone(),
    };

    let start = Instant::now();
    if let Some(path) = &png {
        raster::save_png(&config, width, height, path)?;
        println!("Saved {}", path.display());
    }
    if let Some(path) = &cli.svg {
        svg::save_svg(&config, width, height, path)?;
        println!("Saved {}", path.display());
    }
    if let Some(path) = &cli.dump_config {
        config.save(path)?;
        println!("Saved {}", path.display());
    }
    println!("Done in {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
