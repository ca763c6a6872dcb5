// Renders the default five-layer scene to PNG and SVG, then the next scene
// in the seed sequence.

use mountains::SceneConfig;
use mountains::raster::save_png;
use mountains::svg::save_svg;

fn main() -> mountains::Result<()> {
    let width = 2048;
    let height = width / 2;

    let mut config = SceneConfig::default();
    for _ in 0..2 {
        save_png(&config, width, height, format!("mountains_{}.png", config.seed))?;
        save_svg(&config, width, height, format!("mountains_{}.svg", config.seed))?;
        println!("Saved scene for seed {}", config.seed);
        config.regenerate();
    }
    Ok(())
}
