use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use crate::color::ColorRamp;
use crate::heights::round_heights;
use crate::scene::{LayerProfile, Scene, SceneConfig};
use crate::utils::{Timed, min_max};
use crate::Result;

// Rasterize a scene: background gradient over the whole canvas, then every
// layer back to front, each filled from its ridge line down to the bottom edge.
pub fn render(scene: &Scene) -> RgbImage {
    let _t = Timed::debug("raster");
    let (w, h) = (scene.width, scene.height);
    let mut img = RgbImage::new(w, h);

    if let Some(ramp) = ColorRamp::new(&scene.background) {
        for y in 0..h {
            let pixel = Rgb(ramp.at(ramp_position(y, 0.0, h as f64)));
            for x in 0..w {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    for layer in &scene.layers {
        fill_layer(&mut img, layer);
    }
    img
}

// Build the scene for a canvas and rasterize it
pub fn render_config(config: &SceneConfig, width: u32, height: u32) -> Result<RgbImage> {
    let scene = Scene::build(config, width, height)?;
    Ok(render(&scene))
}

pub fn save_png(config: &SceneConfig, width: u32, height: u32, path: impl AsRef<Path>) -> Result<()> {
    let img = render_config(config, width, height)?;
    img.save(path.as_ref())?;
    info!("saved {}x{} png to {}", width, height, path.as_ref().display());
    Ok(())
}

fn fill_layer(img: &mut RgbImage, layer: &LayerProfile) {
    let Some(ramp) = ColorRamp::new(&layer.colors) else {
        return;
    };
    let (w, h) = img.dimensions();
    let canvas_height = h as f64;
    let ridge = round_heights(&layer.heights);
    // The gradient spans from the layer's highest point to the bottom edge
    let top = min_max(&ridge).map_or(0.0, |(min, _)| min);

    for (x, &ridge_y) in ridge.iter().enumerate().take(w as usize) {
        let start = ridge_y.clamp(0.0, canvas_height) as u32;
        for y in start..h {
            let pixel = Rgb(ramp.at(ramp_position(y, top, canvas_height)));
            img.put_pixel(x as u32, y, pixel);
        }
    }
}

// Position of pixel row y's center along a vertical gradient from `from` to `to`
fn ramp_position(y: u32, from: f64, to: f64) -> f32 {
    let span = to - from;
    if span <= 0.0 {
        return 0.0;
    }
    ((y as f64 + 0.5 - from) / span) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    fn flat_layer(y: f64, width: usize, color: HexColor) -> LayerProfile {
        LayerProfile {
            index: 0,
            seed: 0,
            heights: vec![y; width],
            colors: vec![color],
        }
    }

    #[test]
    fn raster_fills_below_ridge() {
        let sky = HexColor::new(200, 230, 255);
        let rock = HexColor::new(20, 30, 40);
        let scene = Scene {
            width: 8,
            height: 10,
            background: vec![sky],
            layers: vec![flat_layer(6.2, 8, rock)],
        };
        let img = render(&scene);
        assert_eq!(img.dimensions(), (8, 10));
        for x in 0..8 {
            assert_eq!(img.get_pixel(x, 5).0, sky.to_rgb());
            assert_eq!(img.get_pixel(x, 6).0, rock.to_rgb());
            assert_eq!(img.get_pixel(x, 9).0, rock.to_rgb());
        }
    }

    #[test]
    fn raster_clips_off_canvas_layers() {
        let sky = HexColor::new(1, 2, 3);
        let scene = Scene {
            width: 4,
            height: 4,
            background: vec![sky],
            layers: vec![
                flat_layer(-50.0, 4, HexColor::new(9, 9, 9)),
                flat_layer(400.0, 4, HexColor::new(7, 7, 7)),
            ],
        };
        let img = render(&scene);
        // The first layer covers everything; the second never reaches the canvas
        assert!(img.pixels().all(|p| p.0 == [9, 9, 9]));
    }

    #[test]
    fn raster_default_scene() {
        let img = render_config(&SceneConfig::default(), 256, 128).unwrap();
        assert_eq!(img.dimensions(), (256, 128));
        // Mountains cover the bottom edge
        assert_ne!(img.get_pixel(0, 127).0, [0xcb, 0xe8, 0xff]);
    }

    #[test]
    fn ramp_position_guards_empty_span() {
        assert_eq!(ramp_position(3, 10.0, 10.0), 0.0);
        assert!((ramp_position(0, 0.0, 2.0) - 0.25).abs() < 1e-6);
    }
}
