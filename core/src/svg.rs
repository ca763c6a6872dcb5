use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::color::{HexColor, stop_offset};
use crate::heights::round_heights;
use crate::scene::{LayerProfile, Scene, SceneConfig};
use crate::utils::Timed;
use crate::Result;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const BACKGROUND_ID: &str = "background";

// Vector rendering of a scene. Each layer becomes one closed path whose
// vertices are its rounded heights, filled with a top-to-bottom gradient.
pub fn render(scene: &Scene) -> String {
    let _t = Timed::debug("svg");
    let (w, h) = (scene.width, scene.height);

    let mut defs = String::new();
    write_gradient(&mut defs, BACKGROUND_ID, &scene.background);
    for layer in &scene.layers {
        write_gradient(&mut defs, &layer_id(layer), &layer.colors);
    }

    let mut svg = String::new();
    let _ = write!(svg, r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}">"#);
    let _ = write!(svg, "<defs>{defs}</defs>");
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="url(#{BACKGROUND_ID})"></rect>"#
    );
    for layer in &scene.layers {
        let _ = write!(
            svg,
            r#"<path d="{}" fill="url(#{})"></path>"#,
            path_data(&layer.heights, h),
            layer_id(layer)
        );
    }
    svg.push_str("</svg>");
    svg
}

// Build the scene and render it. Layers are sampled at width + 1 points so
// the last vertex lands on the right edge.
pub fn render_config(config: &SceneConfig, width: u32, height: u32) -> Result<String> {
    let scene = Scene::build_with_samples(config, width, height, width as usize + 1)?;
    Ok(render(&scene))
}

pub fn save_svg(config: &SceneConfig, width: u32, height: u32, path: impl AsRef<Path>) -> Result<()> {
    let svg = render_config(config, width, height)?;
    fs::write(path.as_ref(), svg)?;
    info!("saved {}x{} svg to {}", width, height, path.as_ref().display());
    Ok(())
}

// "M 0 H L 0 y0 L 1 y1 ... L last H Z" with H the canvas height
pub fn path_data(heights: &[f64], canvas_height: u32) -> String {
    let mut d = format!("M 0 {}", canvas_height);
    for (x, y) in round_heights(heights).iter().enumerate() {
        let _ = write!(d, " L {} {}", x, y);
    }
    let last = heights.len().saturating_sub(1);
    let _ = write!(d, " L {} {} Z", last, canvas_height);
    d
}

fn layer_id(layer: &LayerProfile) -> String {
    format!("mountain{}", layer.index)
}

fn write_gradient(out: &mut String, id: &str, colors: &[HexColor]) {
    let _ = write!(
        out,
        r#"<linearGradient id="{id}" x1="0" x2="0" y1="0" y2="1">"#
    );
    for (i, color) in colors.iter().enumerate() {
        let _ = write!(
            out,
            "<stop offset=\"{}%\" stop-color=\"#{}\"></stop>",
            stop_offset(i, colors.len()) * 100.0,
            color
        );
    }
    out.push_str("</linearGradient>");
}
