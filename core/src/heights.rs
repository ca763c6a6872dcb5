use serde::{Deserialize, Serialize};

use crate::fractal::Fractal1D;
use crate::lcg::{Lcg, Seed};
use crate::Result;

// Shape parameters of one mountain layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerShape {
    // larger = rougher ridge line
    pub octaves: u32,
    // divisor on the vertical amplitude; larger = flatter
    pub flatness: f64,
    // where the layer's average height sits, as a fraction of the canvas height
    #[serde(alias = "height")]
    pub height_bias: f64,
    // number of peaks across the width; base wavelength = width / peaks
    pub peaks: i32,
}

impl LayerShape {
    // Pixel-space y coordinates for x = 0..width on a canvas `canvas_height` tall.
    //
    // Values are not clamped: a layer may extend above or below the canvas
    // and is clipped by whatever draws it.
    pub fn heights(&self, lcg: &Lcg, width: usize, canvas_height: f64, seed: Seed) -> Result<Vec<f64>> {
        let wavelength = width as f64 / self.peaks as f64;
        // Validates wavelength and octave count before any noise is drawn
        let fractal = Fractal1D::new(self.octaves, wavelength, *lcg)?;
        let raw = fractal.generate(width, seed)?;

        let scale = canvas_height / self.flatness;
        // Mean of (y + 1) * scale, the same +1 shift the per-point transform applies
        let sum: f64 = raw.iter().sum();
        let average = (sum + width as f64) / width as f64 * scale;
        let shift = -canvas_height * self.height_bias + average;

        Ok(raw.into_iter().map(|y| scale_y(y, scale, shift)).collect())
    }
}

#[inline]
fn scale_y(y: f64, scale: f64, shift: f64) -> f64 {
    (y + 1.0) * scale + shift
}

// Height profile for one layer over the standard generator
pub fn get_heights(
    width: usize,
    canvas_height: f64,
    octaves: u32,
    flatness: f64,
    height_bias: f64,
    peaks: i32,
    seed: Seed,
) -> Result<Vec<f64>> {
    let shape = LayerShape {
        octaves,
        flatness,
        height_bias,
        peaks,
    };
    shape.heights(&Lcg::STANDARD, width, canvas_height, seed)
}

// Snap heights to whole pixels, rounding halves up (towards +inf)
pub fn round_heights(heights: &[f64]) -> Vec<f64> {
    heights.iter().map(|h| (h + 0.5).floor()).collect()
}
