// core holds the terrain synthesis engine and the scene renderers built on it
pub mod color;
pub mod error;
pub mod fractal;
pub mod heights;
pub mod lcg;
pub mod raster;
pub mod scene;
pub mod svg;
pub mod utils;
pub mod value_noise;

pub use error::{Error, Result};
pub use fractal::{Fractal1D, OctaveParams, fractal};
pub use heights::{LayerShape, get_heights, round_heights};
pub use lcg::{Lcg, Seed, next_seed, random_in_range, random_unit};
pub use scene::{LayerProfile, MountainLayer, Scene, SceneConfig};
pub use value_noise::{ValueNoise1D, build_lattice, sample, smoothstep};

// noise generator that can be sampled along a single axis
// Implementations only need `get1(...)`; `generate(...)` samples every
// integer x in [0, width).
pub trait NoiseGenerator {
    // Sample the noise at position x.
    fn get1(&self, x: f64) -> f64;

    // Sample the noise at x = 0, 1, .., width - 1.
    fn generate(&self, width: usize) -> Vec<f64> {
        (0..width).map(|x| self.get1(x as f64)).collect()
    }
}
