use log::debug;

use crate::lcg::{Lcg, Seed};
use crate::value_noise::{ValueNoise1D, validate_wavelength};
use crate::{Error, NoiseGenerator, Result};

// Wavelength, amplitude and seed of one octave.
// Octave i uses base_wavelength / 2^i, amplitude 1 / 2^i and seed base_seed + i.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveParams {
    pub index: u32,
    pub wavelength: f64,
    pub amplitude: f64,
    pub seed: Seed,
}

impl OctaveParams {
    pub fn new(index: u32, base_wavelength: f64, base_seed: Seed) -> Self {
        let factor = 2f64.powi(index as i32);
        Self {
            index,
            wavelength: base_wavelength / factor,
            amplitude: 1.0 / factor,
            seed: base_seed.wrapping_add(index as Seed),
        }
    }
}

// Sum of value-noise octaves at halving wavelengths and amplitudes (1D fBm)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractal1D {
    octaves: u32,
    base_wavelength: f64,
    lcg: Lcg,
}

impl Fractal1D {
    // Both parameters are checked here so no lattice work starts on bad input
    pub fn new(octaves: u32, base_wavelength: f64, lcg: Lcg) -> Result<Self> {
        validate_wavelength(base_wavelength)?;
        if octaves < 1 {
            return Err(Error::InvalidOctaves { octaves });
        }
        Ok(Self {
            octaves,
            base_wavelength,
            lcg,
        })
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn base_wavelength(&self) -> f64 {
        self.base_wavelength
    }

    pub fn octave_params(&self, seed: Seed) -> impl Iterator<Item = OctaveParams> + '_ {
        (0..self.octaves).map(move |i| OctaveParams::new(i, self.base_wavelength, seed))
    }

    // Build every octave's lattice. Each octave starts from its own derived seed,
    // so the seed left over after one lattice is never reused by the next.
    pub fn lattices(&self, width: usize, seed: Seed) -> Result<Vec<(OctaveParams, ValueNoise1D)>> {
        self.octave_params(seed)
            .map(|params| -> Result<(OctaveParams, ValueNoise1D)> {
                let (noise, _) = ValueNoise1D::new(&self.lcg, params.wavelength, width, params.seed)?;
                Ok((params, noise))
            })
            .collect()
    }

    // Returns `width` raw heights, loosely within [-1.5, 1.5]
    pub fn generate(&self, width: usize, seed: Seed) -> Result<Vec<f64>> {
        let mut lattices = self.lattices(width, seed)?.into_iter();
        // Octave 0 seeds the running sum with amplitude 1
        let mut heights = match lattices.next() {
            Some((_, base)) => base.generate(width),
            None => return Err(Error::InvalidOctaves { octaves: 0 }),
        };

        for (params, noise) in lattices {
            let factor = 2f64.powi(params.index as i32);
            for (x, height) in heights.iter_mut().enumerate() {
                *height += noise.get1(x as f64) / factor;
            }
        }

        debug!(
            "fractal: {} octaves, base wavelength {}, width {}, seed {}",
            self.octaves, self.base_wavelength, width, seed
        );
        Ok(heights)
    }
}

// Raw fractal profile over the standard generator
pub fn fractal(octaves: u32, base_wavelength: f64, width: usize, seed: Seed) -> Result<Vec<f64>> {
    Fractal1D::new(octaves, base_wavelength, Lcg::STANDARD)?.generate(width, seed)
}
