use log::trace;

use crate::lcg::{Lcg, Seed};
use crate::{Error, NoiseGenerator, Result};

// Cubic Hermite ease 3t^2 - 2t^3, clamped to [0, 1] outside the unit interval
// First derivative is zero at t=0 and t=1, so neighbouring cells join smoothly
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t <= 1.0 {
        3.0 * t * t - 2.0 * t * t * t
    } else {
        1.0
    }
}

// Draw one gradient in [-1, 1) per lattice point, stepping x from 0 while
// x < width + wavelength. Returns the gradients and the seed after the last draw.
//
// The lattice always covers one cell past `width`, so `sample` can read
// `gradients[cell + 1]` for every x in [0, width).
pub fn build_lattice(
    lcg: &Lcg,
    wavelength: f64,
    width: usize,
    seed: Seed,
) -> Result<(Vec<f64>, Seed)> {
    validate_wavelength(wavelength)?;

    let end = width as f64 + wavelength;
    let mut gradients = Vec::with_capacity((end / wavelength).ceil() as usize + 1);
    let mut seed = seed;
    let mut x = 0.0;
    while x < end {
        let (gradient, next) = lcg.random_in_range(-1.0, 1.0, seed);
        gradients.push(gradient);
        seed = next;
        x += wavelength;
    }

    trace!(
        "lattice: wavelength {} width {} -> {} points",
        wavelength,
        width,
        gradients.len()
    );
    Ok((gradients, seed))
}

// Interpolated noise value at x for a lattice built with `wavelength`.
//
// # Panics
// Panics if `gradients` has fewer than two points.
#[inline]
pub fn sample(x: f64, wavelength: f64, gradients: &[f64]) -> f64 {
    // Float steps in build_lattice can leave the last cell one short; never read past it
    let cell = ((x / wavelength).floor() as usize).min(gradients.len().saturating_sub(2));
    // Fractional position inside the cell, in [0, 1)
    let t = (x % wavelength) / wavelength;

    let left = gradients[cell];
    let right = gradients[cell + 1];
    // Dot products with the offset vectors to the left (-t) and right (1 - t) corners
    let d0 = left * -t;
    let d1 = right * (1.0 - t);

    d0 + smoothstep(t) * (d1 - d0)
}

pub(crate) fn validate_wavelength(wavelength: f64) -> Result<()> {
    // Infinite spacing comes from a zero peak count and yields a one-point lattice
    if !(wavelength.is_finite() && wavelength > 0.0) {
        return Err(Error::InvalidWavelength { wavelength });
    }
    Ok(())
}

// One octave of 1D value noise: a lattice of gradients at a fixed spacing
#[derive(Debug, Clone, PartialEq)]
pub struct ValueNoise1D {
    wavelength: f64,
    gradients: Vec<f64>,
}

impl ValueNoise1D {
    // Build a lattice that covers [0, width) and return it with the next seed
    pub fn new(lcg: &Lcg, wavelength: f64, width: usize, seed: Seed) -> Result<(Self, Seed)> {
        let (gradients, next) = build_lattice(lcg, wavelength, width, seed)?;
        Ok((
            Self {
                wavelength,
                gradients,
            },
            next,
        ))
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn gradients(&self) -> &[f64] {
        &self.gradients
    }
}

impl NoiseGenerator for ValueNoise1D {
    fn get1(&self, x: f64) -> f64 {
        sample(x, self.wavelength, &self.gradients)
    }
}
