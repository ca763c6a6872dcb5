use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// A generator state. Valid seeds are below the generator's modulus.
pub type Seed = u64;

// Linear congruential generator: seed' = (a * seed + c) mod m
//
// The generator holds no state of its own. Every call takes the current seed
// and hands back the next one, so callers thread the seed explicitly and two
// callers never observe each other's draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    #[serde(rename = "a")]
    multiplier: u64,
    #[serde(rename = "c")]
    increment: u64,
    #[serde(rename = "m")]
    modulus: u64,
}

impl Lcg {
    // Numerical Recipes constants with m = 2^32
    pub const STANDARD: Lcg = Lcg {
        multiplier: 1_664_525,
        increment: 1,
        modulus: 1 << 32,
    };

    pub fn new(multiplier: u64, increment: u64, modulus: u64) -> Result<Self> {
        let lcg = Self {
            multiplier,
            increment,
            modulus,
        };
        lcg.validate()?;
        Ok(lcg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.modulus == 0 {
            return Err(Error::InvalidModulus);
        }
        Ok(())
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    // Advance the sequence by one step.
    // Widened to u128 so a * seed + c can never overflow for any u64 inputs.
    #[inline]
    pub fn next_seed(&self, seed: Seed) -> Seed {
        let next = (self.multiplier as u128 * seed as u128 + self.increment as u128)
            % self.modulus as u128;
        next as Seed
    }

    // Returns a value in [0, 1) and the seed to use for the next draw
    #[inline]
    pub fn random_unit(&self, seed: Seed) -> (f64, Seed) {
        let next = self.next_seed(seed);
        (next as f64 / self.modulus as f64, next)
    }

    // Returns a value in [min, max) and the seed to use for the next draw
    #[inline]
    pub fn random_in_range(&self, min: f64, max: f64, seed: Seed) -> (f64, Seed) {
        let (unit, next) = self.random_unit(seed);
        (unit * (max - min) + min, next)
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub fn next_seed(seed: Seed) -> Seed {
    Lcg::STANDARD.next_seed(seed)
}

pub fn random_unit(seed: Seed) -> (f64, Seed) {
    Lcg::STANDARD.random_unit(seed)
}

pub fn random_in_range(min: f64, max: f64, seed: Seed) -> (f64, Seed) {
    Lcg::STANDARD.random_in_range(min, max, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_first_step_from_one() {
        assert_eq!(next_seed(1), 1_664_526);
        let (unit, next) = random_unit(1);
        assert_eq!(next, 1_664_526);
        assert_eq!(unit, 1_664_526.0 / 4_294_967_296.0);
    }

    #[test]
    fn lcg_wraps_at_modulus() {
        // (a * (m - 1) + 1) mod m = m - a + 1
        let seed = (1u64 << 32) - 1;
        assert_eq!(next_seed(seed), (1u64 << 32) - 1_664_525 + 1);
    }

    #[test]
    fn lcg_unit_range() {
        let mut seed = 7;
        for _ in 0..10_000 {
            let (v, next) = random_unit(seed);
            assert!((0.0..1.0).contains(&v), "value {} out of [0, 1)", v);
            seed = next;
        }
    }

    #[test]
    fn lcg_in_range_is_affine_remap_of_unit() {
        let (unit, s1) = random_unit(99);
        let (ranged, s2) = random_in_range(-1.0, 1.0, 99);
        assert_eq!(s1, s2);
        assert_eq!(ranged, unit * 2.0 - 1.0);
        assert!((-1.0..1.0).contains(&ranged));
    }

    #[test]
    fn lcg_is_pure() {
        // No hidden state: the same seed always yields the same draw
        assert_eq!(random_unit(12345), random_unit(12345));
    }

    #[test]
    fn lcg_custom_params() {
        let lcg = Lcg::new(5, 3, 16).unwrap();
        assert_eq!(lcg.next_seed(2), 13);
        assert_eq!(lcg.next_seed(13), (5 * 13 + 3) % 16);
    }

    #[test]
    fn lcg_rejects_zero_modulus() {
        assert!(matches!(Lcg::new(1, 1, 0), Err(Error::InvalidModulus)));
    }

    #[test]
    fn lcg_deserializes_short_names() {
        let lcg: Lcg = serde_json::from_str(r#"{"m": 4294967296, "a": 1664525, "c": 1}"#).unwrap();
        assert_eq!(lcg, Lcg::STANDARD);
    }
}
