use std::time::Instant;

// Height profile of one layer: one pixel-space y per x
pub type HeightProfile = Vec<f64>;

// Smallest and largest value of a profile, or None when it is empty
pub fn min_max(heights: &[f64]) -> Option<(f64, f64)> {
    heights.iter().fold(None, |acc, &h| match acc {
        None => Some((h, h)),
        Some((min, max)) => Some((min.min(h), max.max(h))),
    })
}

// Logs how long a stage took when dropped
//
//     let _t = Timed::debug("raster");
//     // ... work ...
//     // logs "raster: 1.234ms"
pub struct Timed {
    name: &'static str,
    start: Instant,
    level: log::Level,
}

impl Timed {
    pub fn info(name: &'static str) -> Self {
        log::debug!("{}...", name);
        Self {
            name,
            start: Instant::now(),
            level: log::Level::Info,
        }
    }

    pub fn debug(name: &'static str) -> Self {
        log::trace!("{}...", name);
        Self {
            name,
            start: Instant::now(),
            level: log::Level::Debug,
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "{}: {:.3?}", self.name, self.start.elapsed());
    }
}
