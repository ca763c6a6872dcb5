use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("wavelength must be greater than 0, got {wavelength}")]
    InvalidWavelength { wavelength: f64 },

    #[error("octaves must be greater than 0, got {octaves}")]
    InvalidOctaves { octaves: u32 },

    #[error("flatness must be greater than 0, got {flatness}")]
    InvalidFlatness { flatness: f64 },

    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid color {0:?}: expected six hex digits, e.g. \"a0d5ff\"")]
    InvalidColor(String),

    #[error("{layer} needs at least one color")]
    EmptyColors { layer: String },

    #[error("generator modulus must be greater than 0")]
    InvalidModulus,

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
