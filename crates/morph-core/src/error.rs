use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MorphError {
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    PixelBufferSize {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("image has zero width or height")]
    EmptyImage,
    #[error("particle count must be at least 1")]
    InvalidParticleCount,
}

pub type Result<T> = std::result::Result<T, MorphError>;
