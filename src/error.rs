use crate::color::ColorParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid grid configuration, detected before any pixel is drawn.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: usize },

    #[error("line thickness must be at least 1 pixel")]
    ZeroThickness,

    #[error("a {width}x{height} RGBA image does not fit in memory or in a PNG")]
    CanvasTooLarge { width: usize, height: usize },

    #[error("grid pitch ({pitch}) must be greater than line thickness ({thickness})")]
    PitchNotGreaterThanThickness { pitch: usize, thickness: usize },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    #[error("failed to encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("pixel buffer does not hold a {width}x{height} image")]
    BufferSize { width: usize, height: usize },

    #[error("output path {} has no usable file name", .0.display())]
    InvalidOutputPath(PathBuf),
}

pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
