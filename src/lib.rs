#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod image;
pub mod output;
pub mod renderer;

// --- High-level re-exports -------------------------------------------------

pub use crate::color::Rgba;
pub use crate::config::{GridColors, GridConfig, JobConfig};
pub use crate::error::{ConfigurationError, GeneratorError};
pub use crate::geometry::GridGeometry;
pub use crate::image::Canvas;
pub use crate::output::{split_filenames, write_outputs};
pub use crate::renderer::{render, GridRenderer, LineFamilies};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use mousepad_generator::prelude::*;
///
/// let config = GridConfig::new(320, 240).with_pitch(40, 3);
/// let renderer = GridRenderer::new(config).unwrap();
/// let canvas = renderer.render(LineFamilies::BOTH);
/// assert_eq!((canvas.w, canvas.h), (320, 240));
/// assert_eq!(renderer.geometry().longitude_line_count, 8);
/// ```
pub mod prelude {
    pub use crate::image::{Canvas, ImageView, Surface};
    pub use crate::{GridColors, GridConfig, GridRenderer, LineFamilies, Rgba};
}
