//! I/O helpers for rendered canvases and JSON.
//!
//! - `save_rgba_png`: write a `Canvas` to a non-interlaced 8-bit RGBA PNG.
//! - `load_rgba_png`: read an image back into a `Canvas`.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Canvas;
use crate::color::Rgba;
use crate::error::{GeneratorError, Result};
use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save a canvas as PNG, whatever extension `path` carries.
pub fn save_rgba_png(canvas: &Canvas, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = RgbaImage::from_raw(canvas.w as u32, canvas.h as u32, canvas.to_rgba_bytes())
        .ok_or(GeneratorError::BufferSize {
            width: canvas.w,
            height: canvas.h,
        })?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| GeneratorError::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Load any image the `image` crate can decode into an RGBA canvas.
pub fn load_rgba_png(path: &Path) -> Result<Canvas> {
    let img = image::open(path)
        .map_err(|source| GeneratorError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img
        .pixels()
        .map(|px| Rgba::from_channels(px.0))
        .collect();
    Ok(Canvas {
        w,
        h,
        stride: w,
        data,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| GeneratorError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| GeneratorError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
