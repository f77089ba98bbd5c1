//! Turning a job into PNG files on disk.
//!
//! Combined mode renders once to the requested path. Split mode renders the
//! horizontal and vertical families separately and derives both names from
//! the requested one: the file name is cut at its first `.`, the leading part
//! is the base and everything after it is kept as the extension tail.
//!
//! | requested      | horizontal         | vertical           |
//! |----------------|--------------------|--------------------|
//! | `mousepad.png` | `mousepad_lat.png` | `mousepad_lon.png` |
//! | `a.b.png`      | `a_lat.b.png`      | `a_lon.b.png`      |
use crate::config::JobConfig;
use crate::diagnostics::RenderReport;
use crate::error::{GeneratorError, Result};
use crate::image::io::save_rgba_png;
use crate::renderer::{GridRenderer, LineFamilies};
use log::info;
use std::path::{Path, PathBuf};

/// `(lat, lon)` names for a requested file name, without any directory.
pub fn split_filenames(name: &str) -> (String, String) {
    let (base, tail) = name.split_once('.').unwrap_or((name, ""));
    (format!("{base}_lat.{tail}"), format!("{base}_lon.{tail}"))
}

/// `(lat, lon)` paths for a requested output path. The derivation applies to
/// the last path component; the directory is kept as is.
pub fn split_paths(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| GeneratorError::InvalidOutputPath(path.to_path_buf()))?;
    let (lat, lon) = split_filenames(name);
    Ok((path.with_file_name(lat), path.with_file_name(lon)))
}

/// Image files a job produces, paired with the families drawn into each.
pub fn planned_outputs(job: &JobConfig) -> Result<Vec<(PathBuf, LineFamilies)>> {
    if job.separate_files {
        let (lat, lon) = split_paths(&job.output)?;
        Ok(vec![(lat, LineFamilies::LATITUDE), (lon, LineFamilies::LONGITUDE)])
    } else {
        Ok(vec![(job.output.clone(), LineFamilies::BOTH)])
    }
}

/// Render every planned image in sequence and write it as PNG.
///
/// Each canvas is dropped once written; nothing is shared between renders
/// besides the config.
pub fn write_outputs(job: &JobConfig) -> Result<Vec<RenderReport>> {
    let renderer = GridRenderer::new(job.grid.clone())?;
    let plan = planned_outputs(job)?;
    let mut reports = Vec::with_capacity(plan.len());
    for (path, families) in plan {
        let (canvas, mut report) = renderer.render_with_report(families);
        save_rgba_png(&canvas, &path)?;
        info!(
            "wrote {}x{} grid to {} ({} pixel writes)",
            canvas.w,
            canvas.h,
            path.display(),
            report.total_pixel_writes()
        );
        report.output = Some(path);
        reports.push(report);
    }
    Ok(reports)
}
