//! Command-line flags.
//!
//! Precedence: flags, then the `--config` job file, then built-in defaults.
use super::job::{load_job_config, JobConfig};
use crate::color::Rgba;
use crate::error::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Render a mousepad calibration grid to PNG.
#[derive(Debug, Default, Parser)]
#[command(name = "mousepad", version, about)]
pub struct Cli {
    /// JSON job file providing defaults for every option below
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Line and border thickness in pixels
    #[arg(short, long)]
    pub thickness: Option<usize>,

    /// Spacing between adjacent lines in pixels (must exceed the thickness)
    #[arg(short, long)]
    pub pitch: Option<usize>,

    /// Draw a border around the image
    #[arg(short, long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub border: Option<bool>,

    /// Write horizontal and vertical lines to `<base>_lat.<ext>` and `<base>_lon.<ext>`
    #[arg(short, long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub separate_files: Option<bool>,

    /// Paint line crossings with the intersection color
    #[arg(short = 'i', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub color_intersections: Option<bool>,

    /// Horizontal line color (rrggbbaa)
    #[arg(long, value_name = "RRGGBBAA")]
    pub horizontal_color: Option<Rgba>,

    /// Vertical line color (rrggbbaa)
    #[arg(long, value_name = "RRGGBBAA")]
    pub vertical_color: Option<Rgba>,

    /// Border color (rrggbbaa)
    #[arg(long, value_name = "RRGGBBAA")]
    pub border_color: Option<Rgba>,

    /// Intersection color (rrggbbaa), conventionally the sum of both line colors
    #[arg(long, value_name = "RRGGBBAA")]
    pub intersection_color: Option<Rgba>,

    /// Output image, or filename mask in split mode
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write a JSON render report to this path
    #[arg(long, value_name = "FILE")]
    pub report_json: Option<PathBuf>,

    /// Print the computed grid geometry and exit without writing images
    #[arg(long)]
    pub print_geometry: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log fatal errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    /// Load the job file (if any) and apply the flags on top of it.
    pub fn resolve(&self) -> Result<JobConfig> {
        let base = match &self.config {
            Some(path) => load_job_config(path)?,
            None => JobConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Overlay every flag that was given onto `job`.
    pub fn apply(&self, mut job: JobConfig) -> JobConfig {
        let grid = &mut job.grid;
        overlay(&mut grid.width, self.width);
        overlay(&mut grid.height, self.height);
        overlay(&mut grid.line_thickness, self.thickness);
        overlay(&mut grid.grid_pitch, self.pitch);
        overlay(&mut grid.include_border, self.border);
        overlay(&mut grid.color_intersections, self.color_intersections);
        overlay(&mut grid.colors.horizontal, self.horizontal_color);
        overlay(&mut grid.colors.vertical, self.vertical_color);
        overlay(&mut grid.colors.border, self.border_color);
        overlay(&mut grid.colors.intersection, self.intersection_color);
        overlay(&mut job.separate_files, self.separate_files);
        overlay(&mut job.output, self.output.clone());
        if self.report_json.is_some() {
            job.report_json = self.report_json.clone();
        }
        job
    }
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
