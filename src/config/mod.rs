//! Configuration surface: the grid description consumed by the renderer, the
//! JSON job file, and the command line that fills both.
pub mod cli;
pub mod grid;
pub mod job;

pub use cli::{Cli, Verbosity};
pub use grid::{GridColors, GridConfig};
pub use job::{load_job_config, JobConfig};
