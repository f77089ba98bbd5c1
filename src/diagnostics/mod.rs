//! Reports describing what a render call drew.

pub mod report;
pub mod timing;

pub use report::{RenderReport, RenderStage, StageReport};
pub use timing::{StageTiming, TimingBreakdown};
