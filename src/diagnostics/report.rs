use super::timing::TimingBreakdown;
use crate::geometry::GridGeometry;
use crate::renderer::LineFamilies;
use serde::Serialize;
use std::path::PathBuf;

/// Compositing stages, in the order the renderer runs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStage {
    Border,
    Latitude,
    Longitude,
    Intersections,
}

impl RenderStage {
    pub fn label(self) -> &'static str {
        match self {
            RenderStage::Border => "border",
            RenderStage::Latitude => "latitude",
            RenderStage::Longitude => "longitude",
            RenderStage::Intersections => "intersections",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageReport {
    pub stage: RenderStage,
    /// Pixel writes issued by the stage, overlapping writes included.
    pub pixel_writes: usize,
}

/// Summary of one render call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub width: usize,
    pub height: usize,
    pub families: LineFamilies,
    pub geometry: GridGeometry,
    /// Stages that actually ran.
    pub stages: Vec<StageReport>,
    pub timings: TimingBreakdown,
    /// Set once the canvas has been written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl RenderReport {
    pub fn stage(&self, stage: RenderStage) -> Option<&StageReport> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    pub fn total_pixel_writes(&self) -> usize {
        self.stages.iter().map(|s| s.pixel_writes).sum()
    }
}
