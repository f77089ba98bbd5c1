//! Grid renderer: validated config in, composited canvas out.
//!
//! Stages run in a fixed order and each one overwrites what the previous
//! stages left behind:
//!
//! 1. border: `thickness` nested 1-pixel rectangle outlines
//! 2. latitude: `thickness` full-width rows per horizontal rule
//! 3. longitude: `thickness` full-height columns per vertical rule
//! 4. intersections: `thickness × thickness` blocks at every crossing, only
//!    when both families are drawn and `color_intersections` is set
//!
//! No blending happens anywhere; every write is a plain assignment.

use crate::color::Rgba;
use crate::config::GridConfig;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{RenderReport, RenderStage, StageReport, TimingBreakdown};
use crate::error::ConfigurationError;
use crate::geometry::GridGeometry;
use crate::image::{Canvas, Surface};
use log::{debug, warn};
use serde::Serialize;
use std::time::Instant;

/// Which rule families a render call draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineFamilies {
    pub latitude: bool,
    pub longitude: bool,
}

impl LineFamilies {
    pub const BOTH: LineFamilies = LineFamilies::new(true, true);
    pub const LATITUDE: LineFamilies = LineFamilies::new(true, false);
    pub const LONGITUDE: LineFamilies = LineFamilies::new(false, true);

    pub const fn new(latitude: bool, longitude: bool) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_combined(self) -> bool {
        self.latitude && self.longitude
    }
}

#[derive(Clone, Debug)]
pub struct GridRenderer {
    config: GridConfig,
    geometry: GridGeometry,
}

impl GridRenderer {
    /// Validate `config` and derive its geometry. Fails before anything is
    /// allocated.
    pub fn new(config: GridConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let geometry = GridGeometry::from_config(&config);
        if geometry.latitude_line_count == 0 {
            warn!(
                "height {} is smaller than pitch {}: no horizontal lines",
                config.height, config.grid_pitch
            );
        }
        if geometry.longitude_line_count == 0 {
            warn!(
                "width {} is smaller than pitch {}: no vertical lines",
                config.width, config.grid_pitch
            );
        }
        debug!("GridRenderer::new geometry={:?}", geometry);
        Ok(Self { config, geometry })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Render onto a fresh transparent canvas.
    pub fn render(&self, families: LineFamilies) -> Canvas {
        self.render_with_report(families).0
    }

    pub fn render_with_report(&self, families: LineFamilies) -> (Canvas, RenderReport) {
        let mut canvas = Canvas::new(self.config.width, self.config.height);
        let report = self.render_into(&mut canvas, families);
        (canvas, report)
    }

    /// Composite the grid onto `surface`, which is expected to have the
    /// configured size. Pixels falling outside it are clipped.
    pub fn render_into<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        families: LineFamilies,
    ) -> RenderReport {
        let mut stages = Vec::with_capacity(4);
        let mut timings = TimingBreakdown::default();
        let mut run = |stage: RenderStage, draw: &mut dyn FnMut() -> usize| {
            let start = Instant::now();
            let pixel_writes = draw();
            let ms = elapsed_ms(start);
            debug!(
                "GridRenderer stage={} writes={} elapsed_ms={:.3}",
                stage.label(),
                pixel_writes,
                ms
            );
            timings.push(stage.label(), ms);
            stages.push(StageReport {
                stage,
                pixel_writes,
            });
        };

        if self.config.include_border {
            run(RenderStage::Border, &mut || self.draw_border(surface));
        }
        if families.latitude {
            run(RenderStage::Latitude, &mut || self.draw_latitude(surface));
        }
        if families.longitude {
            run(RenderStage::Longitude, &mut || self.draw_longitude(surface));
        }
        if families.is_combined() && self.config.color_intersections {
            run(RenderStage::Intersections, &mut || {
                self.draw_intersections(surface)
            });
        }

        RenderReport {
            width: self.config.width,
            height: self.config.height,
            families,
            geometry: self.geometry,
            stages,
            timings,
            output: None,
        }
    }

    fn max_x(&self) -> isize {
        self.config.width as isize - 1
    }

    fn max_y(&self) -> isize {
        self.config.height as isize - 1
    }

    fn draw_border<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let color = self.config.colors.border;
        (0..self.geometry.thickness as isize)
            .map(|inset| {
                surface.draw_rect_outline(
                    inset,
                    inset,
                    self.max_x() - inset,
                    self.max_y() - inset,
                    color,
                )
            })
            .sum()
    }

    fn draw_latitude<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let color = self.config.colors.horizontal;
        let max_x = self.max_x();
        let mut written = 0;
        for top in self.geometry.latitude_origins() {
            for row in 0..self.geometry.thickness {
                let y = (top + row) as isize;
                written += surface.draw_line(0, y, max_x, y, color);
            }
        }
        written
    }

    fn draw_longitude<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let color = self.config.colors.vertical;
        let max_y = self.max_y();
        let mut written = 0;
        for left in self.geometry.longitude_origins() {
            for col in 0..self.geometry.thickness {
                let x = (left + col) as isize;
                written += surface.draw_line(x, 0, x, max_y, color);
            }
        }
        written
    }

    fn draw_intersections<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let color = self.config.colors.intersection;
        let t = self.geometry.thickness;
        let mut written = 0;
        for (x, y) in self.geometry.intersection_origins() {
            written += fill_block(surface, x, y, t, color);
        }
        written
    }
}

fn fill_block<S: Surface + ?Sized>(
    surface: &mut S,
    x: usize,
    y: usize,
    size: usize,
    color: Rgba,
) -> usize {
    let mut written = 0;
    for dx in 0..size {
        for dy in 0..size {
            if surface.set_pixel((x + dx) as isize, (y + dy) as isize, color) {
                written += 1;
            }
        }
    }
    written
}

/// Validate `config` and render the selected families onto a new canvas.
pub fn render(
    config: GridConfig,
    include_latitude: bool,
    include_longitude: bool,
) -> Result<Canvas, ConfigurationError> {
    let renderer = GridRenderer::new(config)?;
    Ok(renderer.render(LineFamilies::new(include_latitude, include_longitude)))
}
