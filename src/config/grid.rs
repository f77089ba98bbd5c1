//! Grid description consumed by the renderer.
//!
//! Defaults reproduce the classic 800×600 pad: blue horizontal rules, red
//! vertical rules, magenta crossings and a half-transparent green border.
use crate::color::Rgba;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Colors of the four drawn elements.
///
/// `intersection` is taken as given. By convention it is the sum of the two
/// line colors (blue + red = magenta), but nothing derives or enforces that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridColors {
    /// Latitude (horizontal) rules.
    pub horizontal: Rgba,
    /// Longitude (vertical) rules.
    pub vertical: Rgba,
    pub border: Rgba,
    pub intersection: Rgba,
}

impl Default for GridColors {
    fn default() -> Self {
        Self {
            horizontal: Rgba::rgb(0, 0, 255),
            vertical: Rgba::rgb(255, 0, 0),
            border: Rgba::rgba(0, 255, 0, 128),
            intersection: Rgba::rgb(255, 0, 255),
        }
    }
}

/// Immutable description of one mousepad grid. All lengths are in pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Stroke width of every rule and of the border (>= 1).
    pub line_thickness: usize,
    /// Spacing between the leading edges of adjacent rules; must exceed
    /// `line_thickness`.
    pub grid_pitch: usize,
    pub include_border: bool,
    /// Paint line crossings with `colors.intersection` when both families
    /// are drawn.
    pub color_intersections: bool,
    pub colors: GridColors,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            line_thickness: 5,
            grid_pitch: 90,
            include_border: true,
            color_intersections: true,
            colors: GridColors::default(),
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_pitch(mut self, grid_pitch: usize, line_thickness: usize) -> Self {
        self.grid_pitch = grid_pitch;
        self.line_thickness = line_thickness;
        self
    }

    pub fn with_border(mut self, include_border: bool) -> Self {
        self.include_border = include_border;
        self
    }

    pub fn with_intersections(mut self, color_intersections: bool) -> Self {
        self.color_intersections = color_intersections;
        self
    }

    pub fn with_colors(mut self, colors: GridColors) -> Self {
        self.colors = colors;
        self
    }

    /// Check the invariants the renderer depends on.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 {
            return Err(ConfigurationError::NonPositiveDimension {
                name: "width",
                value: self.width,
            });
        }
        if self.height == 0 {
            return Err(ConfigurationError::NonPositiveDimension {
                name: "height",
                value: self.height,
            });
        }
        if canvas_bytes(self.width, self.height).is_none() {
            return Err(ConfigurationError::CanvasTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.line_thickness == 0 {
            return Err(ConfigurationError::ZeroThickness);
        }
        if self.grid_pitch <= self.line_thickness {
            return Err(ConfigurationError::PitchNotGreaterThanThickness {
                pitch: self.grid_pitch,
                thickness: self.line_thickness,
            });
        }
        Ok(())
    }
}

/// Bytes of an RGBA buffer of `width × height`, if it can be allocated and
/// encoded: PNG dimensions are `u32` and a `Vec` holds at most `isize::MAX`
/// bytes.
fn canvas_bytes(width: usize, height: usize) -> Option<usize> {
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return None;
    }
    width
        .checked_mul(height)?
        .checked_mul(4)
        .filter(|&bytes| bytes <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn pitch_equal_to_thickness_is_rejected() {
        let cfg = GridConfig::default().with_pitch(5, 5);
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::PitchNotGreaterThanThickness {
                pitch: 5,
                thickness: 5
            })
        );
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(matches!(
            GridConfig::new(0, 10).validate(),
            Err(ConfigurationError::NonPositiveDimension { name: "width", .. })
        ));
        assert!(matches!(
            GridConfig::new(10, 0).validate(),
            Err(ConfigurationError::NonPositiveDimension { name: "height", .. })
        ));
        assert_eq!(
            GridConfig::default().with_pitch(10, 0).validate(),
            Err(ConfigurationError::ZeroThickness)
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        assert_eq!(
            GridConfig::new(usize::MAX, 600).validate(),
            Err(ConfigurationError::CanvasTooLarge {
                width: usize::MAX,
                height: 600
            })
        );
        assert!(GridConfig::new(u32::MAX as usize + 1, 1).validate().is_err());
        assert_eq!(GridConfig::new(4096, 4096).validate(), Ok(()));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: GridConfig =
            serde_json::from_str(r#"{"width": 320, "colors": {"border": "ffffffff"}}"#).unwrap();
        assert_eq!(cfg.width, 320);
        assert_eq!(cfg.height, 600);
        assert_eq!(cfg.colors.border, Rgba::rgb(255, 255, 255));
        assert_eq!(cfg.colors.vertical, Rgba::rgb(255, 0, 0));
    }
}
