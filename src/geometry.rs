//! Derived grid geometry: how many rules fit and where the first one starts.
//!
//! Rules of one family are laid out `grid_pitch` apart. The rendered span, from
//! the leading edge of the first rule to the trailing edge of the last, is
//! `count·pitch − pitch + thickness` pixels and is centered in the image with
//! floor division:
//!
//! ```text
//! count  = dimension / pitch
//! offset = (dimension − (count·pitch − pitch + thickness)) / 2
//! ```
use crate::config::GridConfig;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    /// Number of horizontal rules (`height / pitch`).
    pub latitude_line_count: usize,
    /// Number of vertical rules (`width / pitch`).
    pub longitude_line_count: usize,
    /// y of the first horizontal rule's top row.
    pub latitude_start_offset: usize,
    /// x of the first vertical rule's left column.
    pub longitude_start_offset: usize,
    pub pitch: usize,
    pub thickness: usize,
}

impl GridGeometry {
    /// Geometry for a config that already passed `GridConfig::validate`.
    pub fn from_config(config: &GridConfig) -> Self {
        let (pitch, thickness) = (config.grid_pitch, config.line_thickness);
        let latitude_line_count = line_count(config.height, pitch);
        let longitude_line_count = line_count(config.width, pitch);
        Self {
            latitude_line_count,
            longitude_line_count,
            latitude_start_offset: start_offset(config.height, latitude_line_count, pitch, thickness),
            longitude_start_offset: start_offset(config.width, longitude_line_count, pitch, thickness),
            pitch,
            thickness,
        }
    }

    /// Top row of every horizontal rule.
    pub fn latitude_origins(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.latitude_line_count).map(move |i| self.latitude_start_offset + i * self.pitch)
    }

    /// Left column of every vertical rule.
    pub fn longitude_origins(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.longitude_line_count).map(move |i| self.longitude_start_offset + i * self.pitch)
    }

    /// Top-left corner `(x, y)` of every crossing block, longitude-major.
    pub fn intersection_origins(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.longitude_origins()
            .flat_map(move |x| self.latitude_origins().map(move |y| (x, y)))
    }

    pub fn intersection_count(&self) -> usize {
        self.latitude_line_count * self.longitude_line_count
    }
}

pub fn line_count(dimension: usize, pitch: usize) -> usize {
    dimension / pitch
}

/// Centering offset for `count` rules along `dimension`.
///
/// Requires `count = dimension / pitch` and `thickness < pitch`: then
/// `count·pitch <= dimension` and every intermediate value stays below
/// `2·pitch`, whatever the size of `dimension`.
pub fn start_offset(dimension: usize, count: usize, pitch: usize, thickness: usize) -> usize {
    (dimension - count * pitch + (pitch - thickness)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pad_geometry() {
        let geom = GridGeometry::from_config(&GridConfig::default());
        assert_eq!(geom.longitude_line_count, 8);
        assert_eq!(geom.longitude_start_offset, 82);
        assert_eq!(geom.latitude_line_count, 6);
        // (600 - (540 - 90 + 5)) / 2 = 145 / 2
        assert_eq!(geom.latitude_start_offset, 72);
    }

    #[test]
    fn offsets_use_floor_division() {
        // (101 - (10*10 - 10 + 3)) / 2 = 8 / 2
        assert_eq!(start_offset(101, 10, 10, 3), 4);
        // (102 - 93) / 2 = 4.5 -> 4
        assert_eq!(start_offset(102, 10, 10, 3), 4);
    }

    #[test]
    fn span_is_centered_and_inside_the_image() {
        for (dim, pitch, thick) in [(800, 90, 5), (600, 90, 5), (37, 6, 5), (1000, 7, 1)] {
            let count = line_count(dim, pitch);
            let offset = start_offset(dim, count, pitch, thick);
            let span = count * pitch - pitch + thick;
            let trailing = dim - offset - span;
            assert!(trailing == offset || trailing == offset + 1, "dim={dim}");
        }
    }

    #[test]
    fn huge_dimension_does_not_overflow() {
        let geom = GridGeometry::from_config(&GridConfig::new(usize::MAX, 600));
        assert_eq!(geom.longitude_line_count, usize::MAX / 90);
        let rem = usize::MAX % 90;
        assert_eq!(geom.longitude_start_offset, (rem + 85) / 2);
        assert_eq!(geom.latitude_start_offset, 72);
    }

    #[test]
    fn dimension_below_pitch_has_no_lines() {
        let cfg = GridConfig::new(50, 600).with_pitch(90, 5);
        let geom = GridGeometry::from_config(&cfg);
        assert_eq!(geom.longitude_line_count, 0);
        assert_eq!(geom.longitude_origins().count(), 0);
        assert_eq!(geom.intersection_origins().count(), 0);
    }

    #[test]
    fn origins_step_by_pitch() {
        let geom = GridGeometry::from_config(&GridConfig::default());
        let xs: Vec<_> = geom.longitude_origins().collect();
        assert_eq!(xs.first(), Some(&82));
        assert_eq!(xs.last(), Some(&(82 + 7 * 90)));
        assert_eq!(geom.intersection_origins().count(), geom.intersection_count());
        assert_eq!(geom.intersection_origins().nth(1), Some((82, 72 + 90)));
    }
}
