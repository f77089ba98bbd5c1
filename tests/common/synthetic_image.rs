use mousepad_generator::{GridConfig, Rgba};
use std::path::PathBuf;

/// Straightforward per-pixel rasterization of a grid, used as an oracle.
///
/// Each pixel is classified on its own, applying the stages in paint order,
/// so no drawing primitive is involved.
pub fn reference_grid(cfg: &GridConfig, latitude: bool, longitude: bool) -> Vec<Rgba> {
    assert!(cfg.grid_pitch > cfg.line_thickness, "invalid reference config");
    let (w, h, p, t) = (cfg.width, cfg.height, cfg.grid_pitch, cfg.line_thickness);
    let lat_n = h / p;
    let lon_n = w / p;
    let lat_off = (h + p - (lat_n * p + t)) / 2;
    let lon_off = (w + p - (lon_n * p + t)) / 2;
    let on_rule = |pos: usize, off: usize, n: usize| {
        pos >= off && (pos - off) / p < n && (pos - off) % p < t
    };

    let mut img = vec![Rgba::TRANSPARENT; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut px = Rgba::TRANSPARENT;
            let edge = x.min(y).min(w - 1 - x).min(h - 1 - y);
            if cfg.include_border && edge < t {
                px = cfg.colors.border;
            }
            let lat = latitude && on_rule(y, lat_off, lat_n);
            let lon = longitude && on_rule(x, lon_off, lon_n);
            if lat {
                px = cfg.colors.horizontal;
            }
            if lon {
                px = cfg.colors.vertical;
            }
            if lat && lon && cfg.color_intersections {
                px = cfg.colors.intersection;
            }
            img[y * w + x] = px;
        }
    }
    img
}

/// Fresh per-test directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mousepad-tests-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
