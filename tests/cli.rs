mod common;

use common::synthetic_image::scratch_dir;
use std::process::{Command, Output};

fn mousepad(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mousepad"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn mousepad")
}

#[test]
fn pitch_equal_to_thickness_exits_with_status_1() {
    let dir = scratch_dir("cli-bad-pitch");
    let out = mousepad(&dir, &["-p", "5", "-t", "5", "-o", "pad.png"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: invalid configuration"), "{stderr}");
    assert!(!dir.join("pad.png").exists());
}

#[test]
fn oversized_width_is_reported_not_panicked() {
    let dir = scratch_dir("cli-huge-width");
    let width = usize::MAX.to_string();
    let out = mousepad(&dir, &["--width", &width, "--print-geometry"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn print_geometry_writes_nothing() {
    let dir = scratch_dir("cli-geometry");
    let out = mousepad(&dir, &["--print-geometry", "-q"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Grid geometry (800x600)"), "{stdout}");
    assert!(stdout.contains("8 lines from x=82"), "{stdout}");
    assert!(!dir.join("mousepad.png").exists());
}

#[test]
fn separate_files_flag_writes_both_images() {
    let dir = scratch_dir("cli-split");
    let out = mousepad(
        &dir,
        &["--width", "120", "--height", "90", "-s", "-o", "grid.png", "-q"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.join("grid_lat.png").exists());
    assert!(dir.join("grid_lon.png").exists());
    assert!(!dir.join("grid.png").exists());
}
