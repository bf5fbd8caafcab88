//! End-to-end runs through the public library API against real files.

use image::{Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;
use thumbnailer::config::RunConfig;
use thumbnailer::imaging::{Dimensions, SizingPolicy};
use thumbnailer::naming::NamingScheme;
use thumbnailer::process::{ProcessOptions, process};
use thumbnailer::scan::scan;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 200]))
        .save_with_format(dir.join(name), image::ImageFormat::Png)
        .unwrap();
}

fn run(src: &Path, dst: &Path, par: i64, width: f64, height: i64) -> Dimensions {
    let policy = SizingPolicy::from_args(par, width, height).unwrap();
    let options = ProcessOptions::from_config(policy, &RunConfig::default());
    let result = process(src, dst, &options, None).unwrap();
    assert_eq!(result.generated(), 1);

    let (w, h) = image::image_dimensions(dst.join("thumbnail0.png")).unwrap();
    Dimensions::new(w, h)
}

#[test]
fn preserve_by_width_100x50() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_png(src.path(), "wide.png", 100, 50);

    assert_eq!(run(src.path(), dst.path(), 1, 50.0, 999), Dimensions::new(50, 25));
}

#[test]
fn exact_never_upscales_40x40() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_png(src.path(), "small.png", 40, 40);

    assert_eq!(run(src.path(), dst.path(), 0, 100.0, 100), Dimensions::new(40, 40));
}

#[test]
fn scale_factor_90x60() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_png(src.path(), "photo.png", 90, 60);

    assert_eq!(run(src.path(), dst.path(), 3, 3.0, 0), Dimensions::new(30, 20));
}

#[test]
fn scale_factor_one_keeps_size() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_png(src.path(), "photo.png", 37, 23);

    assert_eq!(run(src.path(), dst.path(), 3, 1.0, 0), Dimensions::new(37, 23));
}

#[test]
fn exact_same_size_is_near_identity() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let original = RgbImage::from_pixel(16, 12, Rgb([12, 34, 56]));
    original
        .save_with_format(src.path().join("flat.png"), image::ImageFormat::Png)
        .unwrap();

    run(src.path(), dst.path(), 0, 16.0, 12);

    let out = image::open(dst.path().join("thumbnail0.png"))
        .unwrap()
        .into_rgb8();
    assert_eq!(out, original);
}

#[test]
fn only_supported_extensions_are_scanned() {
    let src = TempDir::new().unwrap();
    write_png(src.path(), "a.png", 4, 4);
    write_png(src.path(), "c.JPEG", 4, 4);
    std::fs::write(src.path().join("b.gif"), b"GIF89a").unwrap();
    std::fs::write(src.path().join("d"), b"").unwrap();

    let names: Vec<String> = scan(src.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.png", "c.JPEG"]);
}

#[test]
fn corrupt_file_is_skipped_and_batch_completes() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_png(src.path(), "a.png", 20, 20);
    std::fs::write(src.path().join("b.jpg"), b"definitely not a jpeg").unwrap();
    write_png(src.path(), "c.png", 30, 10);

    let options = ProcessOptions::from_config(
        SizingPolicy::ScaleFactor { factor: 2.0 },
        &RunConfig::default(),
    );
    let result = process(src.path(), dst.path(), &options, None).unwrap();

    assert_eq!(result.generated(), 2);
    assert_eq!(result.skipped(), 1);
    assert!(dst.path().join("thumbnail0.png").exists());
    assert!(!dst.path().join("thumbnail1.png").exists());
    assert_eq!(
        image::image_dimensions(dst.path().join("thumbnail2.png")).unwrap(),
        (15, 5)
    );
}

#[test]
fn source_naming_embeds_stem() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_png(src.path(), "beach.png", 10, 10);

    let mut config = RunConfig::default();
    config.output.naming = NamingScheme::Source;
    let options = ProcessOptions::from_config(SizingPolicy::ScaleFactor { factor: 2.0 }, &config);
    process(src.path(), dst.path(), &options, None).unwrap();

    assert!(dst.path().join("thumbnail0-beach.png").exists());
}
