use assert_cmd::prelude::*;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

// Red on the left, blue on the right, split after column `split`.
fn two_tone(dir: &Path, width: u32, height: u32, split: u32) -> String {
    let path = dir.join("two-tone.png");
    RgbImage::from_fn(width, height, |x, _| if x < split { RED } else { BLUE })
        .save(&path)
        .unwrap();
    path.to_string_lossy().into_owned()
}

fn seamcarve() -> Command {
    Command::cargo_bin("seamcarve").unwrap()
}

#[test]
fn shrinks_width_and_height() {
    let dir = TempDir::new().unwrap();
    let input = two_tone(dir.path(), 10, 8, 4);
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["--in", input.as_str(), "--out"])
        .arg(&output)
        .args(&["--width", "3", "--height", "2"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (7, 6));
}

#[test]
fn keeps_the_color_boundary() {
    let dir = TempDir::new().unwrap();
    let input = two_tone(dir.path(), 5, 5, 2);
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["-i", input.as_str(), "-o"])
        .arg(&output)
        .args(&["-w", "1"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb8();
    assert_eq!(carved.dimensions(), (4, 5));
    for y in 0..5 {
        let row: Vec<_> = (0..4).map(|x| *carved.get_pixel(x, y)).collect();
        assert_eq!(row, vec![RED, RED, BLUE, BLUE]);
    }
}

#[test]
fn removing_nothing_copies_the_image() {
    let dir = TempDir::new().unwrap();
    let input = two_tone(dir.path(), 6, 3, 1);
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["--in", input.as_str(), "--out"])
        .arg(&output)
        .assert()
        .success();

    let original = image::open(&input).unwrap().to_rgb8();
    let copy = image::open(&output).unwrap().to_rgb8();
    assert_eq!(original, copy);
}

#[test]
fn writes_the_energy_map() {
    let dir = TempDir::new().unwrap();
    let input = two_tone(dir.path(), 5, 5, 2);
    let output = dir.path().join("energy.png");

    seamcarve()
        .args(&["--in", input.as_str(), "--out"])
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap().to_luma8();
    assert_eq!(energy.dimensions(), (5, 5));
    assert_eq!(energy.get_pixel(0, 0)[0], 255);
    assert_eq!(energy.get_pixel(4, 4)[0], 0);
}

#[test]
fn refuses_to_remove_every_column() {
    let dir = TempDir::new().unwrap();
    let input = two_tone(dir.path(), 5, 5, 2);
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["--in", input.as_str(), "--out"])
        .arg(&output)
        .args(&["--width", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remove 5 seams along the width"));

    assert!(!output.exists());
}

#[test]
fn reports_unreadable_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.png");
    let output = dir.path().join("out.png");

    seamcarve()
        .arg("--in")
        .arg(&missing)
        .arg("--out")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read"));
}

#[test]
fn rejects_a_bad_seam_count() {
    let dir = TempDir::new().unwrap();
    let input = two_tone(dir.path(), 5, 5, 2);
    let output = dir.path().join("out.png");

    seamcarve()
        .args(&["--in", input.as_str(), "--out"])
        .arg(&output)
        .args(&["--height", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--height expects a number of seams"));
}
