//! Corpus discovery and evaluation against JPEG files on disk
#![cfg(feature = "vision")]

use beacon_detector::vision::{discover, evaluate, evaluate_dir, EvaluationOptions};
use beacon_detector::{BeaconDetector, BeaconError, BeaconState, Thresholds};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "beacon_detector_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 200x100 image: `left` fills x < 100, `right` the rest
fn two_halves(left: Rgb<u8>, right: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(200, 100, |x, _| if x < 100 { left } else { right })
}

fn write_jpg(root: &Path, label: &str, file: &str, image: &RgbImage) {
    let dir = root.join(label);
    fs::create_dir_all(&dir).unwrap();
    image
        .save_with_format(dir.join(file), image::ImageFormat::Jpeg)
        .unwrap();
}

/// Seven images: five labeled correctly, one mislabeled, one undecodable
fn build_corpus(root: &Path) {
    write_jpg(root, "red", "solid.jpg", &two_halves(RED, RED));
    write_jpg(root, "blue", "solid.JPG", &two_halves(BLUE, BLUE));
    write_jpg(root, "redblue", "split.jpg", &two_halves(RED, BLUE));
    write_jpg(root, "bluered", "split.jpg", &two_halves(BLUE, RED));
    write_jpg(root, "undetermined", "gray.jpg", &two_halves(GRAY, GRAY));
    write_jpg(root, "blue", "mislabeled.jpg", &two_halves(RED, GRAY));

    fs::write(root.join("red").join("broken.jpg"), b"not a jpeg").unwrap();
    fs::write(root.join("red").join("notes.txt"), b"ignored").unwrap();
    fs::write(root.join("stray.jpg"), b"outside any label directory").unwrap();
}

fn detector() -> BeaconDetector {
    BeaconDetector::new(Thresholds::default().with_reference_edge(200))
}

#[test]
fn test_discover_labels_and_filters() {
    init_logging();
    let root = scratch_dir("discover");
    build_corpus(&root);

    let cases = discover(&root).unwrap();
    assert_eq!(cases.len(), 7);
    assert!(cases.windows(2).all(|pair| pair[0].path <= pair[1].path));
    assert!(cases
        .iter()
        .all(|case| case.path.parent().unwrap().ends_with(case.expected.label())));

    let blue: Vec<_> = cases
        .iter()
        .filter(|case| case.expected == BeaconState::Blue)
        .collect();
    assert_eq!(blue.len(), 2);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_evaluate_counts_passes_and_failures() {
    init_logging();
    let root = scratch_dir("evaluate");
    build_corpus(&root);

    let cases = discover(&root).unwrap();
    let report = evaluate(&cases, &detector(), &EvaluationOptions::default()).unwrap();

    assert_eq!(report.summary.passed, 5);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.summary.total(), report.cases.len());
    assert_eq!(
        report.summary.passed,
        report.cases.iter().filter(|case| case.ok).count()
    );

    let broken = report
        .cases
        .iter()
        .find(|case| case.path.ends_with("broken.jpg"))
        .unwrap();
    assert_eq!(broken.actual, None);
    assert!(broken.error.is_some());

    let mislabeled = report
        .cases
        .iter()
        .find(|case| case.path.ends_with("mislabeled.jpg"))
        .unwrap();
    assert_eq!(mislabeled.expected, BeaconState::Blue);
    assert_eq!(mislabeled.actual, Some(BeaconState::Red));
    assert!(!mislabeled.ok);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_overlays_and_report_written() {
    init_logging();
    let root = scratch_dir("overlay");
    let corpus = root.join("corpus");
    let overlays = root.join("overlays");
    build_corpus(&corpus);

    let options = EvaluationOptions::default().with_overlay_dir(&overlays);
    let report = evaluate_dir(&corpus, &detector(), &options).unwrap();

    // One overlay per decodable image
    let written = fs::read_dir(&overlays).unwrap().count();
    assert_eq!(written, 6);
    assert!(overlays.join("redblue_split.png").is_file());
    assert!(overlays.join("bluered_split.png").is_file());

    let overlay = image::open(overlays.join("red_solid.png")).unwrap().to_rgb8();
    assert_eq!(overlay.dimensions(), (200, 100));

    let report_path = root.join("report.json");
    report.write_json(&report_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["total"], 7);
    assert_eq!(json["cases"].as_array().unwrap().len(), 7);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_missing_label_directories_are_skipped() {
    init_logging();
    let root = scratch_dir("partial");
    write_jpg(&root, "red", "only.jpg", &two_halves(RED, RED));

    let report = evaluate_dir(&root, &detector(), &EvaluationOptions::default()).unwrap();
    assert_eq!(report.summary.total(), 1);
    assert_eq!(report.summary.passed, 1);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_missing_corpus_root_is_an_error() {
    init_logging();
    let root = scratch_dir("missing_root");
    let corpus = root.join("corpus_typo");

    let result = evaluate_dir(&corpus, &detector(), &EvaluationOptions::default());
    assert!(matches!(result, Err(BeaconError::Io(_))));

    // A file where the corpus directory should be is rejected too
    fs::write(&corpus, b"not a directory").unwrap();
    assert!(discover(&corpus).is_err());

    fs::remove_dir_all(&root).unwrap();
}
