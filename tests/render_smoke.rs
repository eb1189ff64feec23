use std::fs;
use std::process::Command;

use rgscaling::configuration::{
    Configuration,
    FlowArrowConfiguration
};
use rgscaling::scalingerror::ScalingError;
use rgscaling::scalingplot::render;

#[test]
fn render_writes_svg_to_configured_path() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let target = dir.path().join("beta.svg");
    let configuration = Configuration::default()
        .with_output_path(&target)
        .with_critical_points_marked(true)
        .with_flow_arrows(FlowArrowConfiguration::new(3.0, vec![-3.0, 1.0, 3.0, 5.0, 7.0, 9.0], 0.6));

    let written = render(&configuration).expect("render failed");
    assert_eq!(written, target);

    let svg = fs::read_to_string(&target).expect("output missing");
    assert!(!svg.is_empty());
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("d=1: always localized"));
    assert!(svg.contains("d=2: metal-insulator transition"));
}

#[test]
fn render_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let target = dir.path().join("scaling_of_Anderson_localization.svg");
    fs::write(&target, "stale").unwrap();

    render(&Configuration::default().with_output_path(&target)).expect("render failed");
    let svg = fs::read_to_string(&target).unwrap();
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("stale"));
}

#[test]
fn render_fails_for_missing_directory() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let target = dir.path().join("missing").join("plot.svg");
    let result = render(&Configuration::default().with_output_path(target));
    assert!(matches!(result, Err(ScalingError::IOError(_))));
}

#[test]
fn binary_writes_default_figure_into_working_directory() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let status = Command::new(env!("CARGO_BIN_EXE_rgscaling"))
        .current_dir(dir.path())
        .status()
        .expect("failed to launch binary");
    assert!(status.success());

    let svg = fs::read_to_string(dir.path().join("scaling_of_Anderson_localization.svg"))
        .expect("binary produced no figure");
    assert!(svg.len() > 1000);
    assert!(svg.contains("<svg"));
    assert!(svg.contains("d=3: metal-insulator transition"));
}
