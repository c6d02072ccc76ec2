//! Settings loading integration tests
//!
//! Loads settings files from disk through the public API.

mod common;

use common::helpers::{PETS_S2L1, write_settings};
use mctrack_settings::config::TrackingThresholds;
use mctrack_settings::{ConfigLoader, Error, LoaderOptions, Scenario, ScenarioPolicy, Settings};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[test]
fn test_load_complete_file() {
    let file = write_settings(PETS_S2L1);
    let settings = Settings::from_file(file.path()).unwrap();

    let root = Path::new("/datasets/PETS2009/S2/L1/Time_12-34");
    assert!(settings.is_initialized());
    assert_eq!(settings.scenario, Scenario::S2L1);
    assert_eq!(settings.dataset_path, root);
    assert_eq!(settings.calibration_path, root.join("calibration"));
    assert_eq!(settings.camera_indices, vec![1, 5, 6, 8]);
    assert_eq!(
        settings.detection_paths[2],
        root.join("View_006").join("detections/dets.txt")
    );
    assert_eq!(
        settings.thresholds,
        TrackingThresholds {
            entry_probability_tau: 0.1,
            exit_probability_tau: 0.15,
            min_detection_height: 40.0,
        }
    );
    assert_eq!(settings.display_trajectory_length, 50);
}

#[rstest]
#[case("1")]
#[case("1,5,6,8")]
#[case("3,2,1,7,9,12,40")]
fn test_per_camera_sequences_are_aligned(#[case] cameras: &str) {
    let file = write_settings(&format!(
        "DATASET_BASE_PATH=/d\nCAMERA_INDICES={cameras}\nDETECTION_PATH=det"
    ));
    let settings = Settings::from_file(file.path()).unwrap();

    let n = cameras.split(',').count();
    assert_eq!(settings.camera_indices.len(), n);
    assert_eq!(settings.view_paths.len(), n);
    assert_eq!(settings.detection_paths.len(), n);
    for (view, det) in settings.view_paths.iter().zip(&settings.detection_paths) {
        assert_eq!(det, &view.join("det"));
    }
}

#[test]
fn test_detection_path_for_camera_nine() {
    let file = write_settings(
        "DATASET_BASE_PATH=/base\nDATASET_SCENARIO=L2\nCAMERA_INDICES=5,9,12\nDETECTION_PATH=det",
    );
    let settings = Settings::from_file(file.path()).unwrap();

    let (view, det) = settings.camera_paths(9).unwrap();
    let expected_view = Path::new("/base")
        .join(Scenario::S2L2.path_suffix())
        .join("View_009");
    assert_eq!(view, expected_view);
    assert_eq!(det, expected_view.join("det"));
}

#[test]
fn test_l1_defaults_when_frames_omitted() {
    let file = write_settings("DATASET_BASE_PATH=/d\nDATASET_SCENARIO=L1\nCAMERA_INDICES=1");
    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(settings.start_frame, Scenario::S2L1.default_start_frame());
    assert_eq!(settings.end_frame, Scenario::S2L1.default_end_frame());
    assert_eq!(
        settings.frame_count(),
        u64::from(settings.end_frame - settings.start_frame) + 1
    );
}

#[rstest]
#[case("START_FRAME_IDX=5\nEND_FRAME_IDX=5", 5, 5)]
#[case("START_FRAME_IDX=100", 100, 794)]
#[case("END_FRAME_IDX=10", 0, 10)]
fn test_frame_range_invariant(#[case] frames: &str, #[case] start: u32, #[case] end: u32) {
    let file = write_settings(&format!(
        "DATASET_BASE_PATH=/d\nCAMERA_INDICES=1\n{frames}"
    ));
    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!((settings.start_frame, settings.end_frame), (start, end));
    assert!(settings.end_frame >= settings.start_frame);
    assert_eq!(settings.frame_count(), u64::from(end - start) + 1);
}

#[test]
fn test_frame_range_up_to_u32_max() {
    let file = write_settings(
        "DATASET_BASE_PATH=/d\nCAMERA_INDICES=1\nSTART_FRAME_IDX=0\nEND_FRAME_IDX=4294967295",
    );
    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(settings.end_frame, u32::MAX);
    assert_eq!(settings.frame_count(), 4_294_967_296);
}

#[test]
fn test_reload_is_idempotent() {
    let file = write_settings(PETS_S2L1);
    let mut settings = Settings::new();

    settings.load(file.path()).unwrap();
    let first = settings.clone();
    settings.load(file.path()).unwrap();

    assert_eq!(settings, first);
}

#[test]
fn test_reload_discards_previous_state() {
    let first = write_settings(PETS_S2L1);
    let second = write_settings("DATASET_BASE_PATH=/other\nCAMERA_INDICES=2");
    let mut settings = Settings::new();

    settings.load(first.path()).unwrap();
    settings.load(second.path()).unwrap();

    assert_eq!(settings.camera_indices, vec![2]);
    assert_eq!(settings.thresholds, TrackingThresholds::default());
    assert_eq!(settings.display_trajectory_length, 0);
    assert_eq!(settings.result_save_path, Path::new(""));
}

#[test]
fn test_missing_base_path_leaves_settings_uninitialized() {
    let good = write_settings(PETS_S2L1);
    let bad = write_settings("DATASET_SCENARIO=L1\nCAMERA_INDICES=1,2");
    let mut settings = Settings::new();
    settings.load(good.path()).unwrap();

    let err = settings.load(bad.path()).unwrap_err();

    assert!(matches!(err, Error::MissingRequiredField(ref f) if f == "DATASET_BASE_PATH"));
    assert!(!settings.is_initialized());
    assert!(settings.camera_indices.is_empty());
    assert!(settings.view_paths.is_empty());
}

#[test]
fn test_invalid_threshold_value() {
    let file = write_settings("DATASET_BASE_PATH=/d\nCAMERA_INDICES=1\nP_EN_TAU=abc");
    let err = Settings::from_file(file.path()).unwrap_err();

    match err {
        Error::InvalidFieldValue { key, value } => {
            assert_eq!(key, "P_EN_TAU");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_comments_never_malformed() {
    let file = write_settings(
        "%this line has no delimiter\n%=\n%CAMERA_INDICES=x,y\nDATASET_BASE_PATH=/d\nCAMERA_INDICES=1",
    );
    assert!(Settings::from_file(file.path()).is_ok());
}

#[test]
fn test_malformed_line_reports_position() {
    let file = write_settings("DATASET_BASE_PATH=/d\n% ok\nCAMERA_INDICES\n");
    let err = Settings::from_file(file.path()).unwrap_err();

    match err {
        Error::MalformedLine { line, text } => {
            assert_eq!(line, 3);
            assert_eq!(text, "CAMERA_INDICES");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_path_values_may_contain_delimiter() {
    let file = write_settings(
        "DATASET_BASE_PATH=/d\nCAMERA_INDICES=1\nRESULT_SAVE_PATH=/out/tau=0.1",
    );
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.result_save_path, Path::new("/out/tau=0.1"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::new();

    let err = settings.load(&dir.path().join("missing.txt")).unwrap_err();

    assert!(matches!(err, Error::ConfigNotFound { .. }));
    assert!(!settings.is_initialized());
}

#[rstest]
#[case(ScenarioPolicy::Fallback, true)]
#[case(ScenarioPolicy::Strict, false)]
fn test_unknown_scenario_policy(#[case] policy: ScenarioPolicy, #[case] succeeds: bool) {
    let file = write_settings("DATASET_BASE_PATH=/d\nCAMERA_INDICES=1\nDATASET_SCENARIO=XX");
    let loader = ConfigLoader::with_options(LoaderOptions {
        scenario_policy: policy,
    });

    let result = loader.load(file.path());

    assert_eq!(result.is_ok(), succeeds);
    if let Ok(settings) = result {
        assert_eq!(settings.scenario, Scenario::S2L1);
        assert_eq!(settings.dataset_scenario_code, "XX");
    }
}

#[test]
fn test_settings_shareable_across_threads() {
    let file = write_settings(PETS_S2L1);
    let settings = std::sync::Arc::new(Settings::from_file(file.path()).unwrap());

    let handle = {
        let settings = std::sync::Arc::clone(&settings);
        std::thread::spawn(move || settings.num_cameras())
    };

    assert_eq!(handle.join().unwrap(), 4);
}
