//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

/// Test helper functions
pub mod helpers {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// A complete S2.L1 settings file
    pub const PETS_S2L1: &str = "\
% PETS 2009 S2.L1, four views
DATASET_BASE_PATH=/datasets/PETS2009
DATASET_SCENARIO=L1
CAMERA_INDICES=1,5,6,8

% relative to the dataset root
CALIBRATION_PATH=calibration
% relative to each view directory
DETECTION_PATH=detections/dets.txt
GROUND_TRUTH_PATH=/datasets/PETS2009/gt/PETS2009-S2L1.xml
RESULT_SAVE_PATH=/tmp/results

P_EN_TAU=0.1
P_EX_TAU=0.15
DETECTION_MIN_HEIGHT=40
DISP_TRAJECTORY_LENGTH=50
";

    /// Write `contents` to a fresh temporary settings file
    pub fn write_settings(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp settings file");
        file.write_all(contents.as_bytes())
            .expect("write temp settings file");
        file.flush().expect("flush temp settings file");
        file
    }
}
