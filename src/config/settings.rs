//! Resolved dataset settings
//!
//! Defines the settings object handed to the tracker once a settings file has
//! been tokenized, resolved and validated.

use crate::Result;
use crate::config::{ConfigLoader, Scenario};
use std::path::{Path, PathBuf};

/// Fully resolved settings for one multi-camera dataset
///
/// A fresh instance is uninitialized. [`Settings::load`] resets it and, on
/// success, fills every field and marks it initialized. Consumers must not
/// read the other fields while [`Settings::is_initialized`] is false.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub(crate) initialized: bool,

    /// Dataset base path as written in the file
    pub dataset_base_path: PathBuf,
    /// Raw scenario code as written in the file (may be empty)
    pub dataset_scenario_code: String,
    /// Scenario the code resolved to
    pub scenario: Scenario,
    /// Dataset root: base path joined with the scenario directory
    pub dataset_path: PathBuf,

    /// Camera identifiers in file order
    pub camera_indices: Vec<u32>,

    /// Calibration location, joined onto the dataset root
    pub calibration_path: PathBuf,
    /// Detection location relative to each camera's view directory
    pub detection_path_suffix: String,
    pub ground_truth_path: PathBuf,
    pub result_save_path: PathBuf,

    pub start_frame: u32,
    pub end_frame: u32,

    /// Tracker thresholds
    pub thresholds: TrackingThresholds,
    /// Number of past positions drawn per trajectory
    pub display_trajectory_length: u32,

    /// Per-camera view directories, aligned with `camera_indices`
    pub view_paths: Vec<PathBuf>,
    /// Per-camera detection locations, aligned with `camera_indices`
    pub detection_paths: Vec<PathBuf>,
}

/// Thresholds consumed by the tracking algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackingThresholds {
    /// Entry probability cut-off (`P_EN_TAU`)
    pub entry_probability_tau: f64,
    /// Exit probability cut-off (`P_EX_TAU`)
    pub exit_probability_tau: f64,
    /// Detections shorter than this are discarded (`DETECTION_MIN_HEIGHT`)
    pub min_detection_height: f64,
}

impl Settings {
    /// Create empty, uninitialized settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `path` with default loader options
    pub fn from_file(path: &Path) -> Result<Self> {
        ConfigLoader::new().load(path)
    }

    /// Reset and reload from `path` with default loader options
    ///
    /// On failure the instance stays reset and uninitialized.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        ConfigLoader::new().load_into(path, self)
    }

    /// Whether the last load succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn num_cameras(&self) -> usize {
        self.camera_indices.len()
    }

    /// Number of frames in the inclusive range `start_frame..=end_frame`
    ///
    /// `0..=u32::MAX` holds 2^32 frames, hence `u64`.
    pub fn frame_count(&self) -> u64 {
        if self.initialized {
            u64::from(self.end_frame) - u64::from(self.start_frame) + 1
        } else {
            0
        }
    }

    /// View and detection paths for the camera with identifier `camera_index`
    pub fn camera_paths(&self, camera_index: u32) -> Option<(&Path, &Path)> {
        let pos = self.camera_indices.iter().position(|&c| c == camera_index)?;
        Some((&self.view_paths[pos], &self.detection_paths[pos]))
    }
}
