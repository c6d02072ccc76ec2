//! Directive resolution
//!
//! Interprets tokenized directives into [`Settings`]: dispatches each pair to
//! its field, converts values, then derives the scenario, frame bounds and
//! per-camera paths.

use crate::config::{RawPair, Scenario, Settings, TrackingThresholds};
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Separates the entries of an array value
pub const ARRAY_DELIMITER: char = ',';

pub const DATASET_BASE_PATH: &str = "DATASET_BASE_PATH";
pub const DATASET_SCENARIO: &str = "DATASET_SCENARIO";
pub const CAMERA_INDICES: &str = "CAMERA_INDICES";
pub const START_FRAME_IDX: &str = "START_FRAME_IDX";
pub const END_FRAME_IDX: &str = "END_FRAME_IDX";
pub const CALIBRATION_PATH: &str = "CALIBRATION_PATH";
pub const DETECTION_PATH: &str = "DETECTION_PATH";
pub const GROUND_TRUTH_PATH: &str = "GROUND_TRUTH_PATH";
pub const RESULT_SAVE_PATH: &str = "RESULT_SAVE_PATH";
pub const P_EN_TAU: &str = "P_EN_TAU";
pub const P_EX_TAU: &str = "P_EX_TAU";
pub const DETECTION_MIN_HEIGHT: &str = "DETECTION_MIN_HEIGHT";
pub const DISP_TRAJECTORY_LENGTH: &str = "DISP_TRAJECTORY_LENGTH";

/// How an unrecognized `DATASET_SCENARIO` code is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioPolicy {
    /// Warn and use [`Scenario::default`]
    #[default]
    Fallback,
    /// Fail with [`Error::UnknownScenario`]
    Strict,
}

impl FromStr for ScenarioPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "strict" => Ok(Self::Strict),
            other => Err(Error::config(format!(
                "Invalid scenario policy '{}', expected 'fallback' or 'strict'",
                other
            ))),
        }
    }
}

/// Field values collected during the dispatch pass
#[derive(Debug, Default)]
struct Directives {
    dataset_base_path: String,
    scenario_code: String,
    camera_indices: Vec<u32>,
    start_frame: Option<u32>,
    end_frame: Option<u32>,
    calibration_path: String,
    detection_path: String,
    ground_truth_path: String,
    result_save_path: String,
    thresholds: TrackingThresholds,
    display_trajectory_length: u32,
}

/// Resolves tokenized directives into settings
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    scenario_policy: ScenarioPolicy,
}

impl Resolver {
    /// Create a resolver with the given scenario policy
    pub fn new(scenario_policy: ScenarioPolicy) -> Self {
        Self { scenario_policy }
    }

    /// Resolve `pairs` into initialized settings
    pub fn resolve(&self, pairs: &[RawPair]) -> Result<Settings> {
        let directives = dispatch(pairs)?;

        if directives.dataset_base_path.is_empty() {
            return Err(Error::missing_field(DATASET_BASE_PATH));
        }
        if directives.camera_indices.is_empty() {
            return Err(Error::missing_field(CAMERA_INDICES));
        }

        let scenario = self.resolve_scenario(&directives.scenario_code)?;

        let start_frame = directives
            .start_frame
            .unwrap_or_else(|| scenario.default_start_frame());
        let end_frame = directives
            .end_frame
            .unwrap_or_else(|| scenario.default_end_frame());
        if end_frame < start_frame {
            return Err(Error::InvalidFrameRange {
                start: start_frame,
                end: end_frame,
            });
        }

        let dataset_base_path = PathBuf::from(&directives.dataset_base_path);
        let dataset_path = dataset_base_path.join(scenario.path_suffix());
        let calibration_path = dataset_path.join(&directives.calibration_path);

        let view_paths: Vec<PathBuf> = directives
            .camera_indices
            .iter()
            .map(|&idx| dataset_path.join(view_folder_name(idx)))
            .collect();
        let detection_paths = view_paths
            .iter()
            .map(|view| view.join(&directives.detection_path))
            .collect();

        Ok(Settings {
            initialized: true,
            dataset_base_path,
            dataset_scenario_code: directives.scenario_code,
            scenario,
            dataset_path,
            camera_indices: directives.camera_indices,
            calibration_path,
            detection_path_suffix: directives.detection_path,
            ground_truth_path: PathBuf::from(directives.ground_truth_path),
            result_save_path: PathBuf::from(directives.result_save_path),
            start_frame,
            end_frame,
            thresholds: directives.thresholds,
            display_trajectory_length: directives.display_trajectory_length,
            view_paths,
            detection_paths,
        })
    }

    fn resolve_scenario(&self, code: &str) -> Result<Scenario> {
        if code.is_empty() {
            debug!("No {} given, using {}", DATASET_SCENARIO, Scenario::default());
            return Ok(Scenario::default());
        }

        match Scenario::from_code(code) {
            Some(scenario) => Ok(scenario),
            None => match self.scenario_policy {
                ScenarioPolicy::Strict => Err(Error::unknown_scenario(code)),
                ScenarioPolicy::Fallback => {
                    let fallback = Scenario::default();
                    warn!(
                        "Unknown dataset scenario '{}', falling back to {}",
                        code, fallback
                    );
                    Ok(fallback)
                }
            },
        }
    }
}

/// Directory name of a camera view, e.g. `View_007`
pub fn view_folder_name(camera_index: u32) -> String {
    format!("View_{:03}", camera_index)
}

fn dispatch(pairs: &[RawPair]) -> Result<Directives> {
    let mut d = Directives::default();

    for pair in pairs {
        let value = pair.value.as_str();
        match pair.key.as_str() {
            DATASET_BASE_PATH => d.dataset_base_path = value.to_string(),
            DATASET_SCENARIO => d.scenario_code = value.to_string(),
            CAMERA_INDICES => d.camera_indices = parse_camera_indices(value)?,
            START_FRAME_IDX => d.start_frame = Some(parse_number(START_FRAME_IDX, value)?),
            END_FRAME_IDX => d.end_frame = Some(parse_number(END_FRAME_IDX, value)?),
            CALIBRATION_PATH => d.calibration_path = parse_relative_path(CALIBRATION_PATH, value)?,
            DETECTION_PATH => d.detection_path = parse_relative_path(DETECTION_PATH, value)?,
            GROUND_TRUTH_PATH => d.ground_truth_path = value.to_string(),
            RESULT_SAVE_PATH => d.result_save_path = value.to_string(),
            P_EN_TAU => d.thresholds.entry_probability_tau = parse_number(P_EN_TAU, value)?,
            P_EX_TAU => d.thresholds.exit_probability_tau = parse_number(P_EX_TAU, value)?,
            DETECTION_MIN_HEIGHT => {
                d.thresholds.min_detection_height = parse_number(DETECTION_MIN_HEIGHT, value)?
            }
            DISP_TRAJECTORY_LENGTH => {
                d.display_trajectory_length = parse_number(DISP_TRAJECTORY_LENGTH, value)?
            }
            unknown => debug!("Ignoring unknown key '{}' on line {}", unknown, pair.line),
        }
    }

    Ok(d)
}

/// Values joined under the dataset root must stay relative to it
fn parse_relative_path(key: &str, value: &str) -> Result<String> {
    let path = Path::new(value);
    if path.is_absolute() || path.has_root() {
        return Err(Error::invalid_field(key, value));
    }
    Ok(value.to_string())
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_field(key, value))
}

/// Parse a comma separated list of unique, non-negative camera indices
///
/// Empty entries are skipped so a trailing comma is tolerated.
fn parse_camera_indices(value: &str) -> Result<Vec<u32>> {
    let mut seen = HashSet::new();
    let mut indices = Vec::new();

    for token in value.split(ARRAY_DELIMITER).map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let idx: u32 = parse_number(CAMERA_INDICES, token)?;
        if !seen.insert(idx) {
            return Err(Error::invalid_field(CAMERA_INDICES, value));
        }
        indices.push(idx);
    }

    if indices.is_empty() {
        return Err(Error::missing_field(CAMERA_INDICES));
    }
    Ok(indices)
}
