//! Multi-camera dataset settings
//!
//! Loads the `KEY=VALUE` settings file of a multi-camera tracking dataset and
//! resolves it into a validated [`Settings`] object: scenario, frame range,
//! thresholds, and the view/detection directory of every camera.
//!
//! # File format
//!
//! ```text
//! % lines starting with '%' are comments
//! DATASET_BASE_PATH=/datasets/PETS2009
//! DATASET_SCENARIO=L1
//! CAMERA_INDICES=1,5,6,8
//! DETECTION_PATH=detections/result.txt
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mctrack_settings::ConfigLoader;
//!
//! # fn example() -> mctrack_settings::Result<()> {
//! let settings = ConfigLoader::new().load_str(
//!     "DATASET_BASE_PATH=/data\nDATASET_SCENARIO=L2\nCAMERA_INDICES=1,3",
//! )?;
//! assert_eq!(settings.view_paths.len(), 2);
//! assert_eq!(settings.frame_count(), 436);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;

pub use config::{ConfigLoader, LoaderOptions, Scenario, ScenarioPolicy, Settings};
pub use error::{Error, Result};
