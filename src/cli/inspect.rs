//! Inspect mode CLI logic
//!
//! Loads a settings file and prints what it resolved to.

use crate::config::{ConfigLoader, LoaderOptions, ScenarioPolicy, Settings};
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments for inspect mode
#[derive(Debug)]
pub struct InspectArgs {
    pub config: PathBuf,
    pub strict_scenario: bool,
}

/// Install the stderr log subscriber; `RUST_LOG` takes precedence
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Run inspect mode with the given arguments
pub fn run_inspect(args: &InspectArgs) -> Result<String> {
    let mut options = LoaderOptions::from_env().context("Invalid loader options")?;
    if args.strict_scenario {
        options.scenario_policy = ScenarioPolicy::Strict;
    }

    tracing::debug!("Loader options: {:?}", options);

    let settings = ConfigLoader::with_options(options)
        .load(&args.config)
        .with_context(|| format!("Failed to load settings from {}", args.config.display()))?;

    Ok(render_summary(&settings))
}

/// Human-readable summary of resolved settings
pub fn render_summary(settings: &Settings) -> String {
    Summary(settings).to_string()
}

struct Summary<'a>(&'a Settings);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "Scenario:       {}", s.scenario)?;
        writeln!(f, "Dataset root:   {}", s.dataset_path.display())?;
        writeln!(
            f,
            "Frames:         {}..={} ({} frames)",
            s.start_frame,
            s.end_frame,
            s.frame_count()
        )?;
        writeln!(f, "Calibration:    {}", s.calibration_path.display())?;
        writeln!(f, "Ground truth:   {}", s.ground_truth_path.display())?;
        writeln!(f, "Results:        {}", s.result_save_path.display())?;
        writeln!(f, "Cameras:        {}", s.num_cameras())?;
        for ((idx, view), det) in s
            .camera_indices
            .iter()
            .zip(&s.view_paths)
            .zip(&s.detection_paths)
        {
            writeln!(f, "  [{:>3}] view:      {}", idx, view.display())?;
            writeln!(f, "        detection: {}", det.display())?;
        }
        let t = &s.thresholds;
        writeln!(f, "P_EN_TAU:       {}", t.entry_probability_tau)?;
        writeln!(f, "P_EX_TAU:       {}", t.exit_probability_tau)?;
        writeln!(f, "Min det height: {}", t.min_detection_height)?;
        writeln!(f, "Trajectory len: {}", s.display_trajectory_length)
    }
}
