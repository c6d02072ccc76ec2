//! Settings loading
//!
//! Runs the tokenizer and resolver for a settings file and owns the options
//! that control resolution.

use crate::config::{Resolver, ScenarioPolicy, Settings, tokenize_file, tokenize_str};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable selecting the [`ScenarioPolicy`]
pub const SCENARIO_POLICY_ENV: &str = "MCTRACK_SCENARIO_POLICY";

/// Options controlling how settings files are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Handling of unknown scenario codes
    pub scenario_policy: ScenarioPolicy,
}

impl LoaderOptions {
    /// Load options from environment variables, defaults otherwise
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load options through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(policy) = lookup(SCENARIO_POLICY_ENV) {
            options.scenario_policy = policy.parse().map_err(|e: Error| {
                Error::config(format!("{}: {}", SCENARIO_POLICY_ENV, e))
            })?;
        }

        Ok(options)
    }
}

/// Settings loader
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Create a loader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with explicit options
    pub fn with_options(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Load and resolve the settings file at `path`
    pub fn load(&self, path: &Path) -> Result<Settings> {
        info!("Loading settings from file: {:?}", path);

        let pairs = tokenize_file(path)?;
        let settings = self.resolver().resolve(&pairs)?;

        info!(
            "Settings loaded: scenario {}, {} camera(s), frames {}..={}",
            settings.scenario,
            settings.num_cameras(),
            settings.start_frame,
            settings.end_frame
        );
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    /// Resolve settings text already held in memory
    pub fn load_str(&self, text: &str) -> Result<Settings> {
        let pairs = tokenize_str(text)?;
        self.resolver().resolve(&pairs)
    }

    /// Reset `settings` and reload it from `path`
    ///
    /// `settings` is only written on success; after a failure it is left in
    /// its reset, uninitialized state.
    pub fn load_into(&self, path: &Path, settings: &mut Settings) -> Result<()> {
        *settings = Settings::default();
        *settings = self.load(path)?;
        Ok(())
    }

    fn resolver(&self) -> Resolver {
        Resolver::new(self.options.scenario_policy)
    }
}
