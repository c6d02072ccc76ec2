//! Dataset settings loading
//!
//! A settings file is tokenized into `KEY=VALUE` pairs, then resolved into a
//! [`Settings`] object with the scenario, frame range and per-camera paths
//! derived.

pub mod loader;
pub mod resolver;
pub mod scenario;
pub mod settings;
pub mod tokenizer;

pub use loader::{ConfigLoader, LoaderOptions, SCENARIO_POLICY_ENV};
pub use resolver::{Resolver, ScenarioPolicy};
pub use scenario::Scenario;
pub use settings::{Settings, TrackingThresholds};
pub use tokenizer::{RawPair, tokenize_file, tokenize_str};
