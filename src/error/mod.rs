//! Error handling for settings loading
//!
//! This module defines the error type returned by every load operation.

pub mod types;

pub use types::{Error, Result};
