//! Command line entry points

pub mod inspect;

pub use inspect::{InspectArgs, init_logging, render_summary, run_inspect};
