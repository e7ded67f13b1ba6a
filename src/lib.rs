//! Scans a project's sources for the characters it actually uses and builds
//! font subsets containing only those glyphs, skipping the work when the
//! character set has not changed since the last run.

pub mod cli;
pub mod collector;
pub mod error;
pub mod font;
pub mod models;
pub mod runner;
pub mod utils;

pub use collector::{collect, CharSet};
pub use error::{Error, Result};
pub use models::{CacheRecord, Config, FontVariant};
pub use runner::{generate, persist, run, should_regenerate, Decision, RunOutcome, Subsetter};
