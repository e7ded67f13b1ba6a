//! Configuration and persisted data types

pub mod cache;
pub mod config;
pub mod variant;

pub use cache::CacheRecord;
pub use config::{Config, ConfigFile, Overrides, SubsetterOptions, CONFIG_FILE_NAME};
pub use variant::{Flavor, FontVariant};
