//! Cache-gated subset generation
//!
//! A run goes `scan -> hash -> skip` or `scan -> hash -> generate -> persist`.
//! The cache record is only rewritten after every variant was generated, so
//! a failed run leaves the previous record (and its hash) in place.

pub mod cache;
pub mod subsetter;

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::collector::{collect_with_stats, CharSet};
use crate::error::Result;
use crate::font::validate_variants;
use crate::models::{CacheRecord, Config};
use crate::utils::ensure_directory_exists;

pub use cache::{load_cache, persist};
pub use subsetter::{PyFtSubset, SubsetJob, Subsetter};

/// Why the subsets have to be rebuilt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// No hash recorded yet
    NoCache,
    /// The character set differs from the one the outputs were built from
    HashChanged,
    /// Hash matches but a generated file is gone
    MissingOutput(PathBuf),
    /// Requested on the command line
    Forced,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NoCache => write!(f, "no cache record"),
            Reason::HashChanged => write!(f, "character set changed"),
            Reason::MissingOutput(path) => write!(f, "{} is missing", path.display()),
            Reason::Forced => write!(f, "forced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip,
    Regenerate(Reason),
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing to do, existing subsets match the sources
    UpToDate { hash: String },
    /// Subsets were rebuilt and the cache record updated
    Generated { hash: String, outputs: Vec<PathBuf> },
}

/// Decide whether the subsets built for `record` still match `current_hash`.
///
/// A matching hash is not enough: every expected output has to exist too.
pub fn should_regenerate(
    current_hash: &str,
    record: &CacheRecord,
    expected_outputs: &[PathBuf],
) -> Decision {
    if record.chars_hash.is_none() {
        return Decision::Regenerate(Reason::NoCache);
    }
    if !record.matches(current_hash) {
        return Decision::Regenerate(Reason::HashChanged);
    }
    match expected_outputs.iter().find(|path| !path.is_file()) {
        Some(missing) => Decision::Regenerate(Reason::MissingOutput(missing.clone())),
        None => Decision::Skip,
    }
}

/// Write the character file and run the subsetter once per variant.
///
/// Stops at the first failing variant. Returns the generated files in
/// variant order.
pub fn generate(
    config: &Config,
    charset: &CharSet,
    subsetter: &dyn Subsetter,
) -> Result<Vec<PathBuf>> {
    if config.validate_faces {
        validate_variants(&config.source_font, &config.variants)?;
    }

    ensure_directory_exists(&config.cache_dir)?;
    ensure_directory_exists(&config.output_dir)?;

    let text_file = config.chars_file();
    fs::write(&text_file, charset.as_str())?;
    debug!(
        "Wrote {} characters to {}",
        charset.len(),
        text_file.display()
    );

    let mut outputs = Vec::with_capacity(config.variants.len());
    for variant in &config.variants {
        let job = SubsetJob::new(config, variant, &text_file);
        subsetter.subset(&job)?;
        outputs.push(job.output_file);
    }
    Ok(outputs)
}

/// Scan, compare against the cache and regenerate the subsets if needed
pub fn run(config: &Config, subsetter: &dyn Subsetter) -> Result<RunOutcome> {
    let (charset, stats) = collect_with_stats(&config.scan_dirs, &config.extensions);
    let hash = charset.hash();
    info!(
        "Collected {} characters from {} files",
        charset.len(),
        stats.files_read
    );

    let cache_file = config.cache_file();
    let mut record = match load_cache(&cache_file) {
        Ok(record) => record,
        // A forced run is the way out of a corrupt record
        Err(e) if config.force => {
            warn!("Replacing unreadable cache record: {}", e);
            CacheRecord::default()
        }
        Err(e) => return Err(e),
    };

    let decision = if config.force {
        Decision::Regenerate(Reason::Forced)
    } else {
        should_regenerate(&hash, &record, &config.expected_outputs())
    };

    let reason = match decision {
        Decision::Skip => {
            info!("Font subset up-to-date. Skip.");
            return Ok(RunOutcome::UpToDate { hash });
        }
        Decision::Regenerate(reason) => reason,
    };
    info!("Regenerating font subsets: {}", reason);

    let outputs = generate(config, &charset, subsetter)?;

    record.chars_hash = Some(hash.clone());
    record.output_font = outputs.last().map(|path| path.display().to_string());
    persist(&cache_file, &record)?;

    if let Some(last) = outputs.last() {
        info!("Font subset generated: {}", last.display());
    }
    Ok(RunOutcome::Generated { hash, outputs })
}
