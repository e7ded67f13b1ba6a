use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use crate::error::{Error, Result};
use crate::models::{Config, Flavor, FontVariant};

/// Everything needed to produce one subset file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetJob {
    pub tag: String,
    pub face_index: u32,
    pub source_font: PathBuf,
    pub text_file: PathBuf,
    pub output_file: PathBuf,
    pub flavor: Flavor,
    pub layout_features: String,
    pub with_zopfli: bool,
}

impl SubsetJob {
    pub fn new(config: &Config, variant: &FontVariant, text_file: &Path) -> Self {
        Self {
            tag: variant.tag.clone(),
            face_index: variant.face_index,
            source_font: config.source_font.clone(),
            text_file: text_file.to_path_buf(),
            output_file: config.output_path(variant),
            flavor: config.subsetter.flavor,
            layout_features: config.subsetter.layout_features.clone(),
            with_zopfli: config.subsetter.with_zopfli,
        }
    }

    /// Command-line arguments in `pyftsubset` syntax
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![
            self.source_font.clone().into_os_string(),
            format!("--font-number={}", self.face_index).into(),
            path_arg("--output-file=", &self.output_file),
            path_arg("--text-file=", &self.text_file),
            format!("--flavor={}", self.flavor).into(),
            format!("--layout-features={}", self.layout_features).into(),
        ];
        if self.with_zopfli {
            args.push("--with-zopfli".into());
        }
        args
    }
}

fn path_arg(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path);
    arg
}

/// Produces a subset file for a job
pub trait Subsetter {
    fn subset(&self, job: &SubsetJob) -> Result<()>;
}

/// Runs fontTools' `pyftsubset` and waits for it to finish
#[derive(Debug, Clone)]
pub struct PyFtSubset {
    program: String,
}

impl PyFtSubset {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.subsetter.program.clone())
    }
}

impl Subsetter for PyFtSubset {
    fn subset(&self, job: &SubsetJob) -> Result<()> {
        let args = job.args();
        info!(
            "Running: {} {}",
            self.program,
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| Error::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::Subset {
                variant: job.tag.clone(),
                status,
            });
        }
        Ok(())
    }
}
