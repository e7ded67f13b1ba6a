use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::variant::{Flavor, FontVariant};
use crate::utils::naming::{clean_name, output_file_name};

/// Config file picked up from the project root when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "fontsub.json";

const CACHE_FILE_NAME: &str = ".font-subset-cache.json";
const CHARS_FILE_NAME: &str = ".subset-chars.txt";

/// File extensions scanned for characters
pub const DEFAULT_EXTENSIONS: [&str; 9] =
    ["ts", "tsx", "js", "jsx", "vue", "json", "yaml", "yml", "html"];

/// How the external subsetter is invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubsetterOptions {
    /// Executable name or path
    pub program: String,
    pub flavor: Flavor,
    /// Value of `--layout-features`
    pub layout_features: String,
    /// Pass `--with-zopfli`
    pub with_zopfli: bool,
}

impl Default for SubsetterOptions {
    fn default() -> Self {
        Self {
            program: "pyftsubset".to_string(),
            flavor: Flavor::Woff2,
            layout_features: "*".to_string(),
            with_zopfli: true,
        }
    }
}

/// Resolved settings for one run. Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are resolved against
    pub project_root: PathBuf,
    /// Directories scanned for characters
    pub scan_dirs: Vec<PathBuf>,
    /// Allow-listed file extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Multi-face source font collection
    pub source_font: PathBuf,
    /// Where generated subsets are written
    pub output_dir: PathBuf,
    /// Holds the cache record and the characters file
    pub cache_dir: PathBuf,
    /// Output file name prefix, followed by `-<TAG>.<ext>`
    pub output_prefix: String,
    pub variants: Vec<FontVariant>,
    pub subsetter: SubsetterOptions,
    /// Check face indices against the source font before subsetting
    pub validate_faces: bool,
    /// Regenerate even if the cache says everything is current
    pub force: bool,
}

/// Keys accepted in `fontsub.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub scan_dirs: Option<Vec<PathBuf>>,
    pub extensions: Option<Vec<String>>,
    pub source_font: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub output_prefix: Option<String>,
    pub variants: Option<Vec<FontVariant>>,
    pub subsetter: Option<SubsetterOptions>,
    pub validate_faces: Option<bool>,
}

/// Command-line overrides, applied on top of the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub scan_dirs: Vec<PathBuf>,
    pub source_font: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub subsetter_program: Option<String>,
    pub variants: Vec<FontVariant>,
    pub no_validate: bool,
    pub force: bool,
}

impl Config {
    /// Create a configuration with the default project layout under `project_root`
    pub fn new(project_root: &Path) -> Self {
        let root = project_root.to_path_buf();
        Self {
            scan_dirs: vec![root.join("src"), root.join("public")],
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            source_font: root
                .join("scripts")
                .join("fonts-src")
                .join("SourceHanSans-VF.otf.ttc"),
            output_dir: root.join("public").join("fonts"),
            cache_dir: root.join(".cache").join("fonts"),
            output_prefix: "SourceHanSans-Subset".to_string(),
            variants: FontVariant::defaults(),
            subsetter: SubsetterOptions::default(),
            validate_faces: true,
            force: false,
            project_root: root,
        }
    }

    /// Build the configuration for `project_root`.
    ///
    /// An explicit `config_path` must exist. Without one, `fontsub.json` in
    /// the project root is used when present.
    pub fn load(
        project_root: &Path,
        config_path: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => Some(read_config_file(path)?),
            None => {
                let implicit = project_root.join(CONFIG_FILE_NAME);
                if implicit.is_file() {
                    Some(read_config_file(&implicit)?)
                } else {
                    None
                }
            }
        };

        let mut config = Config::new(project_root);
        if let Some(file) = file {
            config = config.merge_file(file);
        }
        let config = config.merge_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.project_root.join(path)
        }
    }

    /// Apply the keys set in a config file
    pub fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(dirs) = file.scan_dirs {
            self.scan_dirs = dirs.into_iter().map(|dir| self.resolve(dir)).collect();
        }
        if let Some(extensions) = file.extensions {
            self.extensions = extensions
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        if let Some(font) = file.source_font {
            self.source_font = self.resolve(font);
        }
        if let Some(dir) = file.output_dir {
            self.output_dir = self.resolve(dir);
        }
        if let Some(dir) = file.cache_dir {
            self.cache_dir = self.resolve(dir);
        }
        if let Some(prefix) = file.output_prefix {
            self.output_prefix = prefix;
        }
        if let Some(variants) = file.variants {
            self.variants = variants;
        }
        if let Some(subsetter) = file.subsetter {
            self.subsetter = subsetter;
        }
        if let Some(validate) = file.validate_faces {
            self.validate_faces = validate;
        }
        self
    }

    /// Apply command-line overrides. Repeatable flags replace the list they target.
    pub fn merge_overrides(mut self, overrides: Overrides) -> Self {
        if !overrides.scan_dirs.is_empty() {
            self.scan_dirs = overrides
                .scan_dirs
                .into_iter()
                .map(|dir| self.resolve(dir))
                .collect();
        }
        if let Some(font) = overrides.source_font {
            self.source_font = self.resolve(font);
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = self.resolve(dir);
        }
        if let Some(dir) = overrides.cache_dir {
            self.cache_dir = self.resolve(dir);
        }
        if let Some(program) = overrides.subsetter_program {
            self.subsetter.program = program;
        }
        if !overrides.variants.is_empty() {
            self.variants = overrides.variants;
        }
        if overrides.no_validate {
            self.validate_faces = false;
        }
        self.force |= overrides.force;
        self
    }

    /// Reject settings that would produce clashing or unnamed outputs
    pub fn validate(&self) -> Result<()> {
        if self.variants.is_empty() {
            return Err(Error::Config("no font variants configured".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(Error::Config("no file extensions configured".to_string()));
        }
        if clean_name(&self.output_prefix).is_empty() {
            return Err(Error::Config("output prefix is empty".to_string()));
        }
        if self.subsetter.program.trim().is_empty() {
            return Err(Error::Config("subsetter program is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if variant.tag.is_empty() || clean_name(&variant.tag) != variant.tag {
                return Err(Error::Config(format!(
                    "variant tag '{}' cannot be used in a file name",
                    variant.tag
                )));
            }
            if !seen.insert(variant.tag.as_str()) {
                return Err(Error::Config(format!("duplicate variant tag '{}'", variant.tag)));
            }
        }
        Ok(())
    }

    /// Persisted cache record
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir.join(CACHE_FILE_NAME)
    }

    /// Text file handed to the subsetter
    pub fn chars_file(&self) -> PathBuf {
        self.cache_dir.join(CHARS_FILE_NAME)
    }

    /// Generated file for one variant
    pub fn output_path(&self, variant: &FontVariant) -> PathBuf {
        self.output_dir.join(output_file_name(
            &self.output_prefix,
            &variant.tag,
            self.subsetter.flavor,
        ))
    }

    /// Generated files for every variant, in configuration order
    pub fn expected_outputs(&self) -> Vec<PathBuf> {
        self.variants.iter().map(|variant| self.output_path(variant)).collect()
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::Config(format!("invalid config file {}: {}", path.display(), e)))
}
