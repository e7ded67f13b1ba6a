use std::path::PathBuf;

use clap::Parser;

use crate::models::{FontVariant, Overrides};

/// fontsub - build font subsets containing only the characters a project uses
#[derive(Parser, Debug)]
#[command(name = "fontsub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory that default and relative paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// JSON config file (defaults to fontsub.json in the project root, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to scan for characters; repeat to scan several
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Source font collection
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Directory for generated subsets
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory for the cache record and the characters file
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Subsetter executable
    #[arg(long, value_name = "PROGRAM")]
    pub subsetter: Option<String>,

    /// Variant to build as TAG=FACE_INDEX; repeat for several
    #[arg(long = "variant", value_name = "TAG=INDEX")]
    pub variants: Vec<FontVariant>,

    /// Skip checking face indices against the source font
    #[arg(long)]
    pub no_validate: bool,

    /// Regenerate even when the cache is current
    #[arg(short, long)]
    pub force: bool,

    /// Report failures but exit successfully, so a surrounding build continues
    #[arg(long)]
    pub allow_failure: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Settings that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            scan_dirs: self.roots.clone(),
            source_font: self.font.clone(),
            output_dir: self.output_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            subsetter_program: self.subsetter.clone(),
            variants: self.variants.clone(),
            no_validate: self.no_validate,
            force: self.force,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_flags() {
        let cli = Cli::try_parse_from([
            "fontsub",
            "--root",
            "src",
            "--root",
            "public",
            "--variant",
            "SC=2",
            "--variant",
            "JP=0",
            "--force",
        ])
        .unwrap();

        assert_eq!(cli.roots, [PathBuf::from("src"), PathBuf::from("public")]);
        assert_eq!(
            cli.variants,
            [FontVariant::new("SC", 2), FontVariant::new("JP", 0)]
        );

        let overrides = cli.overrides();
        assert!(overrides.force);
        assert!(!overrides.no_validate);
        assert_eq!(overrides.scan_dirs.len(), 2);
    }

    #[test]
    fn malformed_variant_is_a_usage_error() {
        assert!(Cli::try_parse_from(["fontsub", "--variant", "SC"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
