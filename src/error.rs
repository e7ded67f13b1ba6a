use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Custom error type for the fontsub application
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Configuration errors
    Config(String),
    /// The cache file exists but could not be parsed or written
    Cache {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Source font problems (unreadable collection, face index out of range)
    Font(String),
    /// The subsetting tool could not be started
    Launch { program: String, source: io::Error },
    /// The subsetting tool ran but reported failure
    Subset { variant: String, status: ExitStatus },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Cache { source, .. } => Some(source),
            Error::Launch { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Cache { path, source } => {
                write!(f, "Cache file {} is invalid: {}", path.display(), source)
            }
            Error::Font(msg) => write!(f, "Font error: {}", msg),
            Error::Launch { program, source } => {
                write!(f, "Failed to launch {}: {}", program, source)
            }
            Error::Subset { variant, status } => {
                write!(f, "Subsetting variant {} failed ({})", variant, status)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for fontsub operations
pub type Result<T> = std::result::Result<T, Error>;
