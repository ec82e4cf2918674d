use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    /// The scan root does not exist or is not a readable directory
    NotFound(PathBuf),
    /// A directory entry below the scan root could not be read
    Access { path: PathBuf, source: std::io::Error },
    IoError(std::io::Error),
    ConfigError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => {
                write!(f, "Routes root not found: {}", path.display())
            }
            Error::Access { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            }
            Error::IoError(e) => write!(f, "IO error: {}", e),
            Error::ConfigError(msg) => write!(f, "Invalid conventions: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Access { source, .. } => Some(source),
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigError(format!("YAML parse failed: {}", err))
    }
}
