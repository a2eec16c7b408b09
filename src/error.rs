use std::path::PathBuf;

use rust_i18n::t;

#[derive(Debug)]
pub enum Error {
    /// The search strategy went through every drive without a match.
    TargetNotFound(String),
    Launch {
        shell: PathBuf,
        source: std::io::Error
    },
    InvalidConfig {
        key: &'static str,
        value: String
    },
    IoError(std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::TargetNotFound(_) => 2,
            Error::Launch { .. } => 3,
            Error::InvalidConfig { .. } | Error::IoError(_) => 1,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TargetNotFound(name) => write!(f, "{}", t!("error.target_not_found", name = name)),
            Error::Launch { shell, source } => write!(
                f, "{}",
                t!("error.launch", shell = shell.display(), error = source)
            ),
            Error::InvalidConfig { key, value } => write!(
                f, "{}",
                t!("error.invalid_config", key = key, value = value)
            ),
            Error::IoError(e) => write!(f, "{}", t!("error.io_error", error = e)),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Launch { source, .. } => Some(source),
            Error::IoError(e) => Some(e),
            _ => None
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e)
    }
}
