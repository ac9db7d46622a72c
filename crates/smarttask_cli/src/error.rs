use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ShellResult<T> = Result<T, ShellError>;

/// Failures that end the interactive session.
#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    Logging(String),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
