use std::fmt::{self, Display, Formatter};
use std::{io, result};

use crate::Coords;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// The terminal can't fit the board, frame and status line.
    TerminalTooSmall { needed: Coords, actual: Coords },
    Log(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<log4rs::config::runtime::ConfigErrors> for Error {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        Error::Log(e.to_string())
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Self {
        Error::Log(e.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::TerminalTooSmall { needed, actual } => write!(
                f,
                "terminal is {}x{}, the board needs at least {}x{}",
                actual.0, actual.1, needed.0, needed.1
            ),
            Error::Log(e) => write!(f, "could not set up logging: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T = ()> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_message() {
        let e = Error::TerminalTooSmall { needed: (66, 27), actual: (40, 20) };
        assert_eq!(e.to_string(), "terminal is 40x20, the board needs at least 66x27");
    }

    #[test]
    fn io_converts() {
        let e: Error = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(e, Error::Io(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
