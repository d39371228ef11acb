use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// No target file was given on the command line.
    Usage,
    /// Opening, writing or syncing the target failed.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage => f.write_str("please specify db file"),
            Error::Io { path, source } => {
                write!(f, "I/O error for '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Usage => None,
        }
    }
}

impl Error {
    pub fn io_with_path(path: PathBuf, source: io::Error) -> Self {
        Error::Io { path, source }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage => 1,
            Error::Io { .. } => 2,
        }
    }
}
