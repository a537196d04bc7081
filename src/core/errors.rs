use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no such file or directory")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("not a directory")]
    NotADirectory,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps a failure to open or read the target directory onto the
    /// fatal taxonomy. Per-child failures never come through here.
    pub fn access(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound,
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied,
            std::io::ErrorKind::NotADirectory => Error::NotADirectory,
            _ => Error::Io(err),
        }
    }
}
