use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

/// The only way a scan can fail. A marker that never shows up, or a block
/// that never closes, is a silent non-match and not an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// Missing file, permission denied, or content that is not valid text
    #[error("failed to read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::FileAccess { source, .. } => source.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScanError::file_access(
            "lib/game_engine.dart",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("lib/game_engine.dart"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.io_kind(), io::ErrorKind::NotFound);
    }
}
