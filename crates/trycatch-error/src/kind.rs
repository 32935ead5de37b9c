//! Error kinds for storage operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of storage failure that occurred.
///
/// Callers match on this to decide whether a failed dump is worth reporting
/// to the user (e.g. a missing directory) or is environmental (disk full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Target file or one of its parent directories does not exist
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// Target path is a directory
    IsADirectory,

    /// No space left on the storage device
    StorageFull,

    /// Read-only filesystem
    ReadOnly,

    /// Any other IO failure
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Classify an IO error kind.
    pub fn from_io(kind: std::io::ErrorKind) -> Self {
        use std::io::ErrorKind as Io;
        match kind {
            Io::NotFound => ErrorKind::FileNotFound,
            Io::PermissionDenied => ErrorKind::PermissionDenied,
            Io::IsADirectory => ErrorKind::IsADirectory,
            Io::StorageFull => ErrorKind::StorageFull,
            Io::ReadOnlyFilesystem => ErrorKind::ReadOnly,
            _ => ErrorKind::IoFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::FileNotFound.to_string(), "FileNotFound");
        assert_eq!(ErrorKind::StorageFull.as_str(), "StorageFull");
    }

    #[test]
    fn test_from_io() {
        use std::io::ErrorKind as Io;
        assert_eq!(ErrorKind::from_io(Io::NotFound), ErrorKind::FileNotFound);
        assert_eq!(
            ErrorKind::from_io(Io::PermissionDenied),
            ErrorKind::PermissionDenied
        );
        assert_eq!(ErrorKind::from_io(Io::StorageFull), ErrorKind::StorageFull);
        assert_eq!(ErrorKind::from_io(Io::Interrupted), ErrorKind::IoFailed);
    }
}
