use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Errors raised by a [`Storage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}

/// Where documents are read from and written to.
pub trait Storage {
    /// Read the whole file; `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] for any failure other than not-found.
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the file contents with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the file cannot be created or
    /// fully written.
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StorageError>;
}

/// The local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        let to_error = |source: io::Error| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };
        // The file is closed on drop, on both the success and error paths.
        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(bytes).map_err(to_error)?;
        file.sync_all().map_err(to_error)
    }
}
