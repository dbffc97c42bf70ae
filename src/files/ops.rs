//! One-shot file utilities.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure while copying a file, tagged with the side that failed.
#[derive(Debug)]
pub enum CopyError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Read { path, .. } => write!(f, "Unable to read file {}", path.display()),
            CopyError::Write { path, .. } => {
                write!(f, "Error writing file to {}", path.display())
            }
        }
    }
}

impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CopyError::Read { source, .. } | CopyError::Write { source, .. } => Some(source),
        }
    }
}

#[derive(Debug)]
pub struct ReadError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to read file {}", self.path.display())
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Reads `src` in full and writes it to `dest`, replacing any existing file.
///
/// The destination is only touched once the source has been read. Returns
/// the number of bytes written.
pub async fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64, CopyError> {
    let (src, dest) = (src.as_ref(), dest.as_ref());

    let data = tokio::fs::read(src).await.map_err(|source| CopyError::Read {
        path: src.to_path_buf(),
        source,
    })?;

    tokio::fs::write(dest, &data)
        .await
        .map_err(|source| CopyError::Write {
            path: dest.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        src = %src.display(),
        dest = %dest.display(),
        bytes = data.len(),
        "Copied file"
    );

    Ok(data.len() as u64)
}

/// Reads a whole file as text. Invalid UTF-8 is replaced, not rejected.
pub async fn read_contents(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();

    let data = tokio::fs::read(path).await.map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&data).into_owned())
}
