use std::io;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum ReadError {
    /// Nothing servable at the path: missing, unstattable, or not a regular
    /// file. Answered with 404.
    #[error("no such file")]
    NotFound,
    /// The path stats as a regular file but reading it failed. Answered
    /// with 500.
    #[error("failed to read file: {0}")]
    Read(io::Error),
}

/// Load the complete contents of a regular file.
///
/// The stat and the read can race against deletion; a file that vanishes in
/// between reports as a read failure, not as missing.
pub async fn read(path: &Path) -> Result<Vec<u8>, ReadError> {
    let metadata = fs::metadata(path).await.map_err(|_| ReadError::NotFound)?;
    if !metadata.is_file() {
        return Err(ReadError::NotFound);
    }
    fs::read(path).await.map_err(ReadError::Read)
}
