//! Where the engine binary comes from
//!
//! Loaders accept an optional [`BootstrapSource`]. `None` means the loader
//! picks its own default location. A source can be bytes already in memory,
//! a path to read, or a future that produces one of those later.

use crate::error::LoadError;
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;

/// Engine bootstrap input
pub enum BootstrapSource {
    /// The engine binary, already in memory
    Bytes(Vec<u8>),
    /// A file holding the engine binary
    Path(PathBuf),
    /// A source that is still being resolved
    Deferred(BoxFuture<'static, Result<BootstrapSource, LoadError>>),
}

impl BootstrapSource {
    /// Wrap a future that yields the real source
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<BootstrapSource, LoadError>> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    /// Resolve deferred sources and read paths until bytes come out
    ///
    /// A `Path` source is read synchronously with `std::fs::read`, blocking
    /// the polling thread for the duration of the read.
    pub async fn into_bytes(self) -> Result<Vec<u8>, LoadError> {
        let mut source = self;
        loop {
            source = match source {
                Self::Bytes(bytes) => return Ok(bytes),
                Self::Path(path) => {
                    log::debug!("Reading engine binary from {}", path.display());
                    return std::fs::read(&path)
                        .map_err(|e| LoadError::Fetch(format!("{}: {}", path.display(), e)));
                }
                Self::Deferred(pending) => pending.await?,
            };
        }
    }
}

impl fmt::Debug for BootstrapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<Vec<u8>> for BootstrapSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for BootstrapSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for BootstrapSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}
