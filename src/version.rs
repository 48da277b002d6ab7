//! Asset version resolution.
//!
//! The engine asks a [`VersionResolver`] for the current asset version on every
//! render and compares it for equality with the client's `X-Inertia-Version`.
//! Versions are opaque strings; they are never parsed or ordered.
//!
//! | Resolver | Source |
//! |----------|--------|
//! | [`StaticVersion`] | A fixed string (default `"1"`) |
//! | [`SharedVersion`] | A string swapped at runtime, e.g. after a rebuild |
//! | [`FileVersion`] | A file written by the asset pipeline, read fresh per call |
//! | any `Fn() -> String` | Application closure |

use crate::error::{InertiaError, Result};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Supplies the current asset version.
///
/// Implementations are called concurrently from many requests and must not
/// require exclusive access.
pub trait VersionResolver: Send + Sync {
    /// Current asset version.
    ///
    /// # Errors
    ///
    /// Any error is propagated unchanged to the caller of `render`.
    fn version(&self) -> Result<String>;
}

impl<F> VersionResolver for F
where
    F: Fn() -> String + Send + Sync,
{
    fn version(&self) -> Result<String> {
        Ok(self())
    }
}

/// A version that never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticVersion(String);

impl StaticVersion {
    /// Fixed version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }
}

impl Default for StaticVersion {
    fn default() -> Self {
        Self::new("1")
    }
}

impl VersionResolver for StaticVersion {
    fn version(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// A version that can be replaced while the server is running.
///
/// Clones share the same value.
///
/// ```
/// use inertia_axum::version::{SharedVersion, VersionResolver};
///
/// let version = SharedVersion::new("abc");
/// let handle = version.clone();
/// handle.set("def");
/// assert_eq!(version.version().unwrap(), "def");
/// ```
#[derive(Clone, Debug)]
pub struct SharedVersion {
    current: Arc<RwLock<String>>,
}

impl SharedVersion {
    /// Start at `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            current: Arc::new(RwLock::new(version.into())),
        }
    }

    /// Replace the current version.
    pub fn set(&self, version: impl Into<String>) {
        let version = version.into();
        tracing::debug!(%version, "asset version updated");
        *self.current.write() = version;
    }
}

impl VersionResolver for SharedVersion {
    fn version(&self) -> Result<String> {
        Ok(self.current.read().clone())
    }
}

/// Reads the version from a file on every call.
///
/// Surrounding whitespace is trimmed. A missing or blank file is an error.
#[derive(Clone, Debug)]
pub struct FileVersion {
    path: PathBuf,
}

impl FileVersion {
    /// Resolve versions from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File being read.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionResolver for FileVersion {
    fn version(&self) -> Result<String> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            InertiaError::VersionResolution(format!("{}: {e}", self.path.display()))
        })?;

        let version = contents.trim();
        if version.is_empty() {
            return Err(InertiaError::VersionResolution(format!(
                "{} is empty",
                self.path.display()
            )));
        }
        Ok(version.to_string())
    }
}
