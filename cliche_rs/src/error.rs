//! Error types for route configuration and loading.
//!
//! [`ClicheError`] covers configuration mistakes, which are fatal and surface
//! from the entry point. [`LoadError`] is what a [`Loader`](crate::Loader)
//! reports; the router recovers from it wherever a fallback exists.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid router configuration.
#[derive(Debug, Error)]
pub enum ClicheError {
    /// No routes were supplied.
    #[error("Must supply list of valid routes")]
    MissingRoutes,
    /// A route string contained an empty segment (`a//b`, `/a`, `a/`).
    #[error("route \"{route}\" contains an empty segment")]
    EmptySegment { route: String },
}

/// Failure to load a handler or metadata record for a route path.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing is registered at the requested path.
    #[error("cannot find command '{path}'")]
    NotFound { path: String },
    /// The path resolved to a metadata record, but a runnable handler was needed.
    #[error("'{path}' is not a runnable command")]
    NotRunnable { path: String },
    /// A backing file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A backing manifest exists but is not valid TOML metadata.
    #[error("failed to parse {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LoadError {
    /// True when the path simply does not exist, as opposed to a broken unit.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
