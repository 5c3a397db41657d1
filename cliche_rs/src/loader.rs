//! The loader seam: how the router obtains handlers and metadata for a route.
//!
//! The router never knows where commands live. It asks a [`Loader`] for a
//! route path relative to the configured root and only cares whether the
//! answer is a runnable [`Handler`], a plain [`Metadata`] record, or a
//! [`LoadError`]. Two implementations ship with the crate:
//! [`Registry`](crate::Registry) (compiled in) and
//! [`ManifestLoader`](crate::ManifestLoader) (TOML files on disk).

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::error::LoadError;
use crate::metadata::Metadata;
use crate::route::Route;

/// Reserved segment holding metadata for a route without its own unit.
pub const META_SEGMENT: &str = ".meta";

/// Context passed to every handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name followed by the consumed route segments, space separated.
    pub name: String,
}

type HandlerFn<T> = dyn Fn(&[String], &Invocation) -> anyhow::Result<T> + Send + Sync;

/// A runnable command together with the metadata it exports.
pub struct Handler<T> {
    meta: Metadata,
    run: Arc<HandlerFn<T>>,
}

impl<T> Handler<T> {
    pub fn new<F>(meta: Metadata, run: F) -> Self
    where
        F: Fn(&[String], &Invocation) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self {
            meta,
            run: Arc::new(run),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    pub fn invoke(&self, args: &[String], invocation: &Invocation) -> anyhow::Result<T> {
        (self.run)(args, invocation)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// What a successful load produced.
pub enum Loaded<T> {
    Handler(Handler<T>),
    Metadata(Metadata),
}

impl<T> fmt::Debug for Loaded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loaded::Handler(handler) => f.debug_tuple("Handler").field(handler).finish(),
            Loaded::Metadata(meta) => f.debug_tuple("Metadata").field(meta).finish(),
        }
    }
}

impl<T> Loaded<T> {
    pub fn metadata(&self) -> &Metadata {
        match self {
            Loaded::Handler(handler) => handler.metadata(),
            Loaded::Metadata(meta) => meta,
        }
    }

    pub fn into_metadata(self) -> Metadata {
        match self {
            Loaded::Handler(handler) => handler.meta,
            Loaded::Metadata(meta) => meta,
        }
    }

    /// The handler, or `NotRunnable` if only metadata was found at `route`.
    pub fn into_handler(self, route: &Route) -> Result<Handler<T>, LoadError> {
        match self {
            Loaded::Handler(handler) => Ok(handler),
            Loaded::Metadata(_) => Err(LoadError::NotRunnable {
                path: route.to_string(),
            }),
        }
    }
}

/// Resolves route paths to handlers or metadata.
pub trait Loader<T> {
    /// Load the unit at `root` joined with `route`'s segments.
    fn load(&self, root: &Path, route: &Route) -> Result<Loaded<T>, LoadError>;
}

impl<T, L: Loader<T> + ?Sized> Loader<T> for &L {
    fn load(&self, root: &Path, route: &Route) -> Result<Loaded<T>, LoadError> {
        (**self).load(root, route)
    }
}

/// Tries `primary`, then `fallback` when the primary load fails.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    pub primary: A,
    pub fallback: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<T, A: Loader<T>, B: Loader<T>> Loader<T> for Layered<A, B> {
    fn load(&self, root: &Path, route: &Route) -> Result<Loaded<T>, LoadError> {
        self.primary.load(root, route).or_else(|err| {
            if err.is_not_found() {
                trace!(route = %route, error = %err, "primary loader missed");
            } else {
                warn!(route = %route, error = %err, "primary loader failed, using fallback");
            }
            self.fallback.load(root, route)
        })
    }
}

/// Run each attempt in order and return the first success.
///
/// Failures are skipped. `NotFound` is the expected miss and is only traced;
/// anything else is a broken unit and gets a warning before moving on.
pub fn attempt<T>(attempts: &[&dyn Fn() -> Result<T, AttemptError>]) -> Option<T> {
    for run in attempts {
        match run() {
            Ok(value) => return Some(value),
            Err(AttemptError::Load(err)) if err.is_not_found() => {
                trace!(error = %err, "fallback skipped");
            }
            Err(err) => {
                warn!(error = %err, "fallback failed, trying next");
            }
        }
    }
    None
}

/// Failure of a single fallback attempt.
#[derive(Debug)]
pub enum AttemptError {
    Load(LoadError),
    Invoke(anyhow::Error),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Load(err) => write!(f, "{err}"),
            AttemptError::Invoke(err) => write!(f, "{err:#}"),
        }
    }
}

impl From<LoadError> for AttemptError {
    fn from(err: LoadError) -> Self {
        AttemptError::Load(err)
    }
}

impl From<anyhow::Error> for AttemptError {
    fn from(err: anyhow::Error) -> Self {
        AttemptError::Invoke(err)
    }
}

/// Gather metadata for `route`: the unit itself, else its `.meta` sibling.
///
/// Missing both is fine and yields a record with only `name` set. The name is
/// the last segment, or empty at the root.
pub fn inspect<T, L: Loader<T> + ?Sized>(loader: &L, root: &Path, route: &Route) -> Metadata {
    let meta_route = route.child(META_SEGMENT);
    let found = attempt(&[
        &|| Ok(loader.load(root, route)?.into_metadata()),
        &|| Ok(loader.load(root, &meta_route)?.into_metadata()),
    ]);
    found
        .unwrap_or_default()
        .named(route.last().unwrap_or_default())
}
