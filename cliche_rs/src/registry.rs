//! Compiled-in loader: a map from route paths to handlers and metadata.
//!
//! Paths are stored normalised (`./a/../b` → `b`), and lookups join the
//! configured root with the route segments before normalising, so a registry
//! populated with `fixtures/add` answers route `add` under root `./fixtures`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};

use crate::error::LoadError;
use crate::loader::{Handler, Invocation, Loaded, Loader};
use crate::metadata::Metadata;
use crate::route::Route;

/// In-memory [`Loader`] built at startup.
pub struct Registry<T> {
    entries: BTreeMap<String, Loaded<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("paths", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a runnable command at `path`.
    pub fn handler<F>(mut self, path: &str, meta: Metadata, run: F) -> Self
    where
        F: Fn(&[String], &Invocation) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        self.insert(path, Loaded::Handler(Handler::new(meta, run)));
        self
    }

    /// Register a metadata-only export at `path` (a group, or a `.meta` sibling).
    pub fn metadata(mut self, path: &str, meta: Metadata) -> Self {
        self.insert(path, Loaded::Metadata(meta));
        self
    }

    /// Insert or replace the unit at `path`.
    pub fn insert(&mut self, path: &str, unit: Loaded<T>) {
        self.entries.insert(normalize(Path::new(path)), unit);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered paths usable as routes: every path with no dot-prefixed
    /// segment, so `.version` and `remote/.meta` are left out.
    pub fn routes(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter(|path| !path.split('/').any(|segment| segment.starts_with('.')))
            .cloned()
            .collect()
    }
}

impl<T> Loader<T> for Registry<T> {
    fn load(&self, root: &Path, route: &Route) -> Result<Loaded<T>, LoadError> {
        let mut full = root.to_path_buf();
        full.extend(route.segments());
        let key = normalize(&full);

        match self.entries.get(&key) {
            Some(Loaded::Handler(handler)) => Ok(Loaded::Handler(handler.clone())),
            Some(Loaded::Metadata(meta)) => Ok(Loaded::Metadata(meta.clone())),
            None => Err(LoadError::NotFound { path: key }),
        }
    }
}

/// Lexically normalise a path into a `/`-joined key.
fn normalize(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|p| p != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..".to_string());
                }
            }
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::RootDir | Component::Prefix(_) => absolute = true,
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
