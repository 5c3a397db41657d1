//! Help metadata from TOML files on disk.
//!
//! Layout under the root directory:
//!
//! ```text
//! root/
//!   add.toml             # route "add"
//!   remote/
//!     .meta.toml         # metadata for the "remote" group
//!     add.toml           # route "remote/add"
//! ```
//!
//! Each file may set `about` and `description`. Manifests never carry a
//! handler; layer a [`Registry`](crate::Registry) in front with
//! [`Layered`](crate::Layered) to make routes runnable.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::CONFIG_FILE;
use crate::error::LoadError;
use crate::loader::{Loaded, Loader};
use crate::metadata::Metadata;
use crate::route::Route;

const EXTENSION: &str = "toml";

/// Filesystem [`Loader`] reading `<root>/<route>.toml`.
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    base: Option<PathBuf>,
}

impl ManifestLoader {
    /// Resolve manifests against the router's root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve manifests against `base` joined with the router's root, so the
    /// directory can differ from where a layered registry looks.
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn manifest_path(&self, root: &Path, route: &Route) -> PathBuf {
        let mut path = match &self.base {
            Some(base) => base.join(root),
            None => root.to_path_buf(),
        };
        path.extend(route.segments());
        // `set_extension` would clobber the dot in `.meta`.
        let mut file = path.into_os_string();
        file.push(".");
        file.push(EXTENSION);
        PathBuf::from(file)
    }
}

impl<T> Loader<T> for ManifestLoader {
    fn load(&self, root: &Path, route: &Route) -> Result<Loaded<T>, LoadError> {
        let path = self.manifest_path(root, route);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    path: path.display().to_string(),
                });
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };
        let meta: Metadata =
            toml::from_str(&content).map_err(|source| LoadError::Manifest { path, source })?;
        Ok(Loaded::Metadata(meta))
    }
}

/// List routes defined by manifests under `root`, sorted.
///
/// Every `*.toml` file whose name does not start with `.` becomes a route,
/// its path relative to `root` without the extension. Hidden directories are
/// not descended into, and a `cliche.toml` directly under `root` is
/// configuration, not a route.
pub fn discover_routes(root: &Path) -> Result<Vec<String>, LoadError> {
    let mut routes = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
        });

    for entry in walker {
        let entry = entry.map_err(|e| LoadError::Io {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.into()),
            source: e.into(),
        })?;
        let path = entry.path();
        if entry.depth() == 1 && entry.file_name() == CONFIG_FILE {
            continue;
        }
        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION)
        {
            continue;
        }
        let Ok(relative) = path.with_extension("").strip_prefix(root).map(Path::to_path_buf)
        else {
            continue;
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        routes.push(segments.join("/"));
    }

    routes.sort();
    Ok(routes)
}
