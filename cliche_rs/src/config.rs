//! Configuration file support.
//!
//! Loads optional `cliche.toml` from an application directory:
//!
//! ```toml
//! name = "git-lite"
//! root = "commands"
//! routes = ["add", "commit", "remote/add", "remote/remove"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::options::Options;

/// File name looked up by [`ClicheConfig::load`].
pub const CONFIG_FILE: &str = "cliche.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClicheConfig {
    /// Route strings, `/`-joined.
    pub routes: Vec<String>,
    /// Loader root; relative paths are taken from the config file's directory.
    pub root: Option<PathBuf>,
    /// Program name shown in usage lines.
    pub name: Option<String>,
}

impl ClicheConfig {
    /// Load config from `cliche.toml` in the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config");
                Self::default()
            }
        }
    }

    /// Turn the file contents into [`Options`], anchoring `root` at `base`.
    ///
    /// Without a `root` entry the loader root is `base` itself.
    pub fn into_options<T>(self, base: &Path) -> Options<T> {
        let root = match self.root {
            Some(root) if root.is_absolute() => root,
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        };
        let mut opts = Options::new(self.routes).root(root);
        opts.name = self.name;
        opts
    }
}
