//! # cliche
//!
//! **Hierarchical subcommand router** - pick a leaf command from a flat list of
//! `/`-joined routes, or describe the group the user stopped at.
//!
//! Given routes like `remote/add` and `remote/remove`, the arguments
//! `remote add origin` run the `remote/add` handler with `["origin"]`, while
//! `remote` alone prints a usage listing of `add` and `remove`.
//!
//! ## Features
//!
//! - **Longest-prefix dispatch** - one forward scan over the sorted table
//! - **Generated help** - usage text from per-route metadata, `.meta` fallbacks
//! - **Version shortcut** - `--version` runs the reserved `.version` route
//! - **Pluggable loading** - compiled [`Registry`], TOML [`ManifestLoader`], or your own [`Loader`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cliche::{Metadata, Options, Registry, cliche};
//!
//! let registry = Registry::new()
//!     .handler("remote/add", Metadata::new().description("add a remote"), |args, inv| {
//!         println!("{}: adding {:?}", inv.name, args);
//!         Ok(())
//!     })
//!     .metadata("remote/.meta", Metadata::new().about("manage remotes"));
//!
//! cliche(&registry, Options::new(registry.routes()).name("git-lite")).unwrap();
//! ```

// ============================================================================
// Core Modules
// ============================================================================

pub mod error;
pub mod matcher;
pub mod resolver;
pub mod route;

// ============================================================================
// Loading & Presentation
// ============================================================================

pub mod loader;
pub mod manifest;
pub mod metadata;
pub mod presenter;
pub mod registry;

// ============================================================================
// Entry Point
// ============================================================================

pub mod config;
pub mod options;
pub mod router;
pub mod version;

pub use config::ClicheConfig;
pub use error::{ClicheError, LoadError};
pub use loader::{Handler, Invocation, Layered, Loaded, Loader};
pub use manifest::{ManifestLoader, discover_routes};
pub use metadata::Metadata;
pub use options::{Options, ResolvedOptions};
pub use presenter::{Presenter, Usage, format_usage};
pub use registry::Registry;
pub use resolver::{MatchResult, Resolution, resolve};
pub use route::{Route, RouteTable};

/// Resolve the configured arguments and run the result.
///
/// Accepts a full [`Options`] record or anything convertible into one, such
/// as a bare list of route strings. Returns the handler's value on an exact
/// match, the `.version` handler's value for `--version`, or the presenter's
/// value otherwise.
///
/// # Errors
///
/// - [`ClicheError`] when the route list is empty or malformed.
/// - The loader's [`LoadError`] when the exactly-matched route cannot be loaded
///   or only carries metadata.
/// - Whatever the handler or presenter returns.
pub fn cliche<T, L>(loader: &L, opts: impl Into<Options<T>>) -> anyhow::Result<T>
where
    T: Default,
    L: Loader<T> + ?Sized,
{
    let resolved = opts.into().resolve()?;
    router::route(loader, &resolved)
}

/// [`cliche`] for result types without a [`Default`].
///
/// `default_help` presents the help scenario unless `opts` carries its own
/// presenter.
///
/// # Errors
///
/// Same as [`cliche`].
pub fn cliche_with<T, L>(
    loader: &L,
    opts: impl Into<Options<T>>,
    default_help: impl Presenter<T> + 'static,
) -> anyhow::Result<T>
where
    L: Loader<T> + ?Sized,
{
    let resolved = opts.into().resolve_with(default_help)?;
    router::route(loader, &resolved)
}
