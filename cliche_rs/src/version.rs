//! `--version` shortcut, checked before any route matching.

use std::path::Path;

use tracing::debug;

use crate::loader::{Invocation, Loader, attempt};
use crate::route::Route;

/// Literal first argument that triggers the shortcut.
pub const VERSION_FLAG: &str = "--version";

/// Reserved route holding the version handler.
pub const VERSION_ROUTE: &str = ".version";

/// Run the `.version` handler if `args` starts with `--version`.
///
/// `None` means the flag was absent or the handler could not be loaded or
/// failed; resolution then continues with `--version` as a plain argument.
pub fn version_shortcut<T, L>(loader: &L, root: &Path, args: &[String], name: &str) -> Option<T>
where
    L: Loader<T> + ?Sized,
{
    if args.first().map(String::as_str) != Some(VERSION_FLAG) {
        return None;
    }

    let route = Route::from_segments([VERSION_ROUTE]);
    let invocation = Invocation {
        name: name.to_string(),
    };
    let version = attempt(&[&|| {
        let handler = loader.load(root, &route)?.into_handler(&route)?;
        Ok(handler.invoke(&[], &invocation)?)
    }]);
    if version.is_none() {
        debug!("no usable {VERSION_ROUTE} handler, routing {VERSION_FLAG} normally");
    }
    version
}
