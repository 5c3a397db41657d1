//! Ties resolution, loading and presentation together for one invocation.

use anyhow::Result;
use tracing::debug;

use crate::loader::{Invocation, Loader, inspect};
use crate::metadata::Metadata;
use crate::options::ResolvedOptions;
use crate::resolver::{Resolution, resolve};
use crate::route::Route;
use crate::version::version_shortcut;

/// Route `opts.args` through the table.
///
/// Order of business:
/// 1. `--version` shortcut;
/// 2. longest-prefix scan of the sorted table;
/// 3. exact match → load and run the handler with the leftover arguments;
///    anything else → collect metadata and hand it to the presenter.
///
/// Load failures on the exact-match path and handler errors are returned
/// unchanged. Metadata lookups never fail; missing units leave fields unset.
pub fn route<T, L>(loader: &L, opts: &ResolvedOptions<T>) -> Result<T>
where
    L: Loader<T> + ?Sized,
{
    if let Some(version) = version_shortcut(loader, &opts.root, &opts.args, &opts.name) {
        return Ok(version);
    }

    let matched = resolve(&opts.table, &opts.args);
    let depth = matched.depth;

    match Resolution::from_match(matched, &opts.args) {
        Resolution::Exact { route } => {
            let invocation = Invocation {
                name: joined_name(&opts.name, &route),
            };
            let handler = loader
                .load(&opts.root, &route)?
                .into_handler(&route)?;
            debug!(route = %route, remaining = opts.args.len() - depth, "dispatching");
            handler.invoke(&opts.args[depth..], &invocation)
        }
        Resolution::Help { route, children } => {
            let me = inspect(loader, &opts.root, &route).named(joined_name(&opts.name, &route));
            let children: Vec<Metadata> = children
                .iter()
                .map(|child| inspect(loader, &opts.root, child))
                .collect();
            opts.help.present(&me, &children)
        }
    }
}

/// Program name followed by the route segments, space separated.
pub fn joined_name(program: &str, route: &Route) -> String {
    std::iter::once(program)
        .chain(route.segments().iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
