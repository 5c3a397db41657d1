//! Longest-common-prefix resolution over the sorted route table.
//!
//! [`resolve`] performs the scan and yields a [`MatchResult`];
//! [`Resolution::from_match`] turns that into the dispatch decision: either
//! one exact route to run, or a group of child names to describe.

use tracing::debug;

use crate::matcher::common_prefix_len;
use crate::route::{Route, RouteTable};

/// Deepest common prefix found and the routes that reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Number of leading arguments shared with the best routes.
    pub depth: usize,
    /// Routes sharing `depth`, each cut to `depth + 1` segments, in table order.
    pub candidates: Vec<Route>,
}

/// Scan the table once, front to back.
///
/// The scan stops at the first route scoring below the running maximum. This
/// is only correct because the table is sorted: routes sharing the best prefix
/// sit together, so once the score drops the rest cannot climb back.
pub fn resolve<S: AsRef<str>>(table: &RouteTable, args: &[S]) -> MatchResult {
    let mut depth = 0;
    let mut candidates: Vec<Route> = Vec::new();

    for route in table.routes() {
        let score = common_prefix_len(route.segments(), args);
        if score < depth {
            break;
        }
        if score > depth {
            depth = score;
            candidates.clear();
        }
        candidates.push(route.truncated(depth + 1));
    }

    MatchResult { depth, candidates }
}

/// What the router should do with a [`MatchResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A single route equals the consumed arguments.
    Exact { route: Route },
    /// The consumed arguments name a group (or nothing); list its children.
    Help {
        /// Arguments consumed so far, as a route (empty at the root).
        route: Route,
        /// Immediate children, de-duplicated, in first-seen order.
        children: Vec<Route>,
    },
}

impl Resolution {
    pub fn from_match<S: AsRef<str>>(matched: MatchResult, args: &[S]) -> Self {
        let MatchResult { depth, candidates } = matched;

        if let [only] = candidates.as_slice()
            && only.len() == depth
        {
            debug!(route = %only, "exact match");
            return Resolution::Exact {
                route: only.clone(),
            };
        }

        let consumed =
            Route::from_segments(args[..depth].iter().map(|arg| -> &str { arg.as_ref() }));
        let mut names: Vec<&str> = Vec::new();
        for candidate in &candidates {
            // A group that is also a route lists its own name, as do aliases.
            if let Some(name) = candidate.last()
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        let children: Vec<Route> = names.into_iter().map(|n| consumed.child(n)).collect();

        debug!(
            route = %consumed,
            depth,
            children = children.len(),
            "ambiguous or partial route, presenting help"
        );
        Resolution::Help {
            route: consumed,
            children,
        }
    }
}
