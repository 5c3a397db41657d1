//! Routes and the sorted route table.

use std::fmt;

use crate::error::ClicheError;

/// Separator between segments in a route string.
pub const SEPARATOR: char = '/';

/// A hierarchical command path, e.g. `remote/add` → `["remote", "add"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    /// Parse a `/`-joined route string. Empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self, ClicheError> {
        let segments: Vec<String> = raw.split(SEPARATOR).map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(ClicheError::EmptySegment {
                route: raw.to_owned(),
            });
        }
        Ok(Self { segments })
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Copy of this route cut down to at most `len` segments.
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
        }
    }

    /// Copy of this route with one more segment appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Non-empty, lexicographically sorted set of routes.
///
/// Sorting by segment sequence keeps every route sharing a prefix contiguous,
/// which the resolver's early-exit scan relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Parse and sort route strings. Fails on an empty list or a malformed route.
    pub fn new<I, S>(raw: I) -> Result<Self, ClicheError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut routes = raw
            .into_iter()
            .map(|r| Route::parse(r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if routes.is_empty() {
            return Err(ClicheError::MissingRoutes);
        }
        routes.sort();
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false; an empty table cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_segments() {
        let route = Route::parse("remote/add").expect("valid route");
        assert_eq!(route.segments(), ["remote", "add"]);
        assert_eq!(route.last(), Some("add"));
        assert_eq!(route.to_string(), "remote/add");
    }

    #[test]
    fn rejects_empty_segments() {
        for raw in ["", "/add", "add/", "remote//add"] {
            assert!(
                matches!(Route::parse(raw), Err(ClicheError::EmptySegment { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn truncation_never_grows() {
        let route = Route::parse("bisect/help").expect("valid route");
        assert_eq!(route.truncated(1).segments(), ["bisect"]);
        assert_eq!(route.truncated(5), route);
    }

    #[test]
    fn table_requires_routes() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            RouteTable::new(empty),
            Err(ClicheError::MissingRoutes)
        ));
    }

    #[test]
    fn table_sorts_by_segments() {
        // Plain string order would put "a.x" before "a/b" and split the `a` group.
        let table = RouteTable::new(["a.x", "a/b", "a"]).expect("valid table");
        let order: Vec<String> = table.routes().iter().map(Route::to_string).collect();
        assert_eq!(order, ["a", "a/b", "a.x"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let table = RouteTable::new(["add", "add"]).expect("valid table");
        assert_eq!(table.len(), 2);
    }
}
