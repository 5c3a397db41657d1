//! Caller-facing options and their resolution into runtime parameters.

use std::fmt;
use std::path::PathBuf;

use crate::error::ClicheError;
use crate::presenter::{Presenter, Usage};
use crate::route::RouteTable;

/// Options accepted by [`cliche`](crate::cliche).
///
/// Everything except `routes` is optional and filled in by
/// [`Options::resolve`]. A bare list of route strings converts into
/// `Options` directly.
pub struct Options<T> {
    /// `/`-joined route strings; must not be empty.
    pub routes: Vec<String>,
    /// Input arguments (default: process arguments after argv\[0\]).
    pub args: Option<Vec<String>>,
    /// Base path the loader resolves routes against (default: `.`).
    pub root: Option<PathBuf>,
    /// Program name for usage lines and handler names (default: argv\[0\]).
    pub name: Option<String>,
    /// Presenter for the help scenario (default: [`Usage`]).
    pub help: Option<Box<dyn Presenter<T>>>,
}

impl<T> Options<T> {
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
            args: None,
            root: None,
            name: None,
            help: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn help(mut self, help: impl Presenter<T> + 'static) -> Self {
        self.help = Some(Box::new(help));
        self
    }
}

impl<T> Options<T> {
    /// Validate routes and fill in defaults, presenting help with
    /// `default_help` unless a presenter was set.
    ///
    /// The route table is parsed and sorted here, so an empty or malformed
    /// table fails before anything is loaded. Process arguments that are not
    /// valid UTF-8 are converted lossily.
    pub fn resolve_with(
        self,
        default_help: impl Presenter<T> + 'static,
    ) -> Result<ResolvedOptions<T>, ClicheError> {
        let table = RouteTable::new(&self.routes)?;
        let mut process_args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        let program = process_args.next().unwrap_or_default();

        Ok(ResolvedOptions {
            table,
            args: self.args.unwrap_or_else(|| process_args.collect()),
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            name: self.name.unwrap_or(program),
            help: self.help.unwrap_or_else(|| Box::new(default_help)),
        })
    }
}

impl<T: Default> Options<T> {
    /// [`resolve_with`](Self::resolve_with) falling back to [`Usage`].
    pub fn resolve(self) -> Result<ResolvedOptions<T>, ClicheError> {
        self.resolve_with(Usage)
    }
}

impl<T> fmt::Debug for Options<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("routes", &self.routes)
            .field("args", &self.args)
            .field("root", &self.root)
            .field("name", &self.name)
            .field("help", &self.help.as_ref().map(|_| "<presenter>"))
            .finish()
    }
}

impl<T> From<Vec<String>> for Options<T> {
    fn from(routes: Vec<String>) -> Self {
        Self::new(routes)
    }
}

impl<T> From<Vec<&str>> for Options<T> {
    fn from(routes: Vec<&str>) -> Self {
        Self::new(routes)
    }
}

impl<T> From<&[&str]> for Options<T> {
    fn from(routes: &[&str]) -> Self {
        Self::new(routes.iter().copied())
    }
}

impl<T, const N: usize> From<[&str; N]> for Options<T> {
    fn from(routes: [&str; N]) -> Self {
        Self::new(routes)
    }
}

/// Runtime parameters for one resolution, every default applied.
pub struct ResolvedOptions<T> {
    pub table: RouteTable,
    pub args: Vec<String>,
    pub root: PathBuf,
    pub name: String,
    pub help: Box<dyn Presenter<T>>,
}

impl<T> fmt::Debug for ResolvedOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("table", &self.table)
            .field("args", &self.args)
            .field("root", &self.root)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
