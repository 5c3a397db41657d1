//! Help output for ambiguous or partial routes.

use std::io::{self, Write};

use crate::metadata::Metadata;

/// Shown for a child that exports no description.
pub const NO_DESCRIPTION: &str = "[no description available]";

/// Turns the "self" record and its children into the caller's result type.
pub trait Presenter<T> {
    fn present(&self, me: &Metadata, children: &[Metadata]) -> anyhow::Result<T>;
}

impl<T, F> Presenter<T> for F
where
    F: Fn(&Metadata, &[Metadata]) -> anyhow::Result<T>,
{
    fn present(&self, me: &Metadata, children: &[Metadata]) -> anyhow::Result<T> {
        self(me, children)
    }
}

/// Default presenter: prints [`format_usage`] to stderr and returns `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usage;

impl<T: Default> Presenter<T> for Usage {
    fn present(&self, me: &Metadata, children: &[Metadata]) -> anyhow::Result<T> {
        let mut err = io::stderr().lock();
        for line in format_usage(me, children) {
            writeln!(err, "{line}")?;
        }
        Ok(T::default())
    }
}

/// Render usage text, one entry per line.
pub fn format_usage(me: &Metadata, children: &[Metadata]) -> Vec<String> {
    let mut lines = vec![format!("usage: {} <command> [<args>]", me.name), String::new()];

    if let Some(about) = non_empty(&me.about).or_else(|| non_empty(&me.description)) {
        lines.push(about.to_string());
        lines.push(String::new());
    }

    lines.push("Available subcommands:".to_string());
    lines.push(String::new());

    let width = children
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    for child in children {
        let description = non_empty(&child.description).unwrap_or(NO_DESCRIPTION);
        lines.push(format!("  {:<width$}  {}", child.name, description));
    }

    lines
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
