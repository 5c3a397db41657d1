//! Routing behaviour against a fixture registry.
//!
//! The registry mimics an application directory at `./fixtures`: every route
//! below is registered under that prefix and resolved with `root = ./fixtures`.

use cliche::{
    ClicheError, Invocation, LoadError, Metadata, Options, Registry, RouteTable, cliche,
    cliche_with, format_usage, resolve,
};

const ROUTES: &[&str] = &["add", "bisect/help", "commit", "remote/add", "remote/remove"];

#[derive(Debug, Default, PartialEq)]
enum Outcome {
    #[default]
    Nothing,
    Ran {
        route: String,
        args: Vec<String>,
        name: String,
    },
    Help {
        me: Metadata,
        children: Vec<Metadata>,
    },
    Usage(Vec<String>),
    Version(String),
}

fn ran(route: &'static str) -> impl Fn(&[String], &Invocation) -> anyhow::Result<Outcome> {
    move |args, inv| {
        Ok(Outcome::Ran {
            route: route.to_string(),
            args: args.to_vec(),
            name: inv.name.clone(),
        })
    }
}

fn fixtures() -> Registry<Outcome> {
    Registry::new()
        .metadata("fixtures", Metadata::new().description("app description"))
        .handler(
            "fixtures/.version",
            Metadata::new(),
            |_, _| Ok(Outcome::Version("0.0.0".into())),
        )
        .handler(
            "fixtures/add",
            Metadata::new().description("add description"),
            ran("add"),
        )
        .handler("fixtures/bisect/help", Metadata::new(), ran("bisect/help"))
        .handler(
            "fixtures/commit",
            Metadata::new().description("commit description"),
            ran("commit"),
        )
        .handler(
            "fixtures/remote/add",
            Metadata::new().description("remote/add description"),
            ran("remote/add"),
        )
        .handler("fixtures/remote/remove", Metadata::new(), ran("remote/remove"))
        .metadata(
            "fixtures/remote/.meta",
            Metadata::new()
                .about("remote about text")
                .description("remote description"),
        )
}

fn options(args: &[&str]) -> Options<Outcome> {
    Options::new(ROUTES.iter().copied())
        .root("./fixtures")
        .args(args.iter().copied())
        .name("test-app")
}

fn capture_help(me: &Metadata, children: &[Metadata]) -> anyhow::Result<Outcome> {
    Ok(Outcome::Help {
        me: me.clone(),
        children: children.to_vec(),
    })
}

fn capture_usage(me: &Metadata, children: &[Metadata]) -> anyhow::Result<Outcome> {
    Ok(Outcome::Usage(format_usage(me, children)))
}

fn execute(args: &[&str]) -> Outcome {
    cliche(&fixtures(), options(args).help(capture_help)).expect("resolution succeeds")
}

fn usage(opts: Options<Outcome>) -> Vec<String> {
    match cliche(&fixtures(), opts.help(capture_usage)).expect("resolution succeeds") {
        Outcome::Usage(lines) => lines,
        other => panic!("expected usage, got {other:?}"),
    }
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

// ============================================
// Entry
// ============================================

mod entry {
    use super::*;

    #[test]
    fn rejects_empty_routes() {
        let empty: Vec<&str> = Vec::new();
        let err = cliche(&fixtures(), empty).expect_err("no routes");
        assert!(matches!(
            err.downcast_ref::<ClicheError>(),
            Some(ClicheError::MissingRoutes)
        ));
    }

    #[test]
    fn rejects_malformed_routes() {
        let err = cliche(&fixtures(), vec!["remote//add"]).expect_err("bad route");
        assert!(matches!(
            err.downcast_ref::<ClicheError>(),
            Some(ClicheError::EmptySegment { .. })
        ));
    }

    #[test]
    fn missing_handler_propagates() {
        let registry = Registry::<Outcome>::new();
        let err = cliche(&registry, options(&["commit"])).expect_err("nothing registered");
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::NotFound { path }) => assert_eq!(path, "fixtures/commit"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn handler_errors_are_not_wrapped() {
        let registry = Registry::<Outcome>::new()
            .handler("fixtures/add", Metadata::new(), |_, _| anyhow::bail!("add failed"));
        let err = cliche(&registry, options(&["add"])).expect_err("handler fails");
        assert_eq!(format!("{err:#}"), "add failed");
    }
}

// ============================================
// Router
// ============================================

mod router {
    use super::*;

    #[test]
    fn routes_every_command_from_shuffled_tables() {
        let mut reversed: Vec<&str> = ROUTES.to_vec();
        reversed.reverse();
        let interleaved: Vec<&str> = ROUTES
            .iter()
            .step_by(2)
            .chain(ROUTES.iter().skip(1).step_by(2))
            .copied()
            .collect();

        for table in [ROUTES.to_vec(), reversed, interleaved] {
            for route in ROUTES {
                let args: Vec<&str> = route.split('/').collect();
                let mut opts = options(&args).help(capture_help);
                opts.routes = strings(&table);
                match cliche(&fixtures(), opts).expect("routes") {
                    Outcome::Ran { route: ran, .. } => assert_eq!(ran, *route),
                    other => panic!("{route}: expected dispatch, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn passes_unused_arguments() {
        match execute(&["add", "hello", "world"]) {
            Outcome::Ran { route, args, .. } => {
                assert_eq!(route, "add");
                assert_eq!(args, ["hello", "world"]);
            }
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn exact_leaf_consumes_everything() {
        match execute(&["remote", "add"]) {
            Outcome::Ran { route, args, name } => {
                assert_eq!(route, "remote/add");
                assert!(args.is_empty());
                assert_eq!(name, "test-app remote add");
            }
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn passes_joined_name() {
        match execute(&["commit"]) {
            Outcome::Ran { name, .. } => assert_eq!(name, "test-app commit"),
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn shows_help_when_unable_to_route() {
        match execute(&["badgers"]) {
            Outcome::Help { me, children } => {
                assert_eq!(me.name, "test-app");
                let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, ["add", "bisect", "commit", "remote"]);
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn aliased_route_lists_itself_in_help() {
        let mut opts = options(&["add"]).help(capture_help);
        opts.routes = strings(&["add", "add"]);
        match cliche(&fixtures(), opts).expect("help") {
            Outcome::Help { me, children } => {
                assert_eq!(me.name, "test-app add");
                assert_eq!(children, [Metadata::new().named("add")]);
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn group_with_own_route_lists_both() {
        let mut opts = options(&["remote"]).help(capture_help);
        opts.routes = strings(&["remote", "remote/add"]);
        match cliche(&fixtures(), opts).expect("help") {
            Outcome::Help { me, children } => {
                assert_eq!(me.name, "test-app remote");
                let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, ["remote", "add"]);
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        assert_eq!(execute(&["remote"]), execute(&["remote"]));
        let table = RouteTable::new(ROUTES).expect("valid table");
        assert_eq!(resolve(&table, &["remote"]), resolve(&table, &["remote"]));
    }
}

// ============================================
// Inspect
// ============================================

mod inspect {
    use super::*;

    #[test]
    fn uses_executable_when_no_app_name() {
        let mut opts = options(&["badgers"]).help(capture_help);
        opts.name = None;
        let argv0 = std::env::args().next().unwrap_or_default();
        match cliche(&fixtures(), opts).expect("help") {
            Outcome::Help { me, .. } => assert_eq!(me.name, argv0),
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn uses_metadata_files() {
        match execute(&["remote"]) {
            Outcome::Help { me, .. } => {
                assert_eq!(me.name, "test-app remote");
                assert_eq!(me.about.as_deref(), Some("remote about text"));
                assert_eq!(me.description.as_deref(), Some("remote description"));
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn tolerates_missing_metadata() {
        match execute(&["bisect"]) {
            Outcome::Help { me, children } => {
                assert_eq!(me.about, None);
                assert_eq!(me.description, None);
                assert_eq!(children, [Metadata::new().named("help")]);
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn uses_metadata_from_subcommands() {
        match execute(&["remote"]) {
            Outcome::Help { children, .. } => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[0].name, "add");
                assert_eq!(
                    children[0].description.as_deref(),
                    Some("remote/add description")
                );
                assert_eq!(children[1].name, "remove");
                assert_eq!(children[1].description, None);
            }
            other => panic!("expected help, got {other:?}"),
        }
    }
}

// ============================================
// Usage
// ============================================

mod usage {
    use super::*;

    #[test]
    fn renders_usage_line() {
        let lines = usage(options(&[]));
        assert_eq!(lines[0], "usage: test-app <command> [<args>]");
    }

    #[test]
    fn renders_usage_with_subcommands() {
        let lines = usage(options(&["remote"]));
        assert_eq!(lines[0], "usage: test-app remote <command> [<args>]");
    }

    #[test]
    fn renders_about_text() {
        let lines = usage(options(&["remote"]));
        assert_eq!(lines[2], "remote about text");
    }

    #[test]
    fn renders_description_when_no_about() {
        let lines = usage(options(&[]));
        assert_eq!(lines[2], "app description");
    }

    #[test]
    fn skips_when_no_about_or_description() {
        let lines = usage(options(&["bisect"]));
        assert_eq!(lines[2], "Available subcommands:");
    }

    #[test]
    fn renders_subcommand_information() {
        let lines = usage(options(&[]));
        assert_eq!(lines[6], "  add     add description");
        assert_eq!(lines[7], "  bisect  [no description available]");
        assert_eq!(lines[8], "  commit  commit description");
        assert_eq!(lines[9], "  remote  remote description");
        assert_eq!(lines.len(), 10);
    }
}

// ============================================
// Version
// ============================================

mod version {
    use super::*;

    #[test]
    fn displays_info_from_version_handler() {
        assert_eq!(execute(&["--version"]), Outcome::Version("0.0.0".into()));
    }

    #[test]
    fn tolerates_missing_version_handler() {
        let opts = Options::new(["help"])
            .root("./fixtures/bisect")
            .args(["--version"])
            .name("test-app")
            .help(capture_help);
        match cliche(&fixtures(), opts).expect("help") {
            Outcome::Help { me, children } => {
                assert_eq!(me.name, "test-app");
                assert_eq!(children, [Metadata::new().named("help")]);
            }
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn default_presenter_returns_default_value() {
        let opts = options(&["badgers"]);
        assert_eq!(cliche(&fixtures(), opts).expect("help"), Outcome::Nothing);
    }
}

// ============================================
// Result types without Default
// ============================================

mod custom_result {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Status {
        Ran(usize),
        Helped(usize),
    }

    fn registry() -> Registry<Status> {
        Registry::new().handler("fixtures/add", Metadata::new(), |args, _| {
            Ok(Status::Ran(args.len()))
        })
    }

    fn count_children(_: &Metadata, children: &[Metadata]) -> anyhow::Result<Status> {
        Ok(Status::Helped(children.len()))
    }

    fn opts(args: &[&str]) -> Options<Status> {
        Options::new(ROUTES.iter().copied())
            .root("./fixtures")
            .args(args.iter().copied())
            .name("test-app")
    }

    #[test]
    fn dispatches_without_default() {
        let status = cliche_with(&registry(), opts(&["add", "x"]), count_children).expect("runs");
        assert_eq!(status, Status::Ran(1));
    }

    #[test]
    fn presents_with_supplied_default() {
        let status = cliche_with(&registry(), opts(&["remote"]), count_children).expect("help");
        assert_eq!(status, Status::Helped(2));
    }
}
