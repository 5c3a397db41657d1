//! Demo application routed by cliche.
//!
//! Commands are compiled into a [`Registry`]. Set `CLICHE_DEMO_MANIFESTS` to a
//! directory of TOML manifests to add help-only routes and descriptions on top.
//! A `cliche.toml` there may rename the program, list extra routes, or point
//! `root` at a subdirectory holding the manifests.

use std::any::Any;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cliche::{
    ClicheConfig, Invocation, Layered, ManifestLoader, Metadata, Options, Registry, cliche,
};

const PROGRAM: &str = "cliche-demo";
const MANIFEST_ENV: &str = "CLICHE_DEMO_MANIFESTS";

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

/// Flags for `salad`, parsed by the handler itself.
#[derive(Parser, Debug)]
#[command(about = "Make a fruit salad")]
struct SaladArgs {
    /// Add apples
    #[arg(short, long)]
    apples: bool,
    /// Add bananas
    #[arg(short, long)]
    bananas: bool,
    /// Add cherries
    #[arg(short, long)]
    cherries: bool,
    /// Add dates
    #[arg(short, long)]
    dates: bool,
}

fn salad(args: &[String], inv: &Invocation) -> Result<()> {
    let argv = std::iter::once(inv.name.as_str()).chain(args.iter().map(String::as_str));
    let parsed = SaladArgs::try_parse_from(argv).unwrap_or_else(|e| e.exit());

    let picked: Vec<&str> = [
        (parsed.apples, "apples"),
        (parsed.bananas, "bananas"),
        (parsed.cherries, "cherries"),
        (parsed.dates, "dates"),
    ]
    .into_iter()
    .filter_map(|(on, fruit)| on.then_some(fruit))
    .collect();

    println!("Your fruit salad will have:");
    if picked.is_empty() {
        println!("  - nothing");
    }
    for fruit in picked {
        println!("  - {fruit}");
    }
    Ok(())
}

fn greet(args: &[String], _inv: &Invocation) -> Result<()> {
    let who = if args.is_empty() {
        "world".to_string()
    } else {
        args.join(" ")
    };
    println!("hello, {who}");
    Ok(())
}

fn remote_add(args: &[String], inv: &Invocation) -> Result<()> {
    let [name, url] = args else {
        bail!("usage: {} <name> <url>", inv.name);
    };
    println!("added remote {name} -> {url}");
    Ok(())
}

fn remote_remove(args: &[String], inv: &Invocation) -> Result<()> {
    let [name] = args else {
        bail!("usage: {} <name>", inv.name);
    };
    println!("removed remote {name}");
    Ok(())
}

fn registry() -> Registry<()> {
    Registry::new()
        .handler(".version", Metadata::new(), |_, _| {
            println!("{PROGRAM} {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        })
        .handler(
            "salad",
            Metadata::new().description("an example of a subcommand parsing its own flags"),
            salad,
        )
        .handler("greet", Metadata::new().description("print a greeting"), greet)
        .handler(
            "remote/add",
            Metadata::new().description("register a remote"),
            remote_add,
        )
        .handler("remote/remove", Metadata::new(), remote_remove)
        .metadata(
            "remote/.meta",
            Metadata::new()
                .about("manage the set of tracked remotes")
                .description("remote management"),
        )
        .metadata(".meta", Metadata::new().description("cliche demo application"))
}

fn run() -> Result<()> {
    let registry = registry();
    let mut routes = registry.routes();

    let Some(dir) = std::env::var_os(MANIFEST_ENV).map(PathBuf::from) else {
        return cliche(&registry, Options::new(routes).name(PROGRAM));
    };

    let config: Options<()> = ClicheConfig::load(&dir).into_options(&dir);
    let manifests = config.root.unwrap_or(dir);
    let name = config.name.unwrap_or_else(|| PROGRAM.to_string());

    routes.extend(config.routes);
    routes.extend(cliche::discover_routes(&manifests)?);
    routes.sort();
    routes.dedup();
    tracing::debug!(dir = %manifests.display(), routes = routes.len(), "manifests layered");
    let loader = Layered::new(registry, ManifestLoader::at(manifests));
    cliche(&loader, Options::new(routes).name(name))
}

fn main() -> ExitCode {
    install_broken_pipe_handler();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{PROGRAM}: {err:#}");
            ExitCode::FAILURE
        }
    }
}
