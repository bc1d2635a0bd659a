//! Slice Scope CLI
//!
//! Replays edit scripts against an editing session and prints the
//! resulting scopes.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use scope_core::flatten;
use scope_editor::{load_script, EditorSession, ScopeCatalog};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command line definition
#[must_use]
pub fn command() -> Command {
    Command::new("scope-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Network slice scope editor - replay driver")
        .subcommand_required(true)
        .arg(
            Arg::new("catalog-file")
                .long("catalog")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Catalog of selectable slices and data networks (.toml, .yaml, .json)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter, e.g. `debug` or `scope_core=trace` (overrides RUST_LOG)"),
        )
        .subcommand(
            Command::new("replay")
                .about("Apply an edit script and print the resulting scopes")
                .arg(
                    Arg::new("script")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Edit script (.yaml, .json or .toml)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("keep-going")
                        .long("keep-going")
                        .action(ArgAction::SetTrue)
                        .help("Skip rejected edits instead of stopping"),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("Print the effective catalog")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

/// Install the stderr log subscriber
///
/// `level` wins over `RUST_LOG`; without either, [`DEFAULT_LOG_FILTER`] is used.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    // A second install (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the parsed command, writing results to `out`
///
/// # Errors
/// Catalog or script loading failures, rejected edits (without
/// `--keep-going`) and output failures
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = load_catalog(matches.get_one::<PathBuf>("catalog-file").map(PathBuf::as_path))?;

    match matches.subcommand() {
        Some(("replay", args)) => {
            let script = args
                .get_one::<PathBuf>("script")
                .context("missing script argument")?;
            replay(
                catalog,
                script,
                args.get_flag("keep-going"),
                args.get_flag("json"),
                out,
            )
        }
        Some(("catalog", args)) => print_catalog(&catalog, args.get_flag("json"), out),
        _ => anyhow::bail!("no subcommand given"),
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<ScopeCatalog> {
    match path {
        Some(path) => ScopeCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(ScopeCatalog::default()),
    }
}

fn replay(
    catalog: ScopeCatalog,
    script: &Path,
    keep_going: bool,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let ops = load_script(script)
        .with_context(|| format!("failed to load script {}", script.display()))?;
    tracing::info!(ops = ops.len(), "replaying edit script");

    let mut session = EditorSession::new(catalog);
    let mut rejected = 0usize;

    for (index, op) in ops.iter().enumerate() {
        match session.apply(op) {
            Ok(()) => {}
            Err(err) if keep_going => {
                tracing::warn!(index, %op, %err, "skipping rejected edit");
                rejected += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("edit #{} ({op}) rejected", index + 1));
            }
        }
    }

    if rejected > 0 {
        tracing::warn!(rejected, total = ops.len(), "some edits were skipped");
    }

    let collection = session.into_collection();
    if json {
        let report = serde_json::json!({
            "collection": collection,
            "scopes": flatten(&collection),
            "rejected": rejected,
        });
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        for scope in flatten(&collection) {
            writeln!(out, "{scope}")?;
        }
    }
    Ok(())
}

fn print_catalog(catalog: &ScopeCatalog, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Slices:")?;
    for slice in catalog.slices() {
        writeln!(out, "  {slice}")?;
    }
    writeln!(out, "Data networks:")?;
    for data_network in catalog.data_networks() {
        writeln!(out, "  {data_network}")?;
    }
    Ok(())
}
