pub mod config;
pub mod dot;
pub mod error;
pub mod labels;
pub mod report;
pub mod runner;
pub mod sample;
pub mod table;

use std::env;
use std::sync::Arc;

use config::Config;
use error::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

/// Command line options; everything else comes from `Config.toml`.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    source: Option<String>,
    all_sources: bool,
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_level(true)
        .init();

    let args = parse_args();
    let config = config::load_config().expect("Failed to load config");

    if let Err(e) = run(args, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Builds the log filter from a `RUST_LOG`-style directive string.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Parse command-line arguments: an optional source label and `--all`.
fn parse_args() -> CliArgs {
    let args: Vec<String> = env::args().collect();
    match parse_arg_list(args.get(1..).unwrap_or(&[])) {
        Some(cli) => cli,
        None => {
            eprintln!(
                "Usage: {} [SOURCE] [--all]\n  - SOURCE: label of the source vertex (A, B, ...)\n  - --all: run every vertex as a source",
                args.first().map_or("executor", String::as_str)
            );
            std::process::exit(1);
        }
    }
}

fn parse_arg_list(args: &[String]) -> Option<CliArgs> {
    let mut cli = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--all" => cli.all_sources = true,
            flag if flag.starts_with('-') => return None,
            label if cli.source.is_none() => cli.source = Some(label.to_string()),
            _ => return None,
        }
    }
    Some(cli)
}

async fn run(args: CliArgs, config: Config) -> Result<(), Error> {
    let graph = sample::sample_graph()?;
    let solver = config.run.solver();

    if config.export.enabled {
        let path = config.export.output_dir.join(&config.export.graph_file);
        dot::export_graph(&graph, &path)?;
        println!("Graph written to: {}", path.display());
    }

    if args.all_sources || config.run.all_sources {
        let results = runner::run_all_sources(Arc::new(graph), solver, config.export).await?;
        for result in &results {
            println!("{}", report::render_report(result));
        }
        return Ok(());
    }

    let label = args.source.unwrap_or(config.run.source);
    let source = labels::resolve_label(&label, &graph)?;
    let table_dir = config.export.output_dir.clone();
    let result = runner::run_single(&graph, source, solver, &config.export, table_dir)?;
    print!("{}", report::render_report(&result));

    Ok(())
}
