use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use netsim_topology::config_loader;
use netsim_topology::utils::validation::{lint_environment, Lint};
use netsim_topology::Environment;

/// Output format for the normalized topology
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

/// Validate a test-network topology file and print the normalized model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the topology YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Format of the normalized topology
    #[arg(short, long, value_enum, default_value = "yaml")]
    format: OutputFormat,

    /// Write the normalized topology here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only validate; print a one-line summary
    #[arg(long, conflicts_with = "output")]
    check: bool,

    /// Default log filter (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn render(env: &Environment, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(env).wrap_err("Failed to render topology as YAML")?,
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(env).wrap_err("Failed to render topology as JSON")?;
            text.push('\n');
            text
        }
    };
    Ok(text)
}

fn summary(env: &Environment, findings: &[Lint]) -> String {
    format!(
        "{} nodes ({} seed), {} directed rules, {} warnings",
        env.nodes.len(),
        env.seed_nodes().count(),
        env.network.rules.len(),
        findings.len()
    )
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    info!("Topology file: {:?}", args.config);

    let env = config_loader::load_environment(&args.config)
        .wrap_err_with(|| format!("Failed to load topology '{}'", args.config.display()))?;

    // Findings are logged as warnings and never fail the run
    let findings = lint_environment(&env);

    if args.check {
        println!("OK: {}", summary(&env, &findings));
        return Ok(());
    }

    let text = render(&env, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, text)
                .wrap_err_with(|| format!("Failed to write topology to '{}'", path.display()))?;
            info!("Wrote normalized topology to: {:?}", path);
        }
        None => print!("{}", text),
    }

    Ok(())
}
