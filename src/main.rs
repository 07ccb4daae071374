use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod log;
mod model;
mod render;
mod run;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "pagesim-tables")]
#[command(about = "Pivot page-replacement simulation results into CSV tables", long_about = None)]
struct Cli {
    /// Which result directory to aggregate.
    #[arg(value_enum)]
    variant: config::Variant,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Also print the emitted rows as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run::run_variant(cli.variant, Path::new("."), config::AlgoConfig::default())?;

    if cli.json {
        println!("{}", render::render_json(&outcome.table)?);
    }
    println!("Wrote {}", outcome.output.display());

    Ok(())
}
