mod chart;
mod collect;
mod config;
mod export;
mod parsers;
mod records;
mod report;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Parse the benchmark logs collected per UPF implementation and
/// scenario (iperf UDP runs, UE-to-DN pings, CPU samplers), normalize
/// them into record tables, and render comparison charts as PNG files.
#[derive(Parser, Debug)]
#[command(name = "upf-report", version, about)]
pub struct Cli {
    /// Root of the results tree ({upf}[/optimise]/{udp,ping,cpu}/...)
    #[arg(short, long, default_value = ".")]
    results_dir: PathBuf,

    /// Directory where charts (and CSV tables) are written
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also dump the record tables as CSV next to the charts
    #[arg(long)]
    csv: bool,

    /// Extra logging (per-cell parse decisions, skipped charts)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::debug!(?cli, "parsed CLI arguments");

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let tables = collect::collect(&cli.results_dir);
    println!("throughput records: {}", tables.throughput.len());
    println!("latency records: {}", tables.latency.len());
    println!("cpu records: {}", tables.cpu.len());

    std::fs::create_dir_all(&cli.output_dir).map_err(|e| {
        format!(
            "Failed to create output directory {}: {e}",
            cli.output_dir.display()
        )
    })?;

    if cli.csv {
        export::write_csv(&tables, &cli.output_dir)?;
    }

    report::render_all(&tables, &cli.output_dir)
}
