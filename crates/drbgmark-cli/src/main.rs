use clap::{Parser, Subcommand};

mod bench;
mod hexutil;
mod list;
mod rand_cmd;
mod report;

/// DRBG comparison tool: benchmark CTR-, Hash-, and HMAC-DRBG side by side.
#[derive(Parser)]
#[command(name = "drbgmark")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full comparison benchmark across all mechanisms.
    Bench {
        /// Hex-encoded seed; defaults to 48 bytes from system entropy.
        #[arg(long)]
        seed: Option<String>,
        /// CSV output path.
        #[arg(long, default_value = "benchmark_results.csv")]
        csv: String,
        /// Also write an interactive HTML report to this path.
        #[arg(long)]
        html: Option<String>,
        /// Also write a matplotlib plot script to this path.
        #[arg(long)]
        plot: Option<String>,
    },
    /// Generate pseudorandom bytes from one mechanism and print them as hex.
    Rand {
        /// Number of bytes to generate.
        num: usize,
        /// Mechanism (ctr, hash, hmac).
        #[arg(short, long, default_value = "hmac")]
        mechanism: String,
        /// Hex-encoded seed; defaults to 48 bytes from system entropy.
        #[arg(long)]
        seed: Option<String>,
    },
    /// List available mechanisms and their state sizes.
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Bench {
            seed,
            csv,
            html,
            plot,
        } => bench::run(seed.as_deref(), csv, html.as_deref(), plot.as_deref()),
        Commands::Rand {
            num,
            mechanism,
            seed,
        } => rand_cmd::run(*num, mechanism, seed.as_deref()),
        Commands::List => list::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
