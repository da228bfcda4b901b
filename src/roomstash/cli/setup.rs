use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roomstash", version)]
#[command(
    about = "Keep track of which items are stored where, room by room",
    long_about = None
)]
pub struct Cli {
    /// Inventory file (defaults to storage_data.json next to the executable)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Never clear the terminal
    #[arg(long)]
    pub no_clear: bool,

    /// Diagnostic logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Diagnostics go to stderr so they never interleave with the menu on stdout.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("roomstash=debug")
    } else {
        EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
