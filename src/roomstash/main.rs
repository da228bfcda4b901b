use clap::Parser;
use console::Term;
use roomstash::api::InventoryApi;
use roomstash::config::InventoryConfig;
use roomstash::error::{InventoryError, Result};
use roomstash::store::fs::{hold_writes, FileStore};
use std::io::{self, Write};
use tracing::{debug, warn};

mod cli;
use cli::setup::{init_logging, Cli};
use cli::shell::{Shell, TermScreen, INTERRUPTED};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let clear = !cli.no_clear;
    if let Err(e) = run(cli) {
        if clear {
            let _ = Term::stdout().clear_screen();
        }
        report_fatal(&mut io::stdout(), &e);
        std::process::exit(1);
    }
}

/// A closed stdout must not turn the error report into a panic.
fn report_fatal<W: Write>(out: &mut W, err: &InventoryError) {
    let _ = writeln!(out, "程序运行时发生错误: {}", err);
    let _ = out.flush();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => InventoryConfig::load(path)?,
        None => InventoryConfig::default(),
    };
    if cli.no_clear {
        config.clear_screen = false;
    }

    let store = match cli.data_file.or_else(|| config.data_file.clone()) {
        Some(path) => FileStore::new(path),
        None => FileStore::beside_executable(),
    };
    debug!(path = %store.path().display(), "using data file");

    install_interrupt_handler(config.clear_screen);

    let api = InventoryApi::new(store, &config);
    let stdin = std::io::stdin();
    let mut shell = Shell::new(api, stdin.lock(), TermScreen::stdout(config.clear_screen));
    shell.run()
}

/// Ctrl-C: say so and leave. A save in progress finishes first, so neither
/// a half-written data file nor a stray temp file is left behind.
fn install_interrupt_handler(clear: bool) {
    let result = ctrlc::set_handler(move || {
        let _writes = hold_writes();
        let term = Term::stdout();
        if clear {
            let _ = term.clear_screen();
        }
        let _ = term.write_line(INTERRUPTED);
        std::process::exit(0);
    });
    if let Err(e) = result {
        warn!(error = %e, "could not install interrupt handler");
    }
}
