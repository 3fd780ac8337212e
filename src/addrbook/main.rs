use addrbook::api::AddressBookApi;
use addrbook::config::BookConfig;
use addrbook::error::Result;
use addrbook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

mod args;
mod cli;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let data_dir = resolve_data_dir(&cli);
    let config = BookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        BookConfig::default()
    });
    let store_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.store_path(&data_dir));
    debug!(data_dir = %data_dir.display(), store = %store_path.display(), "starting");

    let mut api = AddressBookApi::open(FileStore::new(store_path), config.autosave)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run_repl(&mut api, &config, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    match ProjectDirs::from("com", "addrbook", "addrbook") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
