use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Interactive command-line address book", long_about = None)]
pub struct Cli {
    /// Directory holding the contact store and config.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Contact store file (overrides the configured one)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
