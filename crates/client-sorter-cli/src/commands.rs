use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "client-sorter")]
#[command(about = "Sort loose documents into per-client folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Move files instead of copying them
    #[arg(long = "move")]
    pub move_files: bool,

    /// Show where files would go without copying or moving anything
    #[arg(long)]
    pub dry_run: bool,

    /// Source folder (prompted for when omitted)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination folder (prompted for when omitted)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Client as "First Last" or "First Middle Last"; repeat for more clients
    #[arg(long = "client", value_name = "NAME")]
    pub clients: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print configuration values
    PrintConfig,
}
