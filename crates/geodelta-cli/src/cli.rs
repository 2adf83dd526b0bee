use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "geodelta",
    about = "Classify the changes between two versions of a feature collection",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two GeoJSON collections and classify every record
    Diff(DiffArgs),
    /// Show a GeoJSON collection's schema and identity
    Info(InfoArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// The old version of the collection
    pub old: PathBuf,
    /// The new version of the collection
    pub new: PathBuf,
    /// Field identifying a record across both collections
    #[arg(short, long)]
    pub key: String,
    /// Write the diff collection as GeoJSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InfoArgs {
    pub layer: PathBuf,
}
