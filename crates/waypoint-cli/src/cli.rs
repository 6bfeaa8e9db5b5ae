use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use waypoint_types::HtmlHandling;

#[derive(Parser)]
#[command(
    name = "waypoint",
    about = "Waypoint — static asset router and dev server",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve a directory of static assets
    Serve(ServeArgs),
    /// Print a manifest file's header and entry count
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Asset directory, scanned into an in-memory deployment at startup
    #[arg(long)]
    pub root: PathBuf,

    /// Listen address (overrides the config file)
    #[arg(long)]
    pub listen: Option<SocketAddr>,

    /// HTML handling mode (overrides the config file)
    #[arg(long)]
    pub html_handling: Option<HtmlHandling>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Manifest file to inspect
    pub manifest: PathBuf,
}
