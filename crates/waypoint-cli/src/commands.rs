use std::sync::Arc;

use colored::Colorize;
use waypoint_manifest::AssetManifest;
use waypoint_server::{AppState, AssetServer, ServerConfig};

use crate::cli::{Cli, Command, InspectArgs, ServeArgs};
use crate::scan;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Inspect(args) => cmd_inspect(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.bind_addr = listen;
    }
    if let Some(mode) = args.html_handling {
        config.html_handling = mode;
    }

    let site = scan::scan_site(&args.root)?;
    println!(
        "{} Deployed {} assets from {}",
        "✓".green().bold(),
        site.manifest.entry_count().to_string().yellow(),
        args.root.display().to_string().bold()
    );
    println!(
        "  Serving on {} ({})",
        format!("http://{}", config.bind_addr).cyan(),
        config.html_handling.to_string().yellow()
    );

    let mode = config.html_handling;
    let state = AppState::new(site.manifest, Arc::new(site.store), mode);
    AssetServer::new(config, state).serve().await?;
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let manifest = AssetManifest::open(&args.manifest)?;
    let header = manifest.header();
    println!("{}", args.manifest.display().to_string().bold());
    println!("  format version: {}", header.version);
    println!("  entries: {}", manifest.entry_count().to_string().yellow());
    Ok(())
}
