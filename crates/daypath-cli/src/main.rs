mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daypath",
    about = "Daily data-analysis course: serve the web app, seed and check the curriculum",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./daypath.yaml, defaults if missing)
    #[arg(long, global = true, env = "DAYPATH_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database path, overriding the config file
    #[arg(long, global = true, env = "DAYPATH_DB")]
    db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed content if needed and start the web server
    Serve {
        /// Port to listen on (0 picks a free port)
        #[arg(long, env = "DAYPATH_PORT")]
        port: Option<u16>,
        /// Open the browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Write the curriculum into the database and print table counts
    Seed,

    /// Lint the generated curriculum without touching a database
    ContentCheck,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = cmd::load_config(cli.config.as_deref(), cli.db.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Serve { port, open } => cmd::serve::run(config, port, open),
            Commands::Seed => cmd::seed::run(&config, cli.json),
            Commands::ContentCheck => cmd::content_check::run(cli.json),
        }
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
