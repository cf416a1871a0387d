//! `subpack-ctl` — generate and clean proxy packages for npm subpath imports.
//!
//! A thin CLI over the `subpack` library: flags map onto [`subpack::Options`],
//! with a `.subpack.toml` config file providing defaults beneath them.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "subpack-ctl",
    version,
    about = "Generate per-module proxy packages so consumers can deep-import your npm package",
    styles = output::clap_styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a proxy package directory for each source module.
    Generate(GenerateArgs),
    /// Remove previously generated proxy package directories.
    Clean(CleanArgs),
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Package root directory (defaults to the current directory).
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Subdirectory holding the source modules.
    #[arg(long)]
    pub input_dir: Option<String>,

    /// Output directory the generated `main` fields point into.
    #[arg(long)]
    pub cjs_dir: Option<String>,

    /// Output directory the generated `module` fields point into.
    #[arg(long)]
    pub es_dir: Option<String>,

    /// Output directory for type declarations (referenced unconditionally when set).
    #[arg(long)]
    pub types_dir: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct CleanArgs {
    /// Package root directory (defaults to the current directory).
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Subdirectory holding the source modules.
    #[arg(long)]
    pub input_dir: Option<String>,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = cli_config::load_cli_config();

    let result = match cli.command {
        Commands::Generate(args) => commands::handle_generate_command(args, &config).await,
        Commands::Clean(args) => commands::handle_clean_command(args, &config).await,
    };

    if let Err(e) = result {
        output::error(e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
