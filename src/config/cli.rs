use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "site-demo")]
#[command(about = "Demo driver for the D Marketing Lab site data core")]
pub struct CliConfig {
    /// Optional site configuration file (TOML).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the services dataset path.
    #[arg(long)]
    pub services_data: Option<PathBuf>,

    /// Override the workshops dataset path.
    #[arg(long)]
    pub workshops_data: Option<PathBuf>,

    /// Override the blog posts dataset path.
    #[arg(long)]
    pub posts_data: Option<PathBuf>,

    /// Skip the artificial repository and submission delays.
    #[arg(long)]
    pub no_latency: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
