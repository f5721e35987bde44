use clap::Parser;
use std::path::PathBuf;

/// Render the module and dependency graph of Maven repositories as Graphviz DOT
#[derive(Parser, Debug)]
#[command(name = "pom-graph")]
#[command(version)]
#[command(
    about = "Render the module and dependency graph of Maven repositories as Graphviz DOT",
    long_about = None
)]
pub struct Args {
    /// File listing repository roots (URLs or paths), one per line
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub repositories_file: Option<PathBuf>,

    /// Only graph artifacts whose groupId starts with this prefix
    #[arg(short, long, value_name = "PREFIX")]
    pub restriction: Option<String>,

    /// Username for HTTP basic auth
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for HTTP basic auth
    #[arg(short, long)]
    pub password: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./pom-graph.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Width of the rendered canvas
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Height of the rendered canvas
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Do not wrap each group's nodes in a dashed cluster
    #[arg(long)]
    pub no_cluster: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
