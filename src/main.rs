mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use owo_colors::{OwoColorize, Stream, Style};
use pom_graph::adapters::outbound::console::StderrProgressReporter;
use pom_graph::adapters::outbound::filesystem::{FileSystemManifestFetcher, FileSystemReader};
use pom_graph::adapters::outbound::network::{HttpManifestFetcher, RoutingManifestFetcher};
use pom_graph::adapters::outbound::parsers::PomXmlParser;
use pom_graph::application::dto::GraphRequest;
use pom_graph::application::factories::{PresenterFactory, PresenterType};
use pom_graph::application::use_cases::GenerateGraphUseCase;
use pom_graph::graph_analysis::policies::NamespaceRestriction;
use pom_graph::graph_analysis::services::CanvasSize;
use pom_graph::ports::outbound::{Credentials, RepositoryListReader};
use pom_graph::shared::error::{ExitCode, PomGraphError};
use pom_graph::shared::Result;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Clap exits with code 2 on its own for invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        let heading = "❌ An error occurred:"
            .if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold()));
        eprintln!("\n{}\n", heading);
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::merge(args, config);

    // Fail before any discovery when there is nothing to scan
    let repositories = settings.repositories(&FileSystemReader::new())?;

    // Create adapters (Dependency Injection)
    let fetcher = RoutingManifestFetcher::new(
        HttpManifestFetcher::new(settings.credentials)?,
        FileSystemManifestFetcher::new(),
    );
    let use_case =
        GenerateGraphUseCase::new(fetcher, PomXmlParser::new(), StderrProgressReporter::new());

    let request = GraphRequest::new(
        repositories,
        settings.restriction,
        settings.canvas,
        settings.cluster,
    );
    let response = use_case.execute(request).await?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(response.dot())?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?),
    }
}

/// Where the repository roots come from
#[derive(Debug, PartialEq, Eq)]
enum RepositorySource {
    File(PathBuf),
    Inline(Vec<String>),
    Missing,
}

/// Effective settings after command-line values override the config file
#[derive(Debug)]
struct Settings {
    source: RepositorySource,
    restriction: NamespaceRestriction,
    credentials: Option<Credentials>,
    canvas: CanvasSize,
    cluster: bool,
    output: Option<PathBuf>,
}

impl Settings {
    fn merge(args: Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        let defaults = CanvasSize::default();

        let source = match (args.repositories_file.or(config.repositories_file), config.repositories) {
            (Some(path), _) => RepositorySource::File(path),
            (None, Some(inline)) => RepositorySource::Inline(inline),
            (None, None) => RepositorySource::Missing,
        };

        Self {
            source,
            restriction: args
                .restriction
                .or(config.restriction)
                .map(NamespaceRestriction::new)
                .unwrap_or_default(),
            credentials: Credentials::from_parts(
                args.username.or(config.username),
                args.password.or(config.password),
            ),
            canvas: CanvasSize::new(
                args.width.or(config.width).unwrap_or(defaults.width),
                args.height.or(config.height).unwrap_or(defaults.height),
            ),
            cluster: !args.no_cluster && config.cluster.unwrap_or(true),
            output: args.output.or(config.output),
        }
    }

    fn repositories(&self, reader: &impl RepositoryListReader) -> Result<Vec<String>> {
        match &self.source {
            RepositorySource::File(path) => reader.read_repositories(path),
            RepositorySource::Inline(inline) => Ok(inline
                .iter()
                .map(|location| location.trim().to_string())
                .collect()),
            RepositorySource::Missing => Err(PomGraphError::MissingConfiguration {
                what: "no repository list was supplied".to_string(),
                suggestion: "Pass a repository list file with --file, or set 'repositories_file' or 'repositories' in pom-graph.config.yml".to_string(),
            }
            .into()),
        }
    }
}
