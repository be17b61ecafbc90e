use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_nav::backend::fixture::FixtureBackend;
use campus_nav::config::{NavSettings, OutputMode};
use campus_nav::render::Presenter;
use campus_nav::render::outcome::Fragment;

#[derive(Debug, Parser)]
#[command(name = "campus_nav", about = "Render campus navigation fragments")]
struct Cli {
    /// Canned-answer file to query instead of CAMPUS_NAV_FIXTURE.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the input form for a query.
    Prompt {
        #[arg(value_enum)]
        kind: PromptKind,
    },
    /// Render the shortest path between two locations.
    Path {
        start: String,
        end: String,
        #[arg(long)]
        json: bool,
    },
    /// Render the furthest destination reachable from a location.
    Furthest {
        start: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PromptKind {
    ShortestPath,
    Furthest,
}

fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Prompt { kind } => {
            // Prompts are static and never touch configuration or the fixture.
            let markup = match kind {
                PromptKind::ShortestPath => campus_nav::render::SHORTEST_PATH_PROMPT,
                PromptKind::Furthest => campus_nav::render::FURTHEST_DESTINATION_PROMPT,
            };
            println!("{markup}");
        }
        Commands::Path { start, end, json } => {
            let settings = load_settings(cli.fixture, json)?;
            let backend = load_backend(&settings)?;
            let presenter = Presenter::new(&backend);
            let fragment =
                presenter.render_shortest_path_result(Some(start.as_str()), Some(end.as_str()));
            print_fragment(&fragment, settings.output)?;
        }
        Commands::Furthest { start, json } => {
            let settings = load_settings(cli.fixture, json)?;
            let backend = load_backend(&settings)?;
            let presenter = Presenter::new(&backend);
            let fragment = presenter.render_furthest_destination_result(Some(start.as_str()));
            print_fragment(&fragment, settings.output)?;
        }
    }

    Ok(())
}

fn load_settings(fixture: Option<PathBuf>, json: bool) -> Result<NavSettings> {
    NavSettings::from_env()
        .context("failed to load configuration")?
        .with_overrides(fixture, json)
}

fn load_backend(settings: &NavSettings) -> Result<FixtureBackend> {
    let backend = FixtureBackend::load(&settings.fixture_path)?;
    info!(
        fixture = %settings.fixture_path.display(),
        output = %settings.output,
        "loaded campus fixture"
    );
    Ok(backend)
}

fn print_fragment(fragment: &Fragment, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Html => println!("{fragment}"),
        OutputMode::Json => {
            let encoded =
                serde_json::to_string(fragment).context("failed to encode fragment as JSON")?;
            println!("{encoded}");
        }
    }
    Ok(())
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,campus_nav=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
