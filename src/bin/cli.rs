//! AdoptMe CLI
//!
//! Runs the render-shim server and exercises the search/detail flows
//! from the terminal.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use adoptme::catalog::{CatalogClient, HttpCatalogClient};
use adoptme::error::{AppError, Result};
use adoptme::models::{Config, Species};
use adoptme::navigation::{ConsoleNavigator, Navigator};
use adoptme::state::{DetailLoader, FailureRecovery, PhaseKind, SearchState};
use adoptme::view::{self, RenderBoundary};

/// AdoptMe - Pet Adoption Search
#[derive(Parser, Debug)]
#[command(name = "adoptme", version, about = "Pet adoption search service")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP listener and render shim
    #[cfg(feature = "server")]
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Search for adoptable animals
    Search {
        /// Free-text location, e.g. "Seattle, WA"
        #[arg(short, long, default_value = "")]
        location: String,

        /// Species: dog, cat, bird, or any
        #[arg(short, long, default_value = "any")]
        species: String,

        /// Breed within the selected species
        #[arg(short, long)]
        breed: Option<String>,
    },

    /// List breed names for a species
    Breeds {
        /// Species: dog, cat, or bird
        species: String,
    },

    /// Show the rendered detail view for one animal
    Show {
        /// Animal identifier
        id: u64,

        /// Walk through the adoption confirmation
        #[arg(long)]
        adopt: bool,
    },

    /// Validate configuration and the render template
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    match cli.command {
        #[cfg(feature = "server")]
        Command::Serve { port } => {
            let mut server_config = config.server.clone();
            if let Some(port) = port {
                server_config.port = port;
            }
            adoptme::server::serve(&server_config).await?;
        }

        Command::Search {
            location,
            species,
            breed,
        } => run_search(&config, &location, &species, breed.as_deref()).await?,

        Command::Breeds { species } => {
            let client = HttpCatalogClient::new(&config.catalog)?;
            let species: Species = species.parse()?;
            for breed in client.list_breeds(species).await? {
                println!("{breed}");
            }
        }

        Command::Show { id, adopt } => run_show(&config, id, adopt).await?,

        Command::Validate => {
            #[cfg(feature = "server")]
            adoptme::server::Template::load(&config.server.template_path, &config.server.marker)?;
            log::info!("configuration OK");
        }
    }

    Ok(())
}

/// One-shot search: species selection, breed fetch, then submit.
async fn run_search(
    config: &Config,
    location: &str,
    species: &str,
    breed: Option<&str>,
) -> Result<()> {
    let species: Species = species.parse()?;
    let client: Arc<dyn CatalogClient> = Arc::new(HttpCatalogClient::new(&config.catalog)?);
    let mut state = SearchState::new(client);

    state.set_location(location);
    state.set_species(species);
    state.await_pending().await;

    if let Some(breed) = breed {
        if !state.set_breed(breed) {
            log::warn!("'{breed}' is not a known {species} breed; searching all breeds");
        }
    }

    state.submit().await?;
    let animals = state.results().unwrap_or_default();
    if animals.is_empty() {
        println!("No Pets Found");
        return Ok(());
    }
    for animal in &animals {
        println!(
            "#{} {} ({} - {}) {}",
            animal.id,
            animal.name,
            animal.species,
            animal.breed_primary,
            animal.location()
        );
    }
    Ok(())
}

/// Load one animal and print its rendered detail view.
async fn run_show(config: &Config, id: u64, adopt: bool) -> Result<()> {
    let client: Arc<dyn CatalogClient> = Arc::new(HttpCatalogClient::new(&config.catalog)?);
    let navigator: Arc<dyn Navigator> = Arc::new(ConsoleNavigator);

    let mut loader = DetailLoader::new(client, Arc::clone(&navigator));
    let mut recovery = FailureRecovery::attach(&loader, Arc::clone(&navigator), &config.recovery);
    let mut phases = loader.subscribe();

    loader.load(id);
    while matches!(
        phases.borrow_and_update().kind,
        PhaseKind::Idle | PhaseKind::Loading
    ) {
        if phases.changed().await.is_err() {
            break;
        }
    }

    match loader.phase().kind {
        PhaseKind::Loaded => {
            recovery.stop();
            let animal = loader
                .detail()
                .ok_or_else(|| AppError::not_found(format!("animal {id}")))?;

            if adopt {
                loader.request_adopt();
            }
            let mut boundary = RenderBoundary::new(Arc::clone(&navigator), &config.recovery);
            let html =
                boundary.render(|| view::detail::render_detail(&animal, loader.is_confirming()));
            println!("{html}");

            if adopt {
                loader.confirm_adopt();
            }
            Ok(())
        }
        _ => {
            // Let the recovery countdown run out and log its redirect.
            tokio::time::sleep(config.recovery.delay() + std::time::Duration::from_millis(100))
                .await;
            match loader.error() {
                Some(e) => Err(AppError::validation(format!(
                    "failed to load animal {id}: {e}"
                ))),
                None => Err(AppError::not_found(format!("animal {id}"))),
            }
        }
    }
}
