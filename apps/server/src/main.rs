use anyhow::Context;
use cinema_backend_runtime::{telemetry, BackendServices};
use cinema_catalog::{CatalogError, CreateActorRequest, CreateMovieRequest, MovieFilter};
use cinema_config::load as load_config;
use cinema_database::{clean_tables, CATALOG_TABLES};
use cinema_gateway::{build_router, GatewayState};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cinema-backend")]
#[command(about = "Cinema catalog backend (serves the HTTP API by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Seed the catalog with a handful of movies and actors
    SeedData,
    /// Print every movie with its cast
    DumpData,
    /// Delete all movies and actors
    ClearData,
}

/// Movies inserted by `seed-data`: name, release date, censorship level, cast
const SEED_MOVIES: &[(&str, &str, &str, &[&str])] = &[
    ("Alien", "1979-05-25", "censored", &["Sigourney Weaver", "Tom Skerritt"]),
    ("Blade Runner", "1982-06-25", "censored", &["Harrison Ford", "Rutger Hauer"]),
    ("Metropolis", "1927-01-10", "not_censored", &["Brigitte Helm"]),
    ("Spirited Away", "2001-07-20", "not_censored", &[]),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing().context("failed to initialise tracing")?;

    let config = load_config().context("failed to load configuration")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(&config, services).await,
        Commands::SeedData => seed_data(&services).await,
        Commands::DumpData => dump_data(&services).await,
        Commands::ClearData => clear_data(&services).await,
    }
}

async fn run_server(
    config: &cinema_config::AppConfig,
    services: BackendServices,
) -> anyhow::Result<()> {
    info!("starting cinema backend");

    let state = GatewayState::new(services.db_pool.clone());
    let app = build_router(state, &config.http.allowed_origins);

    let address = config.http.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(cinema_backend_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("backend shut down");
    Ok(())
}

async fn seed_data(services: &BackendServices) -> anyhow::Result<()> {
    info!("seeding catalog with sample movies");

    let mut created = 0;
    for (name, release_date, censorship_level, cast) in SEED_MOVIES {
        let request = CreateMovieRequest {
            name: name.to_string(),
            release_date: Some((*release_date).into()),
            censorship_level: Some((*censorship_level).into()),
            actors: cast.iter().map(|actor| CreateActorRequest::new(*actor)).collect(),
            actor_ids: vec![],
        };

        match services.movie_service.create(request).await {
            Ok(_) => created += 1,
            Err(CatalogError::NameAlreadyExists(name)) => {
                warn!(%name, "movie already present, skipping");
            }
            Err(error) => {
                return Err(error).with_context(|| format!("failed to seed movie {name}"));
            }
        }
    }

    println!("Catalog seeded: {created} movies created");
    println!("Run 'dump-data' to see the inserted data");
    Ok(())
}

async fn dump_data(services: &BackendServices) -> anyhow::Result<()> {
    let movies = services
        .movie_service
        .find(MovieFilter::default())
        .await
        .context("failed to fetch movies")?;

    println!("=== MOVIES ===");
    if movies.is_empty() {
        println!("No movies found in database");
        return Ok(());
    }

    println!("Found {} movies:", movies.len());
    println!(
        "{:<26} {:<30} {:<12} {:<14} {}",
        "Public ID", "Name", "Released", "Censorship", "Cast"
    );
    println!("{}", "-".repeat(110));

    for movie in movies {
        let cast = movie
            .actors
            .iter()
            .map(|actor| actor.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{:<26} {:<30} {:<12} {:<14} {}",
            movie.public_id,
            movie.name,
            movie.release_date,
            movie.censorship_level,
            if cast.is_empty() { "-" } else { cast.as_str() }
        );
    }

    Ok(())
}

async fn clear_data(services: &BackendServices) -> anyhow::Result<()> {
    info!("clearing catalog tables");

    let removed = clean_tables(&services.db_pool, CATALOG_TABLES)
        .await
        .context("failed to clear catalog tables")?;

    println!("Database cleared: {removed} rows deleted");
    Ok(())
}
