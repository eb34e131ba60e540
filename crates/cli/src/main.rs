use anyhow::{Context, Result};
use catalog::{Catalog, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{EngineSnapshot, RecommendationService};
use pipeline::{BrowseCriteria, FilterPipeline};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

mod session;
use session::Favorites;

/// Neon Cinema - genre-similarity movie recommender
#[derive(Parser)]
#[command(name = "neon-cinema")]
#[command(about = "Movie recommendations from shared genre tags", long_about = None)]
struct Cli {
    /// Path to the movies CSV dataset
    #[arg(short, long, default_value = "data/movies.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a seed title
    Recommend {
        /// Seed movie title (exact match; first row wins on duplicates)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "6")]
        limit: usize,
    },

    /// Browse the catalog with attribute filters
    Browse {
        /// Case-insensitive substring match on titles
        #[arg(long)]
        search: Option<String>,

        /// Genre token (substring match against the genres column)
        #[arg(long)]
        genre: Option<String>,

        /// Minimum runtime in minutes, inclusive
        #[arg(long)]
        min_runtime: Option<u32>,

        /// Maximum runtime in minutes, inclusive
        #[arg(long)]
        max_runtime: Option<u32>,

        /// Streaming service; repeat the flag to match any of several
        #[arg(long = "service")]
        services: Vec<String>,
    },

    /// List the distinct genre tokens in the catalog
    Genres,

    /// Manage the favorites list
    Favorites {
        /// Where the favorites are stored between runs
        #[arg(long, default_value = "favorites.json")]
        file: PathBuf,

        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Add a movie to the favorites
    Add {
        #[arg(long)]
        title: String,
    },
    /// Remove a movie from the favorites
    Remove {
        #[arg(long)]
        title: String,
    },
    /// Show all favorites
    List,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load(&cli.data)
        .with_context(|| format!("failed to load movie catalog from {}", cli.data.display()))?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend { title, limit } => handle_recommend(catalog, &title, limit)?,
        Commands::Browse {
            search,
            genre,
            min_runtime,
            max_runtime,
            services,
        } => {
            let criteria = BrowseCriteria {
                text_search: search,
                genre,
                runtime_range: runtime_range(min_runtime, max_runtime),
                services,
            };
            handle_browse(&catalog, &criteria)?;
        }
        Commands::Genres => handle_genres(&catalog),
        Commands::Favorites { file, action } => handle_favorites(&catalog, &file, action)?,
    }

    Ok(())
}

/// Fold the two optional CLI bounds into the engine's inclusive range
fn runtime_range(min: Option<u32>, max: Option<u32>) -> Option<(u32, u32)> {
    match (min, max) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(0), max.unwrap_or(u32::MAX))),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(catalog: Catalog, title: &str, limit: usize) -> Result<()> {
    // The one-time startup cost: vocabulary + full similarity matrix
    let start = Instant::now();
    let snapshot = Arc::new(EngineSnapshot::build(catalog)?);
    println!(
        "{} Built similarity index in {:?}",
        "✓".green(),
        start.elapsed()
    );

    let service = RecommendationService::new(snapshot);
    let recommendations = service.recommend(title, limit);

    if recommendations.is_empty() {
        // Unknown title or empty ranking: an ordinary no-results state
        println!("{}", "No recommendations found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Top {} movies similar to '{}':", recommendations.len(), title)
            .bold()
            .blue()
    );
    for (rank, movie) in recommendations.iter().enumerate() {
        print_movie_card(rank + 1, movie);
    }
    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(catalog: &Catalog, criteria: &BrowseCriteria) -> Result<()> {
    let subset = FilterPipeline::from_criteria(criteria)
        .apply(catalog.movies().to_vec())
        .context("failed to apply browse filters")?;

    if subset.is_empty() {
        println!("{}", "No movies match the given filters".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} of {} movies match:", subset.len(), catalog.len())
            .bold()
            .blue()
    );
    for movie in &subset {
        let services = if movie.services.is_empty() {
            "N/A".to_string()
        } else {
            movie.services.join(", ")
        };
        println!(
            "  {} [{}] ⭐ {:.1} | {} min | {}",
            movie.title.bold(),
            movie.genres,
            movie.rating,
            movie.runtime,
            services
        );
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog) {
    let (min_runtime, max_runtime) = catalog.runtime_bounds();
    println!("{}", "Genres in the catalog:".bold().blue());
    for genre in catalog.genre_tokens() {
        println!("  - {genre}");
    }
    println!(
        "Runtimes span {min_runtime}-{max_runtime} min; services: {}",
        catalog.service_names().join(", ")
    );
}

/// Handle the 'favorites' command
fn handle_favorites(catalog: &Catalog, file: &Path, action: FavoritesAction) -> Result<()> {
    let mut favorites = Favorites::load(file)?;

    match action {
        FavoritesAction::Add { title } => {
            if catalog.position_of_title(&title).is_none() {
                println!("{}", format!("'{title}' is not in the catalog").yellow());
                return Ok(());
            }
            if favorites.add(&title) {
                favorites.save(file)?;
                println!("{} Added '{title}' to favorites", "✓".green());
            } else {
                println!("'{title}' is already a favorite");
            }
        }
        FavoritesAction::Remove { title } => {
            if favorites.remove(&title) {
                favorites.save(file)?;
                println!("{} Removed '{title}' from favorites", "✓".green());
            } else {
                println!("'{title}' was not a favorite");
            }
        }
        FavoritesAction::List => {
            println!("{}", "My Favorites".bold().red());
            if favorites.is_empty() {
                println!("  -");
            } else {
                for title in favorites.iter() {
                    println!("  - {title}");
                }
            }
        }
    }
    Ok(())
}

/// Print one ranked recommendation with its display attributes
fn print_movie_card(rank: usize, movie: &Movie) {
    let services = if movie.services.is_empty() {
        "N/A".to_string()
    } else {
        movie.services.join(", ")
    };
    println!(
        "{}. {} [{}]",
        rank.to_string().green(),
        movie.title.bold(),
        movie.genres.italic()
    );
    println!(
        "   ⭐ {:.1} | {} min | Streaming: {}",
        movie.rating, movie.runtime, services
    );
    if !movie.imdb_url.is_empty() || !movie.poster_url.is_empty() {
        println!("   {} | {}", movie.imdb_url, movie.poster_url);
    }
}
