use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use store::{MovieDraft, MovieId, MovieRecord, MovieStore, StoreError};

/// ReelStore - in-memory movie catalog
#[derive(Parser)]
#[command(name = "reel-store")]
#[command(about = "Query and edit an in-memory movie catalog", long_about = None)]
struct Cli {
    /// Path to the JSON seed file
    #[arg(short, long, default_value = "data/movies.json")]
    seed_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in stored order
    List,

    /// List movies with an exact genre match
    Genre {
        /// Genre to match (case-sensitive, exact)
        genre: String,
    },

    /// List every movie without subtitle/thumb fields
    Summaries,

    /// List movies sorted ascending by title
    ByTitle,

    /// List movies sorted ascending by rating
    ByRating,

    /// Show the 3 highest-rated movies
    Top,

    /// Show the 2 highest-rated movies followed by the 2 lowest-rated
    TopBottom,

    /// Add a movie and show the stamped record
    Add {
        /// Movie title
        #[arg(long)]
        title: Option<String>,

        /// Movie genre
        #[arg(long)]
        genre: Option<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Image reference
        #[arg(long)]
        thumb: Option<String>,
    },

    /// Delete a movie by id
    Delete {
        /// Movie id
        id: MovieId,
    },

    /// Look up a movie by id
    Find {
        /// Movie id
        id: MovieId,
    },

    /// Overwrite a movie's title
    EditTitle {
        /// Movie id
        id: MovieId,

        /// New title
        title: String,
    },
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

    // Load the seed and build the store
    let start = Instant::now();
    let mut store = seed_loader::load_store(&cli.seed_file)
        .with_context(|| format!("Failed to load seed file {}", cli.seed_file.display()))?;
    println!(
        "{} Loaded {} movies from {} in {:?}",
        "✓".green(),
        store.len(),
        cli.seed_file.display(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => print_movies("Movies:", store.all()),
        Commands::Genre { genre } => handle_genre(&store, &genre),
        Commands::Summaries => print_movies("Summaries:", &store.summaries()),
        Commands::ByTitle => print_movies("Movies by title:", store.sorted_by_title()),
        Commands::ByRating => print_movies("Movies by rating:", store.sorted_by_rating()),
        Commands::Top => print_movies("Top rated:", store.top_rated()),
        Commands::TopBottom => {
            print_movies("Top 2 and bottom 2:", &store.top_and_bottom_by_rating())
        }
        Commands::Add {
            title,
            genre,
            description,
            thumb,
        } => handle_add(&mut store, title, genre, description, thumb)?,
        Commands::Delete { id } => handle_delete(&mut store, id),
        Commands::Find { id } => handle_find(&store, id)?,
        Commands::EditTitle { id, title } => handle_edit_title(&mut store, id, &title)?,
    }

    Ok(())
}

/// Handle the 'genre' command
fn handle_genre(store: &MovieStore, genre: &str) {
    let matches = store.by_genre(genre);
    if matches.is_empty() {
        println!("No movies in genre {}", genre.bold());
        return;
    }

    print!("{}", format!("Movies in {}:\n", genre).bold().blue());
    for movie in matches {
        print_movie_line(movie);
    }
}

/// Handle the 'add' command
fn handle_add(
    store: &mut MovieStore,
    title: Option<String>,
    genre: Option<String>,
    description: Option<String>,
    thumb: Option<String>,
) -> Result<()> {
    let draft = MovieDraft {
        title,
        genre,
        description,
        thumb,
        ..MovieDraft::default()
    };

    let record = store.add(draft);
    println!("{} Added movie {}", "✓".green(), record.id);
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Handle the 'delete' command
fn handle_delete(store: &mut MovieStore, id: MovieId) {
    match store.delete(id) {
        Ok(()) => println!(
            "{} Deleted movie {} ({} left)",
            "✓".green(),
            id,
            store.len()
        ),
        Err(StoreError::NotFound { id }) => print_not_found(id),
    }
}

/// Handle the 'find' command
fn handle_find(store: &MovieStore, id: MovieId) -> Result<()> {
    match store.find(id) {
        Ok(record) => println!("{}", serde_json::to_string_pretty(record)?),
        Err(StoreError::NotFound { id }) => print_not_found(id),
    }
    Ok(())
}

/// Handle the 'edit-title' command
fn handle_edit_title(store: &mut MovieStore, id: MovieId, title: &str) -> Result<()> {
    match store.edit_title(id, title) {
        Ok(()) => {
            println!("{} Renamed movie {}", "✓".green(), id);
            handle_find(store, id)?;
        }
        Err(StoreError::NotFound { id }) => print_not_found(id),
    }
    Ok(())
}

/// Helper to print a header plus one line per movie
fn print_movies(header: &str, movies: &[MovieRecord]) {
    print!("{}", format!("{header}\n").bold().blue());
    if movies.is_empty() {
        println!("  (empty)");
        return;
    }
    for movie in movies {
        print_movie_line(movie);
    }
}

fn print_movie_line(movie: &MovieRecord) {
    let title = movie.title.as_deref().unwrap_or("<untitled>");
    let genre = movie.genre.as_deref().unwrap_or("-");
    println!(
        "{} {} [{}] {:.1}",
        format!("{:>4}.", movie.id).green(),
        title,
        genre,
        movie.rating
    );
}

/// "Not found" is never fatal: report it and move on.
fn print_not_found(id: MovieId) {
    println!("{} No movie found with id {}", "✗".red(), id);
}
