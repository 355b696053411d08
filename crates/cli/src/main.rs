use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::Recommender;
use enrichment::{Enrichment, MetadataProvider, TmdbClient};
use server::{RecommendationService, RecommendedMovie};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// ReelMatch - tag-similarity movie recommendations
#[derive(Parser)]
#[command(name = "reelmatch")]
#[command(about = "Recommends movies similar to a title using tag similarity", long_about = None)]
struct Cli {
    /// Path to the JSON Lines catalog file
    #[arg(short, long, default_value = "data/movies.jsonl")]
    catalog: PathBuf,

    /// Path to the prebuilt index artifact
    #[arg(short, long, default_value = "data/index.json")]
    index: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the similarity index from the catalog and save it to disk
    Build,

    /// Recommend movies similar to a title
    Recommend {
        /// Exact title of the query movie
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5")]
        count: usize,

        /// Skip TMDB metadata enrichment
        #[arg(long)]
        no_enrich: bool,
    },

    /// Search for movies by title (case-insensitive substring match)
    Search {
        /// Title fragment to search for
        #[arg(long)]
        title: String,
    },

    /// Run a query throughput benchmark
    Benchmark {
        /// Number of queries to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent queries
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // TMDB_API_KEY may live in a .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build => handle_build(&cli)?,
        Commands::Recommend {
            ref title,
            count,
            no_enrich,
        } => handle_recommend(&cli, title, count, no_enrich).await?,
        Commands::Search { ref title } => handle_search(&cli, title)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&cli, requests, concurrent).await?,
    }

    Ok(())
}

/// Load the prebuilt index artifact when present, otherwise build from the
/// catalog file.
fn load_recommender(cli: &Cli) -> Result<Arc<Recommender>> {
    let start = Instant::now();

    let recommender = if cli.index.exists() {
        println!("Loading index from {}...", cli.index.display());
        Recommender::load(&cli.index).context("Failed to load index artifact")?
    } else {
        println!(
            "No index artifact found, building from {}...",
            cli.catalog.display()
        );
        let catalog =
            catalog::load_from_file(&cli.catalog).context("Failed to load catalog file")?;
        Recommender::build(catalog).context("Failed to build index")?
    };

    println!(
        "{} Index ready in {:?} ({} movies, {} terms)",
        "✓".green(),
        start.elapsed(),
        recommender.catalog().len(),
        recommender.vocabulary_size()
    );
    Ok(Arc::new(recommender))
}

/// Handle the 'build' command
fn handle_build(cli: &Cli) -> Result<()> {
    println!("Building index from {}...", cli.catalog.display());
    let start = Instant::now();

    let catalog = catalog::load_from_file(&cli.catalog).context("Failed to load catalog file")?;
    let recommender = Recommender::build(catalog).context("Failed to build index")?;
    recommender
        .save(&cli.index)
        .context("Failed to save index artifact")?;

    println!(
        "{} Built and saved index to {} in {:?}",
        "✓".green(),
        cli.index.display(),
        start.elapsed()
    );
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(cli: &Cli, title: &str, count: usize, no_enrich: bool) -> Result<()> {
    let recommender = load_recommender(cli)?;

    let mut service = RecommendationService::new(recommender);
    if !no_enrich {
        match std::env::var("TMDB_API_KEY") {
            Ok(api_key) => {
                let client = TmdbClient::new(api_key).context("Failed to build TMDB client")?;
                service = service.with_provider(Arc::new(client) as Arc<dyn MetadataProvider>);
            }
            Err(_) => {
                warn!("TMDB_API_KEY not set, skipping enrichment");
            }
        }
    }

    let results = service.get_recommendations(title, count).await?;
    print_recommendations(title, &results);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(cli: &Cli, title: &str) -> Result<()> {
    let catalog = catalog::load_from_file(&cli.catalog).context("Failed to load catalog file")?;

    let matches = catalog.search(title);
    println!(
        "{}",
        format!("Search results for '{}':", title).bold().blue()
    );
    for (index, movie) in matches.iter().take(20) {
        println!("{:>6}  {} (catalog index {})", movie.id, movie.title, index);
    }
    if matches.is_empty() {
        println!("No matching titles.");
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(cli: &Cli, requests: usize, concurrent: usize) -> Result<()> {
    let recommender = load_recommender(cli)?;

    // Query random valid titles; enrichment is skipped so the numbers
    // reflect the similarity lookup alone.
    let titles: Vec<String> = recommender
        .catalog()
        .iter()
        .map(|m| m.title.clone())
        .collect();
    let service = RecommendationService::new(recommender);

    let semaphore = Arc::new(tokio::sync::Semaphore::new(concurrent));
    let mut handles = vec![];
    for _ in 0..requests {
        let title = titles[rand::random_range(0..titles.len())].clone();
        let service = service.clone();
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let start = Instant::now();
            service.get_recommendations(&title, 5).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Format and print recommendation results
fn print_recommendations(query_title: &str, results: &[RecommendedMovie]) {
    println!(
        "{}",
        format!("Movies similar to '{}':", query_title).bold().blue()
    );

    for (i, result) in results.iter().enumerate() {
        println!(
            "{}. {} - similarity {:.3}",
            (i + 1).to_string().green(),
            result.title.bold(),
            result.score
        );

        match &result.enrichment {
            Enrichment::Fetched(details) => {
                if !details.genres.is_empty() {
                    println!("   Genres: {}", details.genres);
                }
                println!("   Director: {}", details.director);
                if !details.cast.is_empty() {
                    println!("   Cast: {}", details.cast);
                }
                if let Some(poster) = &details.poster_url {
                    println!("   Poster: {}", poster);
                }
                if let Some(link) = &details.watch_link {
                    println!("   Watch: {}", link);
                }
            }
            Enrichment::Unavailable { reason } => {
                println!("   {}", format!("(no metadata: {})", reason).dimmed());
            }
        }
    }
}
