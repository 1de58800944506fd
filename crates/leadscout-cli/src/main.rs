mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadscout-cli")]
#[command(about = "Search business listings and enrich them with contact details")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a keyword/location search and print the enriched records
    Search {
        /// What to search for (e.g., "coffee shops")
        #[arg(long)]
        query: String,
        /// Optional place to search in (e.g., "Austin, TX")
        #[arg(long)]
        location: Option<String>,
        /// Maximum number of records (1-60, default 60)
        #[arg(long)]
        max_results: Option<String>,
        /// Places API key; falls back to `GOOGLE_PLACES_API_KEY`
        #[arg(long, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Print `{ "results": [...] }` JSON instead of one line per record
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = leadscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            query,
            location,
            max_results,
            api_key,
            json,
        }) => {
            let request = leadscout_places::SearchRequest {
                api_key: api_key.or_else(|| config.places_api_key.clone()),
                query: Some(query),
                location,
                max_results: max_results.map(serde_json::Value::String),
            };
            search::run_search_command(&config, &request, json).await?;
        }
        None => println!("leadscout-cli: run `leadscout-cli search --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
