mod config;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::Level;

use property_search::{
    ExtractionProvider, ModelId, PropertyCategory, PropertyType, SearchAgent, SearchCriteria,
    SessionConfig,
};

use config::Config;

/// Find properties and locality price trends in a city.
#[derive(Debug, Parser)]
#[command(name = "propsearch")]
struct Args {
    /// City to search in
    city: String,

    /// Maximum price, in Crores
    #[arg(long, default_value_t = 5.0)]
    max_price: f64,

    /// Property category (Residential or Commercial)
    #[arg(long, default_value = "Residential")]
    category: PropertyCategory,

    /// Property type (Flat or "Individual House")
    #[arg(long = "type", default_value = "Flat")]
    property_type: PropertyType,

    /// Chat model backing the analysis (o3-mini, or gpt-4o as fallback)
    #[arg(long, default_value = "o3-mini")]
    model: ModelId,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let session = SessionConfig::new(
        args.model,
        config.openai_api_key.as_str(),
        config.firecrawl_api_key.as_str(),
    );
    let agent = SearchAgent::new(session)?;

    let criteria = SearchCriteria::new(&args.city, args.max_price)
        .with_category(args.category)
        .with_property_type(args.property_type);

    if let Err(e) = run(&agent, &criteria).await {
        // Generic failure surface; the details stay in the logs.
        tracing::error!(error = %e, "search failed");
        eprintln!("{} {}", "❌ An error occurred:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run<P: ExtractionProvider>(
    agent: &SearchAgent<P>,
    criteria: &SearchCriteria,
) -> property_search::ExtractResult<()> {
    println!("{}", "🔍 Searching for properties...".bright_cyan());
    let digest = agent.find_properties(criteria).await?;

    println!();
    println!("{}", "🏘️ Property Recommendations".bright_green().bold());
    println!("{digest}");

    println!("{}", "📊 Analyzing location trends...".bright_cyan());
    let trends = agent.get_location_trends(&criteria.city).await?;

    println!();
    println!("{}", "📈 Location Trends Analysis".bright_green().bold());
    println!("{trends}");

    Ok(())
}
