//! CLI entry point for the news crawler.
//!
//! Provides subcommands for crawling the Google News search feed into a
//! JSON file consumed by the front-end, and for resizing the link banner.

use anyhow::Result;
use clap::{Parser, Subcommand};
use news_crawler::{
    banner::{BANNER_HEIGHT, BANNER_WIDTH, resize_banner},
    extractor::{DEFAULT_RECORD_LIMIT, extract_records},
    fetch::{BasicClient, DEFAULT_QUERY, fetch_bytes, search_feed_url},
    output::write_records,
    parser::parse_feed,
    sentiment::SentimentLexicon,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "news_crawler")]
#[command(about = "Fetches Korean welfare news into a JSON file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the news search feed and write extracted records as JSON
    Crawl {
        /// Search query for the Google News RSS endpoint
        #[arg(short, long, default_value = DEFAULT_QUERY)]
        query: String,

        /// JSON file to write records to
        #[arg(short, long, default_value = "src/data/news.json")]
        output: String,

        /// Fetch from this URL or local file instead of the search endpoint
        #[arg(short, long)]
        source: Option<String>,

        /// Maximum number of records to keep
        #[arg(short, long, default_value_t = DEFAULT_RECORD_LIMIT)]
        limit: usize,

        /// Optional JSON file with positive/negative sentiment markers
        #[arg(long)]
        lexicon: Option<String>,
    },
    /// Resize an image to the link-banner dimensions
    ResizeBanner {
        /// Path to the source image
        #[arg(value_name = "INPUT")]
        input: String,

        /// Path to write the resized image to
        #[arg(value_name = "OUTPUT")]
        output: String,

        /// Target width in pixels
        #[arg(long, default_value_t = BANNER_WIDTH)]
        width: u32,

        /// Target height in pixels
        #[arg(long, default_value_t = BANNER_HEIGHT)]
        height: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/news_crawler.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("news_crawler.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            query,
            output,
            source,
            limit,
            lexicon,
        } => {
            crawl(&query, source.as_deref(), &output, limit, lexicon.as_deref()).await?;
        }
        Commands::ResizeBanner {
            input,
            output,
            width,
            height,
        } => {
            resize_banner(&input, &output, width, height)?;
        }
    }

    Ok(())
}

/// Runs one crawl: fetch the feed, extract records, overwrite the JSON file.
#[tracing::instrument(skip(lexicon_path))]
async fn crawl(
    query: &str,
    source: Option<&str>,
    output: &str,
    limit: usize,
    lexicon_path: Option<&str>,
) -> Result<()> {
    // Read but unused: reserved for an LLM summarization path that is not
    // implemented in this version.
    let llm_key_present = std::env::var("OPENAI_API_KEY").is_ok();
    debug!(llm_key_present, "LLM summarization unavailable, using feed descriptions");

    let lexicon = match lexicon_path {
        Some(path) => SentimentLexicon::load(path)?,
        None => SentimentLexicon::default(),
    };

    let source = match source {
        Some(s) => s.to_string(),
        None => search_feed_url(query)?.to_string(),
    };
    info!(source, "Fetching news feed");

    let bytes = fetcher(&source).await?;
    let channel = parse_feed(&bytes)?;
    debug!(item_count = channel.items().len(), "Feed parsed");

    let records = extract_records(&channel, &lexicon, limit);
    write_records(output, &records)?;

    info!(count = records.len(), output, "News data updated");
    Ok(())
}

/// Loads feed data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &str) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url)?
    };
    Ok(bytes)
}
