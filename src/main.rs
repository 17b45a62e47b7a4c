pub mod ads;
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod names;
pub mod output;

use ads::{AdsClient, PageLimits, RateLimit, fetch_library_bibcodes};
use clap::Parser;
use cli::Cli;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = env_logger::Builder::new()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = Cli::parse();
    let library = cli.library.clone();
    let start_time = Instant::now();

    let summary = run(cli).await?;

    let duration = start_time.elapsed();
    println!("\n--- Summary Report ---");
    println!("Library: {}", library);
    println!("Bibcodes retrieved: {}", summary.bibcodes);
    if summary.written.is_empty() {
        println!("No output requested (use --html and/or --bibtex).");
    }
    for path in &summary.written {
        println!("Wrote {}", path.display());
    }
    println!("Execution time: {:.2?}", duration);

    Ok(())
}

/// Outcome of a run, reported by `main`.
#[derive(Debug, Default)]
struct RunSummary {
    bibcodes: usize,
    /// Output files in the order they were written.
    written: Vec<PathBuf>,
}

/// Fetches the library, then writes the HTML and BibTeX outputs requested.
async fn run(cli: Cli) -> Result<RunSummary> {
    let token = config::resolve_token(cli.token.as_deref(), cli.token_file.as_deref())
        .inspect_err(|e| error!("{}", e))?;
    let client = AdsClient::new(&cli.api_url, &token)?;

    // 1. Bibcodes
    info!("Loading bibcodes from input library: {}", cli.library);
    let limits = PageLimits {
        rows: cli.rows,
        max_pages: cli.max_pages,
    };
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    let library = fetch_library_bibcodes(&client, &cli.library, limits, &pb).await;
    pb.finish_and_clear();
    let library = library.inspect_err(|e| error!("Failed to load library: {}", e))?;
    report_rate_limit("Requests", &library.rate_limit);
    let bibcodes = library.body;

    let mut summary = RunSummary {
        bibcodes: bibcodes.len(),
        written: Vec::new(),
    };
    if bibcodes.is_empty() {
        info!("Library {} holds no bibcodes. Nothing to export.", cli.library);
        return Ok(summary);
    }

    // 2. HTML citations
    if let Some(html_path) = &cli.html {
        info!("Output HTML file: {:?}", html_path);
        let big = client
            .big_query(&bibcodes)
            .await
            .inspect_err(|e| error!("Big query failed: {}", e))?;
        info!("Number of bibcodes in library: {}", big.body.num_found);
        report_rate_limit("Big Requests", &big.rate_limit);
        if big.body.docs.len() != bibcodes.len() {
            warn!(
                "Big query returned {} documents for {} bibcodes",
                big.body.docs.len(),
                bibcodes.len()
            );
        }
        output::write_output(html_path, &html::render_html(&big.body.docs))?;
        summary.written.push(html_path.clone());
    }

    // 3. BibTeX export
    if let Some(bibtex_path) = &cli.bibtex {
        info!("Output BibTeX file: {:?}", bibtex_path);
        let export = client
            .export_bibtex(&bibcodes)
            .await
            .inspect_err(|e| error!("BibTeX export failed: {}", e))?;
        if let Some(msg) = &export.body.msg {
            info!("{}", msg);
        }
        report_rate_limit("Export Requests", &export.rate_limit);
        output::write_output(bibtex_path, &export.body.export)?;
        summary.written.push(bibtex_path.clone());
    }

    Ok(summary)
}

fn report_rate_limit(label: &str, rate_limit: &RateLimit) {
    let show = |value: Option<u64>| value.map_or_else(|| "unknown".to_string(), |v| v.to_string());
    info!("Remaining {}: {}", label, show(rate_limit.remaining));
    info!("Allowed {}: {}", label, show(rate_limit.limit));
}
