//! Debug script to inspect listing page parsing
//!
//! Run with: RUST_LOG=vidtv_core=debug cargo run --example debug_listing -p vidtv-core -- [page]

use tracing_subscriber::EnvFilter;
use vidtv_core::{ClientConfig, VideoScraper, VidtvClient, build_listing_url};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let page: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    let config = ClientConfig::from_env();
    let scraper = VideoScraper::with_config(config.clone())?;

    println!("Fetching listing page {}...\n", page);

    match scraper.try_get_videos(page).await {
        Ok(videos) if !videos.is_empty() => {
            println!("Found {} videos:\n", videos.len());
            for (i, video) in videos.iter().enumerate() {
                println!("{}. {}", i + 1, video.title);
                println!("   ID: {}", video.id);
                println!("   Duration: {}  Views: {}", video.duration, video.view_count);
                println!("   Thumbnail: {}", video.thumbnail_url);
                println!();
            }
        }
        Ok(_) => {
            println!("Page fetched but no items matched.");
            dump_html(&config, page).await?;
        }
        Err(e) => println!("✗ Listing fetch failed: {}", e),
    }

    Ok(())
}

/// Saves the raw page so selectors can be checked against it
async fn dump_html(config: &ClientConfig, page: u32) -> Result<(), Box<dyn std::error::Error>> {
    let client = VidtvClient::with_config(config)?;
    let html = client.fetch(&build_listing_url(&config.site_url, page)).await?;

    std::fs::write("debug_listing.html", &html)?;
    println!("HTML saved to debug_listing.html");

    if let Some(start) = html.find("data-video-vkey") {
        let snippet: String = html[start..].chars().take(3000).collect();
        println!("\n=== HTML snippet around first item ===\n");
        println!("{}", snippet);
    }

    Ok(())
}
