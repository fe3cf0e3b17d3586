//! Debug script to compare scraped detail with the extraction backend
//!
//! Run with: RUST_LOG=vidtv_core=debug cargo run --example debug_detail -p vidtv-core -- <viewkey>

use tracing_subscriber::EnvFilter;
use vidtv_core::{ClientConfig, VideoRepository, VidtvClient, build_detail_url};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(video_id) = std::env::args().nth(1) else {
        eprintln!("usage: debug_detail <viewkey>");
        return Ok(());
    };

    let config = ClientConfig::from_env();
    let repo = VideoRepository::with_config(config.clone())?;

    println!("Scraping detail page for {}...\n", video_id);
    match repo.get_video_detail(&video_id).await {
        Some(detail) => {
            println!("✓ {}", detail.title);
            for quality in &detail.qualities {
                println!("   [{}] {}", quality.label, quality.url);
            }
        }
        None => {
            println!("✗ No playable source found");
            let page_url = build_detail_url(&config.site_url, &video_id);
            let html = VidtvClient::with_config(&config)?.fetch(&page_url).await?;
            std::fs::write("debug_detail.html", &html)?;
            println!("   Saved {} bytes to debug_detail.html", html.len());
        }
    }

    let page_url = build_detail_url(&config.site_url, &video_id);
    println!("\nScanning {} for media endpoints...", page_url);
    for endpoint in repo.scraper().find_media_endpoints(&page_url).await {
        println!("   {}", endpoint);
    }

    println!("\nAsking backend {}...", config.backend_url);
    match repo.get_video_info_from_api(&video_id).await {
        Ok(info) => match info.to_video_detail() {
            Some(detail) => {
                println!("✓ {} formats, primary: {}", detail.qualities.len(), detail.video_url);
                for quality in &detail.qualities {
                    println!(
                        "   [{}] {} ({})",
                        quality.label,
                        quality.url,
                        quality.protocol.as_deref().unwrap_or("?")
                    );
                }
            }
            None => println!(
                "✗ Backend returned no formats: {}",
                info.error.as_deref().unwrap_or("no error given")
            ),
        },
        Err(e) => println!("✗ {} ({})", e.user_message(), e),
    }

    Ok(())
}
