use std::env::{args, var};

use anyhow::{Context, Result};
use pexels_random::{pexels::PexelsClient, API_URL_ENV, TOKEN_ENV};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    pexels_random::logging::init_logging();

    let token = var(TOKEN_ENV).with_context(|| TOKEN_ENV)?;

    let mut builder = PexelsClient::builder(token);

    if let Ok(base_url) = var(API_URL_ENV) {
        builder = builder.base_url(base_url);
    }

    let mut pexels = builder.build()?;

    let query = args().nth(1).unwrap_or_else(|| "lion".to_owned());

    let search = pexels
        .search_photos(&query, 15, 1)
        .await
        .context("search error")?;

    println!(
        "Found {} photos for `{query}`, page {} of size {}",
        search.total_results, search.page, search.per_page
    );

    for photo in &search.photos {
        println!("  #{} {}x{} {}", photo.id, photo.width, photo.height, photo.src.original);
    }

    let curated = pexels.curated_photos(5, 1).await.context("curated error")?;

    println!("Curated:");

    for photo in &curated.photos {
        println!("  #{} {}", photo.id, photo.src.medium);
    }

    match pexels.get_random_photo().await.context("random photo error")? {
        Some(photo) => {
            println!("Random photo: #{} {}", photo.id, photo.src.large);

            let photo = pexels.get_photo(photo.id).await.context("photo lookup error")?;

            println!(
                "Looked it up again: #{} by {}",
                photo.id,
                photo.photographer.as_deref().unwrap_or("unknown")
            );
        }
        None => println!("Random page was past the end of the curated feed"),
    }

    info!(rate_limit = ?pexels.rate_limit(), "Done");

    match pexels.rate_limit_remaining() {
        Some(remaining) => println!("Requests remaining: {remaining}"),
        None => println!("Requests remaining: unknown"),
    }

    Ok(())
}
