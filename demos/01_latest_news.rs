use std::time::Duration;

use guardian_feed::{FeedClientBuilder, FeedHandle, NewsBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    guardian_feed::init_tracing_for_tests();

    let term = std::env::args().nth(1).unwrap_or_else(|| "apple".to_string());
    let client = FeedClientBuilder::from_env()?.build()?;

    let handle = FeedHandle::new(NewsBuilder::new(&client).term(&term));
    let mut rx = handle.subscribe();

    // A second trigger supersedes the first; only its result is shown.
    handle.refresh();
    let generation = handle.refresh();

    let snap = tokio::time::timeout(
        Duration::from_secs(30),
        rx.wait_for(|s| s.generation == generation),
    )
    .await??
    .clone();

    if snap.is_empty() {
        println!("No results for '{term}' (or no connectivity).");
        return Ok(());
    }

    println!("--- Latest news for '{term}' ---");
    for n in snap.news.iter() {
        println!("{:>2}. [{}] {}", n.sequence_number, n.genre, n.headline);
        println!("    {} | {}", n.author, n.date);
        println!("    {}", n.url);
    }
    Ok(())
}
