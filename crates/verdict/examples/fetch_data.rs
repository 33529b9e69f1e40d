//! Fetch several records concurrently and merge the outcomes.
//!
//! Run with: `cargo run --example fetch_data`

use anyhow::anyhow;
use verdict::{process_in_parallel, try_catch_async_with, Logging, Outcome};

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: String,
}

/// A stand-in for a real network call: odd ids fail.
async fn fetch_user(id: u32) -> Result<User, anyhow::Error> {
    if id % 2 == 1 {
        return Err(anyhow!("503: user service unavailable for user {id}"));
    }
    Ok(User {
        id,
        name: format!("user-{id}"),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().init();

    let ops = (1..=6).map(|id| {
        try_catch_async_with(
            move || fetch_user(id),
            |caught| caught.to_string(),
            Logging::Tracing,
        )
    });

    let merged: Outcome<Vec<User>, Vec<Option<String>>> = process_in_parallel(ops).await;

    if merged.is_success() {
        for user in merged.success_payload().unwrap_or_default() {
            println!("fetched {} ({})", user.name, user.id);
        }
        return;
    }

    // every position is preserved: successes show up as None placeholders
    for (position, failure) in merged
        .exception_payload()
        .unwrap_or_default()
        .iter()
        .enumerate()
    {
        match failure {
            Some(reason) => eprintln!("request {position} failed: {reason}"),
            None => eprintln!("request {position} succeeded"),
        }
    }
}
