//! Fetch the mempool entry of an unconfirmed BCH transaction.
//!
//! Run with `NOW_NODES_API_KEY=... cargo run --example get_mempool_entry`.

use nownodes_client::{Blockchain, Client, ClientOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> nownodes_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(ClientOptions::from_env())?;
    let entry = client
        .get_mempool_entry(
            Blockchain::Bch,
            "827325a93582ef70e945db95e87d7aca96a325b63aa5d8f8cebc8c45bd71dd01",
            Some("unique-id"),
        )
        .await?;
    println!("found tx in mempool, time: {}", entry.result.time);
    Ok(())
}
