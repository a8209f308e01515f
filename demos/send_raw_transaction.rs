//! Broadcast a raw transaction over the node API.
//!
//! Run with `NOW_NODES_API_KEY=... cargo run --example send_raw_transaction`.

use nownodes_client::{Blockchain, Client, ClientOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> nownodes_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(ClientOptions::from_env())?;
    let tx_hex = std::env::args().nth(1).unwrap_or_default();
    let result = client
        .send_raw_transaction(Blockchain::Bsv, &tx_hex, Some("unique-id"))
        .await?;
    println!("send success: {} (id {:?})", result.result, result.id);
    Ok(())
}
