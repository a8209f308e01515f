//! Broadcast a raw transaction given as the first argument.
//!
//! Run with `NOW_NODES_API_KEY=... cargo run --example send_transaction`.

use nownodes_client::{Blockchain, Client, ClientOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> nownodes_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(ClientOptions::from_env())?;
    let tx_hex = std::env::args().nth(1).unwrap_or_default();
    let result = client.send_transaction(Blockchain::Bsv, &tx_hex).await?;
    println!("send success: {}", result.result);
    Ok(())
}
