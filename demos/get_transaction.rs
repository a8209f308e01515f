//! Look up a transaction on BSV.
//!
//! Run with `NOW_NODES_API_KEY=... cargo run --example get_transaction`.

use nownodes_client::{Blockchain, Client, ClientOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> nownodes_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(ClientOptions::from_env())?;
    let info = client
        .get_transaction(
            Blockchain::Bsv,
            "17961a51337369bf64e45e8410a7ce4cfb0c88b5d883d9e8a939dfdd0f7591fd",
        )
        .await?;
    println!("found tx: {} in block {}", info.tx_id, info.block_hash);
    Ok(())
}
