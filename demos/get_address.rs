//! Look up an address on BSV.
//!
//! Run with `NOW_NODES_API_KEY=... cargo run --example get_address`.

use nownodes_client::{Blockchain, Client, ClientOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> nownodes_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new(ClientOptions::from_env())?;
    let info = client
        .get_address(Blockchain::Bsv, "1GenocdBC1NSHLMbk61fqJXqTdXjevCxCL")
        .await?;
    println!("found address: {} in {} txs", info.address, info.txs);
    Ok(())
}
