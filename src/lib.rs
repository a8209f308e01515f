//! NOWNodes API client library.
//!
//! This crate provides a Rust client for the NOWNodes BlockBook and node
//! APIs across the Bitcoin-family chains (BCH, BSV, BTC, BTC testnet, BTG,
//! DASH, DOGE, LTC) with partial Ethereum support. Inputs are checked locally
//! before any request is made, and the differing upstream error shapes are
//! normalized into one [`Error`] type.
//!
//! ```no_run
//! use nownodes_client::{Blockchain, Client, ClientOptions};
//!
//! # async fn run() -> nownodes_client::Result<()> {
//! let client = Client::new(ClientOptions::from_env())?;
//! let tx = client
//!     .get_transaction(
//!         Blockchain::Bsv,
//!         "17961a51337369bf64e45e8410a7ce4cfb0c88b5d883d9e8a939dfdd0f7591fd",
//!     )
//!     .await?;
//! println!("{} confirmations", tx.confirmations);
//! # Ok(())
//! # }
//! ```

mod address;
mod blockchain;
mod client;
mod error;
mod mempool;
mod options;
mod request;
mod transaction;
mod transport;

pub use address::AddressInfo;
pub use blockchain::Blockchain;
pub use client::Client;
pub use error::{Error, Result};
pub use mempool::{MempoolEntry, MempoolEntryResult};
pub use options::{
    API_KEY_ENV, ClientOptions, DEFAULT_USER_AGENT, HttpOptions, Operation, SupportedChains,
    USER_AGENT_ENV,
};
pub use transaction::{BroadcastResult, Input, MAX_SEND_TX_HEX_LENGTH, Output, TransactionInfo};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub use jsonrpc;
pub use reqwest::Method;
