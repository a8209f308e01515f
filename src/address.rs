//! Address lookups.

use jsonrpc::serde_json;
use serde::{Deserialize, Serialize};

use crate::blockchain::Blockchain;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::options::Operation;

/// Address information returned by BlockBook.
///
/// Paging fields are absent for addresses without transactions, and Ethereum
/// responses carry no received/sent totals; missing fields keep their default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressInfo {
    pub address: String,
    pub balance: String,
    pub items_on_page: u64,
    pub page: u64,
    pub total_pages: u64,
    pub total_received: String,
    pub total_sent: String,
    #[serde(rename = "txids", skip_serializing_if = "Vec::is_empty")]
    pub tx_ids: Vec<String>,
    pub txs: u64,
    pub unconfirmed_balance: String,
    pub unconfirmed_txs: u64,
}

impl Client {
    /// Get address information.
    pub async fn get_address(&self, chain: Blockchain, address: &str) -> Result<AddressInfo> {
        if !chain.validate_address(address) {
            return Err(Error::InvalidAddress);
        }

        let route = format!("/address/{address}");
        let body = self
            .blockbook_request(Operation::GetAddress, chain, &route)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
