//! Mempool queries over the node API.

use serde::{Deserialize, Serialize};

use crate::blockchain::Blockchain;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::options::Operation;
use crate::request::decode_node_response;

pub(crate) const NODE_METHOD_GET_MEMPOOL_ENTRY: &str = "getmempoolentry";

/// Mempool entry of an unconfirmed transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MempoolEntry {
    pub depends: Vec<String>,
    pub fee: f64,
    pub height: u64,
    #[serde(rename = "modifiedfee")]
    pub modified_fee: f64,
    pub size: u64,
    pub time: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MempoolEntryResult {
    /// Correlation id echoed by the node.
    pub id: String,
    pub result: MempoolEntry,
}

impl Client {
    /// Get the mempool entry of `tx_id`.
    ///
    /// Without an `id` (or with an empty one) the transaction id itself is
    /// used as the request id.
    pub async fn get_mempool_entry(
        &self,
        chain: Blockchain,
        tx_id: &str,
        id: Option<&str>,
    ) -> Result<MempoolEntryResult> {
        if !chain.validate_tx_id(tx_id) {
            return Err(Error::InvalidTxId);
        }

        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => tx_id,
        };

        let body = self
            .node_request(
                Operation::GetMempoolEntry,
                chain,
                NODE_METHOD_GET_MEMPOOL_ENTRY,
                id,
                vec![tx_id],
            )
            .await?;
        let (id, result) = decode_node_response(&body)?;
        Ok(MempoolEntryResult { id, result })
    }
}
