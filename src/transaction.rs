//! Transaction lookups and broadcasts.

use jsonrpc::serde_json;
use serde::{Deserialize, Serialize};

use crate::blockchain::Blockchain;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::options::Operation;
use crate::request::{decode_node_response, hash_id};

/// Longest transaction hex sent through the BlockBook `sendtx` path. Anything
/// longer is broadcast with `sendrawtransaction` over the node API.
pub const MAX_SEND_TX_HEX_LENGTH: usize = 2000;

pub(crate) const NODE_METHOD_SEND_RAW_TX: &str = "sendrawtransaction";

/// Transaction information returned by BlockBook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionInfo {
    pub block_hash: String,
    pub block_height: i64,
    pub block_time: i64,
    pub confirmations: u64,
    pub fees: String,
    pub hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_time: Option<u32>,
    #[serde(rename = "txid")]
    pub tx_id: String,
    pub value: String,
    pub value_in: String,
    pub version: i32,
    pub vin: Vec<Input>,
    pub vout: Vec<Output>,
}

/// Transaction input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Input {
    pub addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    pub is_address: bool,
    pub n: u32,
    pub sequence: u32,
    #[serde(rename = "txid", skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub vout: u32,
}

/// Transaction output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Output {
    pub addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    pub is_address: bool,
    pub n: u32,
    pub spent: bool,
    pub value: String,
}

/// Outcome of a broadcast.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResult {
    /// Correlation id; only set for node API broadcasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the broadcast transaction.
    pub result: String,
}

impl Client {
    /// Get transaction information.
    pub async fn get_transaction(&self, chain: Blockchain, tx_id: &str) -> Result<TransactionInfo> {
        if !chain.validate_tx_id(tx_id) {
            return Err(Error::InvalidTxId);
        }

        let route = format!("/tx/{tx_id}");
        let body = self
            .blockbook_request(Operation::GetTransaction, chain, &route)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Broadcast a transaction through BlockBook.
    ///
    /// Hex longer than [`MAX_SEND_TX_HEX_LENGTH`] does not fit in a path and
    /// is sent with [`send_raw_transaction`](Self::send_raw_transaction)
    /// instead, using the default id. That fallback also requires `chain` to
    /// support [`Operation::SendRawTransaction`].
    pub async fn send_transaction(&self, chain: Blockchain, tx_hex: &str) -> Result<BroadcastResult> {
        if !chain.validate_tx_hex(tx_hex) {
            return Err(Error::InvalidTxHex);
        }

        if tx_hex.len() > MAX_SEND_TX_HEX_LENGTH {
            self.ensure_supported(Operation::SendTransaction, chain)?;
            tracing::debug!(%chain, len = tx_hex.len(), "tx hex too long for sendtx, using node API");
            return self.send_raw_transaction(chain, tx_hex, None).await;
        }

        let route = format!("/sendtx/{tx_hex}");
        let body = self
            .blockbook_request(Operation::SendTransaction, chain, &route)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Broadcast a transaction with the node API `sendrawtransaction` call.
    ///
    /// Without an `id` (or with an empty one) the sha256 of `tx_hex` is used,
    /// so repeated sends of the same transaction share an id.
    pub async fn send_raw_transaction(
        &self,
        chain: Blockchain,
        tx_hex: &str,
        id: Option<&str>,
    ) -> Result<BroadcastResult> {
        if !chain.validate_tx_hex(tx_hex) {
            return Err(Error::InvalidTxHex);
        }

        let id = match id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => hash_id(tx_hex),
        };

        let body = self
            .node_request(
                Operation::SendRawTransaction,
                chain,
                NODE_METHOD_SEND_RAW_TX,
                &id,
                vec![tx_hex],
            )
            .await?;
        let (id, result) = decode_node_response(&body)?;
        Ok(BroadcastResult {
            id: Some(id),
            result,
        })
    }
}
