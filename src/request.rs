//! Request dispatch for the BlockBook (GET) and node (JSON-RPC POST) APIs.
//!
//! Every outbound call goes through `Client::dispatch`, and every outcome is
//! classified by [`classify_response`].

use corepc_types::bitcoin::hashes::{Hash, sha256};
use jsonrpc::error::RpcError;
use jsonrpc::serde_json;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::blockchain::Blockchain;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::options::Operation;
use crate::transport::{HttpRequest, HttpResponse};

/// Version segment of every BlockBook path.
pub(crate) const API_VERSION: &str = "v2";

pub(crate) const API_KEY_HEADER: &str = "api-key";

const JSONRPC_VERSION: &str = "2.0";

/// Which upstream API a request targets. Selects the error envelope shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiMode {
    BlockBook,
    Node,
}

/// Body of a node API call.
#[derive(Debug, Serialize)]
pub(crate) struct NodePayload<'a> {
    pub api_key: &'a str,
    pub jsonrpc: &'static str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: Vec<&'a str>,
}

impl<'a> NodePayload<'a> {
    pub fn new(api_key: &'a str, method: &'a str, id: &'a str, params: Vec<&'a str>) -> Self {
        Self {
            api_key,
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Hex encoded sha256 of `data`, used as the default id of a broadcast.
pub(crate) fn hash_id(data: &str) -> String {
    sha256::Hash::hash(data.as_bytes()).to_string()
}

/// Decodes a successful node API body into its `id` and typed `result`.
///
/// A non-null `error` member fails with [`Error::JsonRpc`] even though the
/// HTTP status was 200.
pub(crate) fn decode_node_response<T>(body: &[u8]) -> Result<(String, T)>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response: jsonrpc::Response = serde_json::from_slice(body)?;
    let result = response.result()?;
    let id = match response.id {
        serde_json::Value::String(id) => id,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok((id, result))
}

/// `{"message": "..."}`, sent by the API with a 200 status for some failures.
#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
struct BlockBookErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct NodeErrorBody {
    error: RpcError,
}

/// Turns a raw response into the success body or the matching error.
///
/// A 200 response is a success unless its body is a `{"message": ...}`
/// object. Any other status fails: with [`Error::UnexpectedStatus`] when the
/// body is empty, otherwise with the error carried by the envelope of `mode`.
pub(crate) fn classify_response(mode: ApiMode, response: HttpResponse) -> Result<Vec<u8>> {
    let HttpResponse { status, body } = response;

    if status == 200 {
        if let Ok(MessageBody { message }) = serde_json::from_slice(&body) {
            return Err(Error::Rejected(message));
        }
        return Ok(body);
    }

    if body.is_empty() {
        return Err(Error::UnexpectedStatus(status));
    }

    match mode {
        ApiMode::BlockBook => {
            let parsed: BlockBookErrorBody =
                serde_json::from_slice(&body).map_err(Error::MalformedErrorResponse)?;
            Err(Error::Upstream(parsed.error))
        }
        ApiMode::Node => {
            let parsed: NodeErrorBody =
                serde_json::from_slice(&body).map_err(Error::MalformedErrorResponse)?;
            Err(Error::JsonRpc(jsonrpc::Error::Rpc(parsed.error)))
        }
    }
}

impl Client {
    /// Fails with [`Error::UnsupportedBlockchain`] unless `chain` is in the
    /// allow-list of `op`.
    pub(crate) fn ensure_supported(&self, op: Operation, chain: Blockchain) -> Result<()> {
        if self.options().supported_chains().is_supported(op, chain) {
            Ok(())
        } else {
            Err(Error::UnsupportedBlockchain(chain))
        }
    }

    /// Sends one request and classifies the outcome.
    async fn dispatch(
        &self,
        mode: ApiMode,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let options = self.options();
        let mut headers = vec![("User-Agent", options.user_agent().to_string())];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if let Some(key) = options.api_key() {
            headers.push((API_KEY_HEADER, key.to_string()));
        }

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        let response = self.transport().execute(request).await?;
        tracing::debug!(?mode, status = response.status, "nownodes response");

        classify_response(mode, response)
    }

    /// GETs `https://<blockbook host>/api/v2<route>` after checking that
    /// `chain` supports `op`.
    pub(crate) async fn blockbook_request(
        &self,
        op: Operation,
        chain: Blockchain,
        route: &str,
    ) -> Result<Vec<u8>> {
        self.ensure_supported(op, chain)?;

        let host = chain.blockbook_hostname();
        tracing::debug!(%chain, host, ?op, "blockbook request");
        let url = format!("https://{host}/api/{API_VERSION}{route}");

        self.dispatch(ApiMode::BlockBook, Method::GET, url, None).await
    }

    /// POSTs a JSON-RPC call to `https://<node host>` after checking that
    /// `chain` supports `op`.
    pub(crate) async fn node_request(
        &self,
        op: Operation,
        chain: Blockchain,
        method: &str,
        id: &str,
        params: Vec<&str>,
    ) -> Result<Vec<u8>> {
        self.ensure_supported(op, chain)?;

        let api_key = self.options().api_key().unwrap_or_default();
        let body = serde_json::to_vec(&NodePayload::new(api_key, method, id, params))?;

        let host = chain.hostname();
        tracing::debug!(%chain, host, method, id, "node request");
        let url = format!("https://{host}");

        self.dispatch(ApiMode::Node, Method::POST, url, Some(body)).await
    }
}
