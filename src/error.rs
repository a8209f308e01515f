//! Error types for the NOWNodes client.

use std::{error, fmt};

use jsonrpc::serde_json;

use crate::blockchain::Blockchain;

/// Result type alias for the NOWNodes client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the NOWNodes client.
#[derive(Debug)]
pub enum Error {
    /// Address is missing or not plausible for the chain.
    InvalidAddress,

    /// Transaction id is missing or has the wrong length.
    InvalidTxId,

    /// Transaction hex is missing or does not decode.
    InvalidTxHex,

    /// The chain is not in the allow-list of the requested operation.
    UnsupportedBlockchain(Blockchain),

    /// The chain name is not recognized.
    UnknownBlockchain(String),

    /// Connection, timeout or DNS failure from the HTTP stack.
    Transport(Box<dyn error::Error + Send + Sync>),

    /// Non-200 status with an empty body.
    UnexpectedStatus(u16),

    /// Non-200 BlockBook response carrying `{"error": "..."}`.
    Upstream(String),

    /// Error reported in a 200 response as `{"message": "..."}`.
    Rejected(String),

    /// JSON-RPC error from the node API.
    JsonRpc(jsonrpc::Error),

    /// The error body of a failed request could not be parsed.
    MalformedErrorResponse(serde_json::Error),

    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidAddress => write!(f, "missing or invalid address"),
            Error::InvalidTxId => write!(f, "missing or invalid tx id"),
            Error::InvalidTxHex => write!(f, "missing or invalid tx hex"),
            Error::UnsupportedBlockchain(chain) => {
                write!(f, "unsupported blockchain for this method: {chain}")
            }
            Error::UnknownBlockchain(name) => write!(f, "unknown blockchain: {name}"),
            Error::Transport(e) => write!(f, "transport error: {e}"),
            Error::UnexpectedStatus(code) => {
                write!(f, "status code: {code} does not match 200")
            }
            Error::Upstream(msg) => write!(f, "upstream error: {msg}"),
            Error::Rejected(msg) => write!(f, "request rejected: {msg}"),
            Error::JsonRpc(jsonrpc::Error::Rpc(e)) => {
                write!(f, "code [{}] error [{}]", e.code, e.message)
            }
            Error::JsonRpc(e) => write!(f, "JSON-RPC error: {e}"),
            Error::MalformedErrorResponse(e) => {
                write!(f, "failed to unmarshal error response: {e}")
            }
            Error::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e.as_ref()),
            Error::JsonRpc(e) => Some(e),
            Error::MalformedErrorResponse(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

// Conversions from other error types
impl From<jsonrpc::Error> for Error {
    fn from(e: jsonrpc::Error) -> Self {
        Error::JsonRpc(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(Box::new(e))
    }
}
