//! Client configuration.

use std::{
    collections::{BTreeMap, BTreeSet},
    env,
    time::Duration,
};

use crate::blockchain::Blockchain;

/// Environment variable read by [`ClientOptions::from_env`] for the API key.
pub const API_KEY_ENV: &str = "NOW_NODES_API_KEY";

/// Environment variable read by [`ClientOptions::from_env`] for the user agent.
pub const USER_AGENT_ENV: &str = "NOW_NODES_USER_AGENT";

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("nownodes-client: v", env!("CARGO_PKG_VERSION"));

/// A public client operation, used to key the per-operation chain allow-lists.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Operation {
    GetAddress,
    GetTransaction,
    SendTransaction,
    SendRawTransaction,
    GetMempoolEntry,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::GetAddress,
        Operation::GetTransaction,
        Operation::SendTransaction,
        Operation::SendRawTransaction,
        Operation::GetMempoolEntry,
    ];
}

/// The chains each operation accepts.
///
/// Owned by a single client; changing one client's sets never affects another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportedChains {
    sets: BTreeMap<Operation, BTreeSet<Blockchain>>,
}

impl SupportedChains {
    /// No chain is supported for any operation.
    pub fn empty() -> Self {
        Self {
            sets: Operation::ALL
                .into_iter()
                .map(|op| (op, BTreeSet::new()))
                .collect(),
        }
    }

    /// Replaces the allow-list of `op`.
    pub fn with(mut self, op: Operation, chains: impl IntoIterator<Item = Blockchain>) -> Self {
        self.sets.insert(op, chains.into_iter().collect());
        self
    }

    /// The allow-list of `op`.
    pub fn chains(&self, op: Operation) -> &BTreeSet<Blockchain> {
        // Every operation is inserted on construction.
        &self.sets[&op]
    }

    pub fn is_supported(&self, op: Operation, chain: Blockchain) -> bool {
        self.chains(op).contains(&chain)
    }
}

impl Default for SupportedChains {
    /// Every Bitcoin-family chain for every operation, plus ETH for the
    /// BlockBook lookups.
    fn default() -> Self {
        let bitcoin = Blockchain::BITCOIN_FAMILY;
        let with_eth = bitcoin.into_iter().chain([Blockchain::Eth]);
        SupportedChains::empty()
            .with(Operation::GetAddress, with_eth.clone())
            .with(Operation::GetTransaction, with_eth)
            .with(Operation::SendTransaction, bitcoin)
            .with(Operation::SendRawTransaction, bitcoin)
            .with(Operation::GetMempoolEntry, bitcoin)
    }
}

/// Tuning for the default HTTP transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpOptions {
    /// Deadline for one whole request.
    pub request_timeout: Duration,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
    pub tcp_keepalive: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    /// Retry and backoff settings. These are carried for callers that wrap
    /// their own transport; the default transport does not retry.
    pub retry_count: u32,
    pub backoff_initial: Duration,
    pub backoff_max: Duration,
    pub backoff_exponent_factor: f64,
    pub backoff_max_jitter: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
            tcp_keepalive: Duration::from_secs(20),
            pool_idle_timeout: Duration::from_secs(20),
            pool_max_idle_per_host: 10,
            retry_count: 2,
            backoff_initial: Duration::from_millis(2),
            backoff_max: Duration::from_millis(10),
            backoff_exponent_factor: 2.0,
            backoff_max_jitter: Duration::from_millis(2),
        }
    }
}

/// Options a [`Client`](crate::Client) is built from.
///
/// Read-only once the client exists.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub(crate) api_key: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) http: HttpOptions,
    pub(crate) supported: SupportedChains,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: HttpOptions::default(),
            supported: SupportedChains::default(),
        }
    }
}

impl ClientOptions {
    /// Defaults overridden by `NOW_NODES_API_KEY` and `NOW_NODES_USER_AGENT`.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(key) = env::var(API_KEY_ENV) {
            options = options.with_api_key(key);
        }
        if let Ok(agent) = env::var(USER_AGENT_ENV) {
            options = options.with_user_agent(agent);
        }
        options
    }

    /// Sets the key sent in the `api-key` header. An empty key is ignored.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        if !api_key.is_empty() {
            self.api_key = Some(api_key);
        }
        self
    }

    /// Overrides the user agent. An empty value is ignored.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if !user_agent.is_empty() {
            self.user_agent = user_agent;
        }
        self
    }

    pub fn with_http_options(mut self, http: HttpOptions) -> Self {
        self.http = http;
        self
    }

    pub fn with_supported_chains(mut self, supported: SupportedChains) -> Self {
        self.supported = supported;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn http_options(&self) -> &HttpOptions {
        &self.http
    }

    pub fn supported_chains(&self) -> &SupportedChains {
        &self.supported
    }
}
