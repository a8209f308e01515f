//! Supported networks and their request/validation rules.

use std::{fmt, str::FromStr};

use corepc_types::bitcoin::hex::FromHex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Length of a Bitcoin-family transaction id in hex characters.
const BITCOIN_TXID_LENGTH: usize = 64;

/// Length of an Ethereum transaction hash including the `0x` prefix.
const ETHEREUM_TXID_LENGTH: usize = 66;

/// Prefix that cashaddr-formatted BCH addresses may carry.
const BITCOINCASH_PREFIX: &str = "bitcoincash:";

/// A network reachable through NOWNodes.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Blockchain {
    #[serde(rename = "bch")]
    Bch,
    #[serde(rename = "bsv")]
    Bsv,
    #[serde(rename = "btc")]
    Btc,
    #[serde(rename = "btc-testnet")]
    BtcTestnet,
    #[serde(rename = "btg")]
    Btg,
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "doge")]
    Doge,
    #[serde(rename = "ltc")]
    Ltc,
    #[serde(rename = "eth")]
    Eth,
}

/// Accepted address lengths, measured after an optional prefix is stripped.
#[derive(Clone, Copy, Debug)]
struct AddressRule {
    prefix: Option<&'static str>,
    min: usize,
    max: usize,
}

#[derive(Clone, Copy, Debug)]
enum TxHexRule {
    /// Must be non-empty and decode as hex.
    Hex,
    /// Any non-empty run of ASCII letters and digits.
    NonEmpty,
}

/// Per-chain table entry.
#[derive(Clone, Copy, Debug)]
struct ChainRules {
    name: &'static str,
    node_host: &'static str,
    blockbook_host: &'static str,
    address: AddressRule,
    txid_length: usize,
    tx_hex: TxHexRule,
}

const LEGACY_ADDRESS: AddressRule = AddressRule {
    prefix: None,
    min: 26,
    max: 35,
};

// bech32 and taproot addresses run up to 62 characters.
const SEGWIT_ADDRESS: AddressRule = AddressRule {
    prefix: None,
    min: 26,
    max: 62,
};

const fn bitcoin_family(name: &'static str, node_host: &'static str, address: AddressRule) -> ChainRules {
    ChainRules {
        name,
        node_host,
        blockbook_host: node_host,
        address,
        txid_length: BITCOIN_TXID_LENGTH,
        tx_hex: TxHexRule::Hex,
    }
}

static BCH: ChainRules = bitcoin_family(
    "bch",
    "bch.nownodes.io",
    AddressRule {
        prefix: Some(BITCOINCASH_PREFIX),
        min: 26,
        max: 42,
    },
);
static BSV: ChainRules = bitcoin_family("bsv", "bsv.nownodes.io", LEGACY_ADDRESS);
static BTC: ChainRules = bitcoin_family("btc", "btc.nownodes.io", SEGWIT_ADDRESS);
static BTC_TESTNET: ChainRules =
    bitcoin_family("btc-testnet", "btc-testnet.nownodes.io", SEGWIT_ADDRESS);
static BTG: ChainRules = bitcoin_family("btg", "btg.nownodes.io", LEGACY_ADDRESS);
static DASH: ChainRules = bitcoin_family("dash", "dash.nownodes.io", LEGACY_ADDRESS);
static DOGE: ChainRules = bitcoin_family("doge", "doge.nownodes.io", LEGACY_ADDRESS);
static LTC: ChainRules = bitcoin_family("ltc", "ltc.nownodes.io", SEGWIT_ADDRESS);
static ETH: ChainRules = ChainRules {
    name: "eth",
    node_host: "eth.nownodes.io",
    blockbook_host: "eth-blockbook.nownodes.io",
    address: AddressRule {
        prefix: None,
        min: 42,
        max: 42,
    },
    txid_length: ETHEREUM_TXID_LENGTH,
    tx_hex: TxHexRule::NonEmpty,
};

impl Blockchain {
    /// Every chain known to the client.
    pub const ALL: [Blockchain; 9] = [
        Blockchain::Bch,
        Blockchain::Bsv,
        Blockchain::Btc,
        Blockchain::BtcTestnet,
        Blockchain::Btg,
        Blockchain::Dash,
        Blockchain::Doge,
        Blockchain::Ltc,
        Blockchain::Eth,
    ];

    /// The Bitcoin-derived chains, which share the BlockBook and node API shapes.
    pub const BITCOIN_FAMILY: [Blockchain; 8] = [
        Blockchain::Bch,
        Blockchain::Bsv,
        Blockchain::Btc,
        Blockchain::BtcTestnet,
        Blockchain::Btg,
        Blockchain::Dash,
        Blockchain::Doge,
        Blockchain::Ltc,
    ];

    fn rules(self) -> &'static ChainRules {
        match self {
            Blockchain::Bch => &BCH,
            Blockchain::Bsv => &BSV,
            Blockchain::Btc => &BTC,
            Blockchain::BtcTestnet => &BTC_TESTNET,
            Blockchain::Btg => &BTG,
            Blockchain::Dash => &DASH,
            Blockchain::Doge => &DOGE,
            Blockchain::Ltc => &LTC,
            Blockchain::Eth => &ETH,
        }
    }

    /// Short name used in hostnames, e.g. `btc-testnet`.
    pub fn as_str(self) -> &'static str {
        self.rules().name
    }

    /// Hostname of the node (JSON-RPC) API.
    pub fn hostname(self) -> &'static str {
        self.rules().node_host
    }

    /// Hostname of the BlockBook API.
    pub fn blockbook_hostname(self) -> &'static str {
        self.rules().blockbook_host
    }

    /// Shallow length check of an address.
    ///
    /// Bounds are inclusive. For BCH a leading `bitcoincash:` is ignored, so
    /// cashaddr and bare forms of the same address give the same answer. This
    /// is a sanity filter, not a checksum validation.
    pub fn validate_address(self, address: &str) -> bool {
        let rule = self.rules().address;
        let body = match rule.prefix {
            Some(prefix) => address.strip_prefix(prefix).unwrap_or(address),
            None => address,
        };
        !body.is_empty() && (rule.min..=rule.max).contains(&body.len()) && is_path_safe(body)
    }

    /// Exact length check of a transaction id.
    pub fn validate_tx_id(self, tx_id: &str) -> bool {
        tx_id.len() == self.rules().txid_length && is_path_safe(tx_id)
    }

    /// Checks that a raw transaction is present and decodes as hex.
    ///
    /// Ethereum transactions only need to be non-empty and alphanumeric.
    pub fn validate_tx_hex(self, tx_hex: &str) -> bool {
        if tx_hex.is_empty() {
            return false;
        }
        match self.rules().tx_hex {
            TxHexRule::Hex => Vec::<u8>::from_hex(tx_hex).is_ok(),
            TxHexRule::NonEmpty => is_path_safe(tx_hex),
        }
    }
}

/// Values are placed unescaped in BlockBook paths, so only ASCII letters and
/// digits are accepted.
fn is_path_safe(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Blockchain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Blockchain::ALL
            .into_iter()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| Error::UnknownBlockchain(s.to_string()))
    }
}
