//! Shared fixtures and a recording mock transport.

#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jsonrpc::serde_json::{self, Value, json};
use nownodes_client::{
    Client, ClientOptions, Error, HttpRequest, HttpResponse, Result, Transport,
};

pub const TEST_KEY: &str = "test-key-1234567";
pub const TEST_USER_AGENT: &str = "test-user-agent";

pub const BSV_TXID: &str = "17961a51337369bf64e45e8410a7ce4cfb0c88b5d883d9e8a939dfdd0f7591fd";
pub const BSV_ADDRESS: &str = "1GenocdBC1NSHLMbk61fqJXqTdXjevCxCL";
pub const BCH_ADDRESS: &str = "bitcoincash:qzgztrce3qtc272dfffzc0lz3e02ykvunyzaud5kdn";

pub const BSV_TX_HEX: &str = "0100000001cc8ca38cc058bad2abeb1a46182478c8e62bb407c9cfab6ad60e123572b0b4ca020000006b483045022100977a4cbf4f34efc54ff56a1d4b74148836e86b045ad75fd4c27729e2f3c9cf9e02205ed85454fdecf4345fdd1bf19a64db3268c3fe00d72615de2a1a24c92defbde5412102cfbb8f465fa014012bd44407974fbd13f239b9b5e9586db75191acaa642336f0ffffffff020000000000000000b4006a0372756e0105036679784ca67b22696e223a312c22726566223a5b5d2c226f7574223a5b5d2c2264656c223a5b2265353066616364323332663663333037326337313538393333373839313437376432343037373235393839636161376439363062383662303533633736323366225d2c22637265223a5b5d2c2265786563223a5b7b226f70223a2243414c4c222c2264617461223a5b7b22246a6967223a307d2c2264657374726f79222c5b5d5d7d5d7dc2010000000000001976a914f08d4568df6be038700227e70105b251455abaf188ac00000000";

pub const BSV_TX_RESPONSE: &str = r#"{"txid":"17961a51337369bf64e45e8410a7ce4cfb0c88b5d883d9e8a939dfdd0f7591fd","version":1,"vin":[{"txid":"cab4b07235120ed66aabcfc907b42be6c8782418461aebabd2ba58c08ca38ccc","vout":2,"sequence":4294967295,"n":0,"addresses":["1GenocdBC1NSHLMbk61fqJXqTdXjevCxCL"],"isAddress":true,"value":"546","hex":"483045022100977a4cbf4f34efc54ff56a1d4b74148836e86b045ad75fd4c27729e2f3c9cf9e02205ed85454fdecf4345fdd1bf19a64db3268c3fe00d72615de2a1a24c92defbde5412102cfbb8f465fa014012bd44407974fbd13f239b9b5e9586db75191acaa642336f0"}],"vout":[{"value":"0","n":0,"hex":"006a0372756e0105036679784ca67b22696e223a312c22726566223a5b5d2c226f7574223a5b5d2c2264656c223a5b2265353066616364323332663663333037326337313538393333373839313437376432343037373235393839636161376439363062383662303533633736323366225d2c22637265223a5b5d2c2265786563223a5b7b226f70223a2243414c4c222c2264617461223a5b7b22246a6967223a307d2c2264657374726f79222c5b5d5d7d5d7d","addresses":[],"isAddress":false},{"value":"450","n":1,"hex":"76a914f08d4568df6be038700227e70105b251455abaf188ac","addresses":["1NvvQjKN4GsyA9Y2kUT8PRvocAPJgCneFZ"],"isAddress":true}],"blockHash":"00000000000000000a032702d724591574cae47e729acdaf8b8a990adda3f72e","blockHeight":723772,"confirmations":622,"blockTime":1643111792,"value":"450","valueIn":"546","fees":"96","hex":"0100000001cc8ca38cc058bad2abeb1a46182478c8e62bb407c9cfab6ad60e123572b0b4ca020000006b483045022100977a4cbf4f34efc54ff56a1d4b74148836e86b045ad75fd4c27729e2f3c9cf9e02205ed85454fdecf4345fdd1bf19a64db3268c3fe00d72615de2a1a24c92defbde5412102cfbb8f465fa014012bd44407974fbd13f239b9b5e9586db75191acaa642336f0ffffffff020000000000000000b4006a0372756e0105036679784ca67b22696e223a312c22726566223a5b5d2c226f7574223a5b5d2c2264656c223a5b2265353066616364323332663663333037326337313538393333373839313437376432343037373235393839636161376439363062383662303533633736323366225d2c22637265223a5b5d2c2265786563223a5b7b226f70223a2243414c4c222c2264617461223a5b7b22246a6967223a307d2c2264657374726f79222c5b5d5d7d5d7dc2010000000000001976a914f08d4568df6be038700227e70105b251455abaf188ac00000000"}"#;

pub const BSV_ADDRESS_RESPONSE: &str = r#"{"page":1,"totalPages":174,"itemsOnPage":1000,"address":"1GenocdBC1NSHLMbk61fqJXqTdXjevCxCL","balance":"101556","totalReceived":"66351012","totalSent":"66249456","unconfirmedBalance":"0","unconfirmedTxs":0,"txs":173661,"txids":["12d9e1ed43444f03dee7381f66ecc206fe14719523a72d2c6536e1f4c4e05a14","bc762632e1a02417ba0ee69b7d19059d3ba4f7905320f3930f22be6e9dde8610","fcf4cda23a9394d446a421a15bfd7da0095fd701f2fc3c446d6a54e744caf1e2","baee5d90e542b146eb3ce65e2b9d5f39c3a178b4134c583a6c9e379162c7604c","b1e1d62e2ad74aab16741779bae5c03b64d35dba176687f88e475b9b5504fd6e"]}"#;

pub const BCH_ADDRESS_RESPONSE: &str = r#"{"page":1,"totalPages":104,"itemsOnPage":1000,"address":"bitcoincash:qzgztrce3qtc272dfffzc0lz3e02ykvunyzaud5kdn","balance":"3706237","totalReceived":"1053381020454","totalSent":"1053377314217","unconfirmedBalance":"0","unconfirmedTxs":0,"txs":103219,"txids":["fc2ee06ff4a22a630db1222ac1afa3595046854d03b12e6f423ee37e7db52be8","640f5f203691199838efb0ab43a5c9f15cadbf4c573523058816f02590f95dff","ac8e25de62f92dd2143c85b5487d2b77a34954c564bfe3047bc34639711c8b63"]}"#;

pub const MEMPOOL_ENTRY_RESULT: &str = r#"{"size": 381,"fee": 9.6e-7,"modifiedfee": 9.6e-7,"time": 1643661192,"height": 724704,"depends": []}"#;

pub const MISSING_API_KEY: &str = r#"{"message": "Missing api-key header"}"#;
pub const BAD_JSON: &str = r#"{"invalid":json}"#;

type Responder = dyn Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync;

/// Transport that answers from a closure and records every request.
#[derive(Clone)]
pub struct MockTransport {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<HttpRequest>>>,
    delay: Option<Duration>,
}

impl fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.calls.lock().unwrap().len())
            .finish()
    }
}

impl MockTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Always answers `status` with `body`.
    pub fn fixed(status: u16, body: &'static str) -> Self {
        Self::new(move |_| Ok(response(status, body)))
    }

    /// Fails every call at the connection level.
    pub fn unreachable() -> Self {
        Self::new(|_| Err(Error::Transport("connection refused".into())))
    }

    /// Answers node API calls with `result`, echoing the request id.
    pub fn node_result(result: &'static str) -> Self {
        Self::new(move |request| {
            let payload = request_payload(request);
            let body = format!(
                r#"{{"result": {result},"error": null,"id": {}}}"#,
                payload["id"]
            );
            Ok(HttpResponse {
                status: 200,
                body: body.into_bytes(),
            })
        })
    }

    /// Holds every response back for `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn client(&self) -> Client {
        Client::with_transport(test_options(), self.clone())
    }

    pub fn client_with(&self, options: ClientOptions) -> Client {
        Client::with_transport(options, self.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(&request)
    }
}

pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: body.as_bytes().to_vec(),
    }
}

pub fn test_options() -> ClientOptions {
    ClientOptions::default()
        .with_api_key(TEST_KEY)
        .with_user_agent(TEST_USER_AGENT)
}

/// The JSON body of a node API request.
pub fn request_payload(request: &HttpRequest) -> Value {
    let body = request.body.as_deref().expect("node request without body");
    serde_json::from_slice(body).expect("node request body is not JSON")
}

pub fn rpc_error(code: i32, message: &str) -> String {
    json!({"result": null, "error": {"code": code, "message": message}, "id": "x"}).to_string()
}
