use std::sync::Arc;

use crate::error::Error;
use crate::options::ClientOptions;
use crate::transport::{ReqwestTransport, Transport};

// NOWNodes client.
#[derive(Clone, Debug)]
pub struct Client {
    /// Configuration fixed at construction.
    options: ClientOptions,
    /// The HTTP transport every call goes through.
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// A missing API key is not an error here; the upstream service rejects
    /// unauthenticated calls.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(options.http_options())?;
        Ok(Self::with_transport(options, transport))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport<T>(options: ClientOptions, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            options,
            transport: Arc::new(transport),
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn user_agent(&self) -> &str {
        self.options.user_agent()
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
