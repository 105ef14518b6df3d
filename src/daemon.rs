//! Typed access to `electronerod`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::{Client, extract};
use crate::config::Config;
use crate::error::Error;
use crate::methods::{self, DAEMON_METHODS, DAEMON_PATHS};
use crate::protocol::Params;

/// Client for the daemon RPC, listening on port 12090 by default.
#[derive(Debug)]
pub struct DaemonClient {
    rpc: Client,
}

impl DaemonClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::with_client(Client::new(config)?))
    }

    /// Daemon on `127.0.0.1:12090` without authentication.
    pub fn local() -> Result<Self, Error> {
        Self::new(Config::daemon())
    }

    pub fn with_client(rpc: Client) -> Self {
        Self { rpc }
    }

    /// The underlying generic client.
    pub fn rpc(&self) -> &Client {
        &self.rpc
    }

    /// Known JSON-RPC method names and plain HTTP paths of the daemon.
    pub fn methods() -> (&'static [&'static str], &'static [&'static str]) {
        (DAEMON_METHODS, DAEMON_PATHS)
    }

    pub fn call<T>(&self, method: &str, params: Option<Params>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.rpc.call(method, params)
    }

    /// Calls a method this type has no wrapper for.
    ///
    /// Names starting with `/` are plain HTTP endpoints and receive `named`
    /// as the request body.
    pub fn invoke(&self, method: &str, named: Map<String, Value>) -> Result<Value, Error> {
        if method.starts_with('/') {
            if !methods::is_daemon_path(method) {
                debug!(rpc.path = method, "path not in the daemon registry");
            }
            return self.rpc.call_path(method, &Value::Object(named));
        }
        if !methods::is_daemon_method(method) {
            debug!(rpc.method = method, "method not in the daemon registry");
        }
        self.rpc.invoke(method, named)
    }

    pub fn call_path<T>(&self, path: &str, body: &Value) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.rpc.call_path(path, body)
    }
}

// `electronerod` RPC methods
impl DaemonClient {
    /// Number of blocks in the longest chain.
    pub fn get_block_count(&self) -> Result<u64, Error> {
        let res: Value = self.call("getblockcount", None)?;
        extract("getblockcount", res, "count")
    }

    /// Hash of the block at `height`.
    pub fn get_block_hash(&self, height: u64) -> Result<String, Error> {
        self.call("on_getblockhash", Some(Params::Positional(vec![json!(height)])))
    }

    pub fn get_block_header_by_height(&self, height: u64) -> Result<Value, Error> {
        let res: Value = self.rpc.call_with("getblockheaderbyheight", json!({ "height": height }))?;
        extract("getblockheaderbyheight", res, "block_header")
    }

    pub fn get_block_header_by_hash(&self, hash: &str) -> Result<Value, Error> {
        let res: Value = self.rpc.call_with("getblockheaderbyhash", json!({ "hash": hash }))?;
        extract("getblockheaderbyhash", res, "block_header")
    }

    pub fn get_last_block_header(&self) -> Result<Value, Error> {
        let res: Value = self.call("getlastblockheader", None)?;
        extract("getlastblockheader", res, "block_header")
    }

    /// Broadcast a signed transaction given as hex.
    pub fn send_raw_transaction(&self, tx_as_hex: &str) -> Result<Value, Error> {
        self.rpc.call_with("send_raw_transaction", json!({ "tx_as_hex": tx_as_hex }))
    }

    pub fn get_info(&self) -> Result<Value, Error> {
        self.call("get_info", None)
    }

    /// Chain height, read from the plain `/get_height` endpoint.
    pub fn get_height(&self) -> Result<u64, Error> {
        let res: Value = self.call_path("/get_height", &json!({}))?;
        extract("/get_height", res, "height")
    }
}
