//! Typed access to `electronero-wallet-rpc`.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::client::{Client, extract};
use crate::config::Config;
use crate::error::Error;
use crate::methods::{self, WALLET_METHODS};
use crate::protocol::Params;

/// One recipient of a transfer. `amount` is in atomic units.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub address: String,
    pub amount: u64,
}

impl Destination {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Client for the wallet RPC, listening on port 18082 by default.
#[derive(Debug)]
pub struct WalletClient {
    rpc: Client,
}

impl WalletClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::with_client(Client::new(config)?))
    }

    /// Wallet RPC on `127.0.0.1:18082` without authentication.
    pub fn local() -> Result<Self, Error> {
        Self::new(Config::wallet())
    }

    pub fn with_client(rpc: Client) -> Self {
        Self { rpc }
    }

    /// The underlying generic client.
    pub fn rpc(&self) -> &Client {
        &self.rpc
    }

    /// Known JSON-RPC method names of the wallet.
    pub fn methods() -> &'static [&'static str] {
        WALLET_METHODS
    }

    pub fn call<T>(&self, method: &str, params: Option<Params>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.rpc.call(method, params)
    }

    /// Calls a method this type has no wrapper for.
    pub fn invoke(&self, method: &str, named: Map<String, Value>) -> Result<Value, Error> {
        if !methods::is_wallet_method(method) {
            debug!(rpc.method = method, "method not in the wallet registry");
        }
        self.rpc.invoke(method, named)
    }
}

// `electronero-wallet-rpc` methods
impl WalletClient {
    /// Balance of an account; use `0` for the primary account.
    pub fn get_balance(&self, account_index: u32) -> Result<Value, Error> {
        self.rpc.call_with("get_balance", json!({ "account_index": account_index }))
    }

    /// Addresses of an account, optionally restricted to `address_index`.
    pub fn get_address(
        &self,
        account_index: u32,
        address_index: Option<&[u32]>,
    ) -> Result<Value, Error> {
        let mut params = Map::new();
        params.insert("account_index".to_owned(), json!(account_index));
        if let Some(indices) = address_index {
            params.insert("address_index".to_owned(), json!(indices));
        }
        self.call("get_address", Some(Params::Named(params)))
    }

    /// Send funds to `destinations`.
    ///
    /// `options` (e.g. `priority`, `mixin`, `get_tx_key`) are merged over the
    /// base parameters; a key present in both takes the value from `options`.
    pub fn transfer(
        &self,
        destinations: &[Destination],
        account_index: u32,
        options: Map<String, Value>,
    ) -> Result<Value, Error> {
        let mut params = Map::new();
        params.insert("destinations".to_owned(), serde_json::to_value(destinations)?);
        params.insert("account_index".to_owned(), json!(account_index));
        params.extend(options);
        self.call("transfer", Some(Params::Named(params)))
    }

    /// Incoming and outgoing transfers matching `filters` (e.g. `in`, `out`,
    /// `pending`, `min_height`). Filters are sent unchanged, even when empty.
    pub fn get_transfers(&self, filters: Map<String, Value>) -> Result<Value, Error> {
        self.call("get_transfers", Some(Params::Named(filters)))
    }

    /// Amount `spender` may still move from `owner`'s balance of a token.
    pub fn token_allowance(
        &self,
        token_address: &str,
        owner: &str,
        spender: &str,
    ) -> Result<u64, Error> {
        let res: Value = self.rpc.call_with(
            "token_allowance",
            json!({
                "token_address": token_address,
                "owner": owner,
                "spender": spender,
            }),
        )?;
        extract("token_allowance", res, "allowance")
    }

    /// Height the wallet has synced to.
    pub fn get_height(&self) -> Result<u64, Error> {
        let res: Value = self.call("get_height", None)?;
        extract("get_height", res, "height")
    }
}
