//! Electronero RPC client library.
//!
//! This crate provides a blocking Rust client for the JSON-RPC interfaces of the
//! Electronero daemon (`electronerod`) and wallet (`electronero-wallet-rpc`).
//! [`DaemonClient`] and [`WalletClient`] wrap the common calls with typed
//! methods; anything they do not wrap can be reached through
//! [`Client::call`] or the `invoke` escape hatch.

mod client;
mod config;
mod daemon;
mod error;
pub mod methods;
#[cfg(test)]
mod mock;
mod protocol;
mod transport;
mod wallet;

pub use client::Client;
pub use config::{
    Auth, Config, DEFAULT_DAEMON_PORT, DEFAULT_HOST, DEFAULT_TIMEOUT, DEFAULT_WALLET_PORT,
};
pub use daemon::DaemonClient;
pub use error::{Error, Result, RpcError, TransportError};
pub use protocol::{JSON_RPC_PATH, Params, Request, unwrap_response};
pub use transport::{Builder, HttpTransport, Transport};
pub use wallet::{Destination, WalletClient};

pub use jsonrpc;
