//! JSON-RPC 2.0 envelope used by the daemon and wallet.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, RpcError, TransportError};

/// Path every JSON-RPC call is posted to.
pub const JSON_RPC_PATH: &str = "/json_rpc";

/// Parameters of a call: positional (`[5]`) or named (`{"height": 5}`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Params {
    fn kind(&self) -> &'static str {
        match self {
            Params::Positional(_) => "positional",
            Params::Named(_) => "named",
        }
    }
}

impl From<Vec<Value>> for Params {
    fn from(v: Vec<Value>) -> Self {
        Params::Positional(v)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(m: Map<String, Value>) -> Self {
        Params::Named(m)
    }
}

impl TryFrom<Value> for Params {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(v) => Ok(Params::Positional(v)),
            Value::Object(m) => Ok(Params::Named(m)),
            other => Err(Error::InvalidParams(format!(
                "expected an array or an object, got {other}"
            ))),
        }
    }
}

/// A JSON-RPC request object. The id is always the string `"0"`.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a Params>,
}

impl<'a> Request<'a> {
    pub fn new(method: &'a str, params: Option<&'a Params>) -> Self {
        Request {
            jsonrpc: "2.0",
            id: "0",
            method,
            params,
        }
    }

    pub(crate) fn params_kind(&self) -> &'static str {
        self.params.map_or("none", Params::kind)
    }
}

/// Split a decoded reply into its `result`, or the server's `error`.
///
/// An `error` key wins over `result`, whatever its value. A missing `result`
/// comes back as `null`.
pub fn unwrap_response(reply: Value) -> Result<Value, Error> {
    let mut reply = match reply {
        Value::Object(map) => map,
        other => {
            return Err(
                TransportError::Envelope(format!("expected a JSON object, got {other}")).into(),
            );
        }
    };

    if let Some(err) = reply.remove("error") {
        return Err(RpcError::new(err).into());
    }

    Ok(reply.remove("result").unwrap_or(Value::Null))
}
