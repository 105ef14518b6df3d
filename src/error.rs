//! Error types for the Electronero RPC client.

use std::{fmt, io};

use jsonrpc::minreq;
use serde_json::Value;

/// Result type alias for the RPC client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the Electronero RPC client.
#[derive(Debug)]
pub enum Error {
    /// The request never produced a usable JSON reply.
    Transport(TransportError),

    /// The server answered but reported an application-level error.
    Rpc(RpcError),

    /// The reply was well formed but did not have the shape a typed method expects.
    InvalidResponse(String),

    /// A value given as request parameters is neither an array nor an object.
    InvalidParams(String),

    /// Invalid or corrupted login (cookie) file.
    InvalidCookieFile,

    /// JSON serialization of request parameters failed.
    Json(serde_json::Error),

    /// I/O error (e.g., reading the login file).
    Io(io::Error),
}

impl Error {
    /// Whether the failure happened at or below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Whether the server reported an error in the JSON-RPC body.
    pub fn is_rpc(&self) -> bool {
        matches!(self, Error::Rpc(_))
    }

    /// The server-supplied error, if this is an RPC error.
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Error::Rpc(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {e}"),
            Error::Rpc(e) => write!(f, "RPC error: {e}"),
            Error::InvalidResponse(e) => write!(f, "invalid response: {e}"),
            Error::InvalidParams(e) => write!(f, "invalid params: {e}"),
            Error::InvalidCookieFile => write!(f, "invalid cookie file"),
            Error::Json(e) => write!(f, "JSON error: {e}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            Error::Rpc(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<RpcError> for Error {
    fn from(e: RpcError) -> Self {
        Error::Rpc(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Failures at or below the HTTP layer.
#[derive(Debug)]
pub enum TransportError {
    /// Connection refused, timeout, or another failure inside the HTTP client.
    Http(minreq::Error),

    /// The server answered with a status outside 200-299.
    Status { status_code: i32, body: String },

    /// The reply body is not valid JSON.
    Json(serde_json::Error),

    /// The reply is JSON but not a JSON-RPC response object.
    Envelope(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportError::Http(e) => write!(f, "http: {e}"),
            TransportError::Status { status_code, body } => {
                write!(f, "unexpected status {status_code}: {body}")
            }
            TransportError::Json(e) => write!(f, "malformed JSON reply: {e}"),
            TransportError::Envelope(e) => write!(f, "malformed JSON-RPC reply: {e}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Http(e) => Some(e),
            TransportError::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// An error reported by the daemon or wallet, carried verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    payload: Value,
}

impl RpcError {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// The `error` value exactly as the server sent it.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    pub fn code(&self) -> Option<i64> {
        self.payload.get("code").and_then(Value::as_i64)
    }

    pub fn message(&self) -> Option<&str> {
        self.payload.get("message").and_then(Value::as_str)
    }

    /// Reads the payload as a standard `{code, message, data}` JSON-RPC error.
    ///
    /// Returns `None` when the server used a non-standard shape.
    pub fn to_standard(&self) -> Option<jsonrpc::error::RpcError> {
        serde_json::from_str(&self.payload.to_string()).ok()
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            _ => write!(f, "{}", self.payload),
        }
    }
}

impl std::error::Error for RpcError {}
