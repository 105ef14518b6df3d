//! HTTP transport carrying JSON bodies to the RPC server.

use std::fmt;
use std::time::Duration;

use jsonrpc::{base64, minreq};
use serde_json::Value;
use tracing::trace;

use crate::config::{Config, DEFAULT_HOST, DEFAULT_TIMEOUT};
use crate::error::{Error, TransportError};

/// Something that can POST a JSON body to a path and return the decoded reply.
///
/// A non-2xx status, a network failure, or an undecodable body must surface
/// as [`Error::Transport`].
pub trait Transport: Send + Sync + fmt::Debug {
    fn post_json(&self, path: &str, body: &Value) -> Result<Value, Error>;

    /// Format the target of this transport, i.e. the URL or socket.
    fn fmt_target(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

/// Blocking HTTP transport built on `minreq`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
    timeout: Option<Duration>,
    basic_auth: Option<String>,
}

impl Default for HttpTransport {
    fn default() -> Self {
        HttpTransport {
            endpoint: format!("http://{DEFAULT_HOST}:0"),
            timeout: Some(DEFAULT_TIMEOUT),
            basic_auth: None,
        }
    }
}

impl HttpTransport {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Builds a transport for `config`, resolving its credentials.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut builder = Builder::new()
            .endpoint(&config.endpoint())
            .timeout(config.timeout);
        if let Some((user, pass)) = config.auth.clone().get_user_pass()? {
            builder = builder.basic_auth(user, Some(pass));
        }
        Ok(builder.build())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: &Value) -> Result<Value, Error> {
        let url = format!("{}{}", self.endpoint, path);
        let mut request = minreq::post(&url);
        if let Some(timeout) = self.timeout {
            request = request.with_timeout(timeout_secs(timeout));
        }
        if let Some(auth) = &self.basic_auth {
            request = request.with_header("Authorization", auth);
        }
        let request = request.with_json(body).map_err(TransportError::Http)?;

        let response = request.send().map_err(TransportError::Http)?;
        if !(200..300).contains(&response.status_code) {
            let body = String::from_utf8_lossy(response.as_bytes()).into_owned();
            trace!(rpc.url = %url, status = response.status_code, body = %body, "http reply");
            return Err(TransportError::Status {
                status_code: response.status_code,
                body,
            }
            .into());
        }

        let text = response.as_str().map_err(TransportError::Http)?;
        trace!(rpc.url = %url, status = response.status_code, body = %text, "http reply");
        Ok(serde_json::from_str(text).map_err(TransportError::Json)?)
    }

    fn fmt_target(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.endpoint)
    }
}

/// `minreq` counts whole seconds: round up, and never down to zero.
fn timeout_secs(timeout: Duration) -> u64 {
    (timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)).max(1)
}

/// Builder for [`HttpTransport`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    tp: HttpTransport,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            tp: HttpTransport::default(),
        }
    }

    /// Base URL without a path, e.g. `http://127.0.0.1:12090`.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.tp.endpoint = endpoint.trim_end_matches('/').to_owned();
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.tp.timeout = timeout;
        self
    }

    /// Adds HTTP basic authentication.
    pub fn basic_auth(mut self, user: String, pass: Option<String>) -> Self {
        let mut s = user;
        s.push(':');
        if let Some(ref pass) = pass {
            s.push_str(pass);
        }
        self.tp.basic_auth = Some(format!("Basic {}", base64::encode(s.as_bytes())));
        self
    }

    pub fn build(self) -> HttpTransport {
        self.tp
    }
}
