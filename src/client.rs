use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::protocol::{JSON_RPC_PATH, Params, Request, unwrap_response};
use crate::transport::{HttpTransport, Transport};

/// Generic JSON-RPC client for an Electronero daemon or wallet.
pub struct Client {
    /// The transport requests are posted through.
    transport: Box<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "electronero_rpc_client::Client(")?;
        self.transport.fmt_target(f)?;
        write!(f, ")")
    }
}

impl Client {
    /// Creates a client for the server described by `config`.
    ///
    /// Fails only when the configured login file cannot be read.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::with_transport(HttpTransport::from_config(&config)?))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Calls the RPC `method` with optional `params`.
    ///
    /// With `T = serde_json::Value` the `result` is returned exactly as sent.
    pub fn call<T>(&self, method: &str, params: Option<Params>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let result = self.call_value(method, params.as_ref())?;
        serde_json::from_value(result)
            .map_err(|e| Error::InvalidResponse(format!("{method}: unexpected result: {e}")))
    }

    /// Calls `method` with any serializable `params`, which must encode to an
    /// array or an object.
    pub fn call_with<T, P>(&self, method: &str, params: P) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let params = Params::try_from(serde_json::to_value(params)?)?;
        self.call(method, Some(params))
    }

    /// Forwards `method` verbatim with `named` as the params mapping.
    ///
    /// An empty mapping sends no `params` at all.
    pub fn invoke(&self, method: &str, named: Map<String, Value>) -> Result<Value, Error> {
        let params = (!named.is_empty()).then_some(Params::Named(named));
        self.call_value(method, params.as_ref())
    }

    /// Posts `body` without a JSON-RPC envelope to a plain HTTP endpoint such
    /// as `/get_height`, returning the whole decoded reply.
    pub fn call_path<T>(&self, path: &str, body: &Value) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        debug!(rpc.path = path, "http call");
        let reply = self.transport.post_json(path, body)?;
        serde_json::from_value(reply)
            .map_err(|e| Error::InvalidResponse(format!("{path}: unexpected reply: {e}")))
    }

    fn call_value(&self, method: &str, params: Option<&Params>) -> Result<Value, Error> {
        let request = Request::new(method, params);
        debug!(
            rpc.method = method,
            rpc.params = request.params_kind(),
            "rpc call"
        );
        let body = serde_json::to_value(&request)?;
        let reply = self.transport.post_json(JSON_RPC_PATH, &body)?;

        let outcome = unwrap_response(reply);
        if let Err(e) = &outcome {
            debug!(rpc.method = method, error = %e, "rpc call failed");
        }
        outcome
    }
}

/// Pulls `field` out of a result object.
///
/// A missing field or a value of the wrong type is an [`Error::InvalidResponse`].
pub(crate) fn extract<T>(method: &str, mut result: Value, field: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let value = result
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| Error::InvalidResponse(format!("{method}: result has no `{field}`")))?;
    serde_json::from_value(value)
        .map_err(|e| Error::InvalidResponse(format!("{method}: bad `{field}`: {e}")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::TransportError;
    use crate::mock::MockTransport;

    #[test]
    fn call_posts_envelope_to_json_rpc() {
        let mock = MockTransport::replying(json!({"result": "ok"}));
        let client = Client::with_transport(mock.clone());

        let res: Value = client
            .call("get_info", Some(Params::Named(Map::new())))
            .expect("call");

        assert_eq!(res, json!("ok"));
        let (path, body) = mock.last_request();
        assert_eq!(path, "/json_rpc");
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "id": "0", "method": "get_info", "params": {}})
        );
    }

    #[test]
    fn call_without_params_omits_key() {
        let mock = MockTransport::replying(json!({"result": null}));
        let client = Client::with_transport(mock.clone());

        let _: Value = client.call("getblockcount", None).expect("call");

        let (_, body) = mock.last_request();
        assert!(body.get("params").is_none());
    }

    #[test]
    fn call_deserializes_typed_result() {
        let mock = MockTransport::replying(json!({"result": {"count": 7}}));
        let client = Client::with_transport(mock);

        #[derive(serde::Deserialize)]
        struct Count {
            count: u64,
        }

        let res: Count = client.call("getblockcount", None).expect("call");
        assert_eq!(res.count, 7);
    }

    #[test]
    fn call_rejects_mistyped_result() {
        let mock = MockTransport::replying(json!({"result": "not a number"}));
        let client = Client::with_transport(mock);

        let err = client.call::<u64>("getblockcount", None).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn call_with_serializes_params() {
        let mock = MockTransport::replying(json!({"result": {}}));
        let client = Client::with_transport(mock.clone());

        #[derive(Serialize)]
        struct ByHash<'a> {
            hash: &'a str,
        }

        let _: Value = client
            .call_with("getblockheaderbyhash", ByHash { hash: "ab" })
            .expect("call");
        assert_eq!(mock.last_request().1["params"], json!({"hash": "ab"}));

        let err = client.call_with::<Value, _>("x", 5).unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[test]
    fn invoke_forwards_named_args() {
        let mock = MockTransport::replying(json!({"result": {"tags": []}}));
        let client = Client::with_transport(mock.clone());

        let mut named = Map::new();
        named.insert("tag".to_owned(), json!("savings"));
        named.insert("accounts".to_owned(), json!([0, 1]));

        let res = client.invoke("tag_accounts_v2", named).expect("invoke");

        assert_eq!(res, json!({"tags": []}));
        let (_, body) = mock.last_request();
        assert_eq!(body["method"], "tag_accounts_v2");
        assert_eq!(body["params"], json!({"tag": "savings", "accounts": [0, 1]}));
    }

    #[test]
    fn invoke_without_args_sends_no_params() {
        let mock = MockTransport::replying(json!({"result": {}}));
        let client = Client::with_transport(mock.clone());

        client.invoke("store", Map::new()).expect("invoke");

        assert!(mock.last_request().1.get("params").is_none());
    }

    #[test]
    fn call_path_returns_whole_reply() {
        let reply = json!({"height": 1000, "status": "OK"});
        let mock = MockTransport::replying(reply.clone());
        let client = Client::with_transport(mock.clone());

        let res: Value = client.call_path("/get_height", &json!({})).expect("call");

        assert_eq!(res, reply);
        assert_eq!(mock.last_request(), ("/get_height".to_owned(), json!({})));
    }

    #[test]
    fn rpc_error_is_surfaced() {
        let payload = json!({"code": -1, "message": "bad method"});
        let mock = MockTransport::replying(json!({"error": payload.clone()}));
        let client = Client::with_transport(mock);

        let err = client.call::<Value>("nope", None).unwrap_err();
        assert_eq!(err.as_rpc().map(|e| e.payload()), Some(&payload));
    }

    #[test]
    fn transport_error_is_surfaced() {
        let mock = MockTransport::failing_with_status(503);
        let client = Client::with_transport(mock);

        let err = client.call::<Value>("getblockcount", None).unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(TransportError::Status {
                status_code: 503,
                ..
            })
        ));
    }

    #[test]
    fn extract_reports_missing_field() {
        let err = extract::<u64>("getblockcount", json!({"status": "OK"}), "count").unwrap_err();
        assert!(err.to_string().contains("no `count`"));

        let n: u64 = extract("getblockcount", json!({"count": 3}), "count").expect("field");
        assert_eq!(n, 3);
    }

    #[test]
    fn debug_shows_target() {
        let client = Client::new(Config::daemon()).expect("client");
        assert_eq!(
            format!("{client:?}"),
            "electronero_rpc_client::Client(http://127.0.0.1:12090)"
        );
    }
}
