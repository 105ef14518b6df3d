use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::{Error, TransportError};
use crate::transport::Transport;

/// An in-memory transport for testing. Records every `(path, body)` it is
/// given and answers each one with the same canned reply.
#[derive(Clone, Debug)]
pub struct MockTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

#[derive(Clone, Debug)]
enum Reply {
    Json(Value),
    Status(i32),
}

impl MockTransport {
    pub fn replying(reply: Value) -> Self {
        Self::new(Reply::Json(reply))
    }

    pub fn failing_with_status(status_code: i32) -> Self {
        Self::new(Reply::Status(status_code))
    }

    fn new(reply: Reply) -> Self {
        MockTransport {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last_request(&self) -> (String, Value) {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("mock lock poisoned").len()
    }
}

impl Transport for MockTransport {
    fn post_json(&self, path: &str, body: &Value) -> Result<Value, Error> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push((path.to_owned(), body.clone()));
        match &self.reply {
            Reply::Json(v) => Ok(v.clone()),
            Reply::Status(status_code) => Err(TransportError::Status {
                status_code: *status_code,
                body: String::new(),
            }
            .into()),
        }
    }

    fn fmt_target(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mock")
    }
}
