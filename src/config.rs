//! Connection settings shared by the daemon and wallet clients.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
    time::Duration,
};

use crate::error::Error;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default JSON-RPC port of `electronerod`.
pub const DEFAULT_DAEMON_PORT: u16 = 12090;

/// Default JSON-RPC port of `electronero-wallet-rpc`.
pub const DEFAULT_WALLET_PORT: u16 = 18082;

/// Default time allowed for a whole request/response cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// client authentication methods
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Auth {
    #[default]
    None,
    UserPass(String, String),
    /// A login file whose first line is `user:pass`, as written by the wallet RPC.
    CookieFile(PathBuf),
}

impl Auth {
    /// Resolve into the credentials sent as HTTP basic auth.
    pub fn get_user_pass(self) -> Result<Option<(String, String)>, Error> {
        match self {
            Auth::None => Ok(None),
            Auth::UserPass(u, p) => Ok(Some((u, p))),
            Auth::CookieFile(path) => {
                let line = BufReader::new(File::open(path)?)
                    .lines()
                    .next()
                    .ok_or(Error::InvalidCookieFile)??;
                let (user, pass) = line.trim().split_once(':').ok_or(Error::InvalidCookieFile)?;
                if user.is_empty() {
                    return Err(Error::InvalidCookieFile);
                }
                Ok(Some((user.to_owned(), pass.to_owned())))
            }
        }
    }
}

/// Where and how to reach an RPC server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub auth: Auth,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            auth: Auth::None,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Local daemon on its default port.
    pub fn daemon() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_DAEMON_PORT)
    }

    /// Local wallet RPC on its default port.
    pub fn wallet() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_WALLET_PORT)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_user_pass(self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.with_auth(Auth::UserPass(user.into(), pass.into()))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without a path, e.g. `http://127.0.0.1:12090`.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time must be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("electronero-rpc-{name}-{unique}"))
    }

    #[test]
    fn defaults() {
        let daemon = Config::daemon();
        assert_eq!(daemon.endpoint(), "http://127.0.0.1:12090");
        assert_eq!(daemon.timeout, Some(Duration::from_secs(30)));
        assert_eq!(daemon.auth, Auth::None);

        assert_eq!(Config::wallet().port, 18082);
    }

    #[test]
    fn builder_methods_override() {
        let config = Config::wallet()
            .with_host("10.0.0.2")
            .with_port(1)
            .with_user_pass("alice", "secret")
            .with_timeout(None);

        assert_eq!(config.endpoint(), "http://10.0.0.2:1");
        assert_eq!(
            config.auth,
            Auth::UserPass("alice".to_owned(), "secret".to_owned())
        );
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn reads_login_file() {
        let path = temp_path("login");
        fs::write(&path, "rpc_user:deadbeef\nignored\n").expect("login file must be writable");

        let creds = Auth::CookieFile(path.clone())
            .get_user_pass()
            .expect("login file must parse");
        assert_eq!(creds, Some(("rpc_user".to_owned(), "deadbeef".to_owned())));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_login_file_without_colon() {
        let path = temp_path("bad-login");
        fs::write(&path, "no-separator\n").expect("login file must be writable");

        let err = Auth::CookieFile(path.clone())
            .get_user_pass()
            .expect_err("must reject");
        assert!(matches!(err, Error::InvalidCookieFile));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_login_file_is_io_error() {
        let err = Auth::CookieFile(PathBuf::from("/nonexistent/electronero/login"))
            .get_user_pass()
            .expect_err("must fail");
        assert!(matches!(err, Error::Io(_)));
    }
}
