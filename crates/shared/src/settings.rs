//! Caller options and the start settings derived from them.

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::transport::{HttpTransport, SocketTransport};

pub const DEFAULT_APPLICATION: &str = "unknown";
pub const DEFAULT_MODE: &str = "development";
pub const DEFAULT_COOKIE_NAME: &str = "ewdSession";

/// Options accepted by `Ewd::configure`.
///
/// Unknown keys are ignored when loading from JSON. Adapters cannot be
/// deserialised and are attached with the `with_*` builders.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct EwdParams {
    pub application: String,
    #[serde(alias = "noSockets")]
    pub no_sockets: bool,
    pub url: Option<String>,
    pub mode: String,
    pub log: bool,
    #[serde(alias = "cookieName")]
    pub cookie_name: String,
    pub jwt: bool,
    #[serde(alias = "jwtDecode")]
    pub jwt_decode: bool,
    #[serde(skip)]
    pub socket: Option<Rc<dyn SocketTransport>>,
    #[serde(skip)]
    pub http: Option<Rc<dyn HttpTransport>>,
    #[serde(skip)]
    pub ajax: Option<Rc<dyn HttpTransport>>,
}

impl Default for EwdParams {
    fn default() -> Self {
        Self {
            application: DEFAULT_APPLICATION.to_string(),
            no_sockets: false,
            url: None,
            mode: DEFAULT_MODE.to_string(),
            log: true,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            jwt: false,
            jwt_decode: false,
            socket: None,
            http: None,
            ajax: None,
        }
    }
}

impl EwdParams {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            ..Self::default()
        }
    }

    /// Load options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn log(mut self, enabled: bool) -> Self {
        self.log = enabled;
        self
    }

    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn jwt(mut self, enabled: bool) -> Self {
        self.jwt = enabled;
        self
    }

    pub fn jwt_decode(mut self, enabled: bool) -> Self {
        self.jwt_decode = enabled;
        self
    }

    /// Disable the socket transport. Any socket adapter is ignored.
    pub fn no_sockets(mut self) -> Self {
        self.no_sockets = true;
        self
    }

    pub fn with_socket(mut self, socket: Rc<dyn SocketTransport>) -> Self {
        self.socket = Some(socket);
        self
    }

    pub fn with_http(mut self, http: Rc<dyn HttpTransport>) -> Self {
        self.http = Some(http);
        self
    }

    /// Override HTTP messaging. Replaces the HTTP helper.
    pub fn with_ajax(mut self, ajax: Rc<dyn HttpTransport>) -> Self {
        self.ajax = Some(ajax);
        self
    }

    /// Derive the settings handed to the client's start call.
    pub fn settings(&self) -> StartSettings {
        StartSettings::from_params(self)
    }
}

impl fmt::Debug for EwdParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EwdParams")
            .field("application", &self.application)
            .field("no_sockets", &self.no_sockets)
            .field("url", &self.url)
            .field("mode", &self.mode)
            .field("log", &self.log)
            .field("cookie_name", &self.cookie_name)
            .field("jwt", &self.jwt)
            .field("jwt_decode", &self.jwt_decode)
            .field("socket", &self.socket.is_some())
            .field("http", &self.http.is_some())
            .field("ajax", &self.ajax.is_some())
            .finish()
    }
}

/// Settings passed to [`EwdClient::start`](crate::EwdClient::start).
#[derive(Clone)]
pub struct StartSettings {
    pub application: String,
    pub socket: Option<Rc<dyn SocketTransport>>,
    pub http: Option<Rc<dyn HttpTransport>>,
    pub ajax: Option<Rc<dyn HttpTransport>>,
    pub url: Option<String>,
    pub mode: String,
    pub log: bool,
    pub cookie_name: String,
    pub jwt: bool,
    pub jwt_decode: bool,
}

impl StartSettings {
    /// Apply defaults to blank options and resolve which adapters survive.
    ///
    /// Values are otherwise passed through unvalidated.
    pub fn from_params(params: &EwdParams) -> Self {
        let socket = if params.no_sockets {
            None
        } else {
            params.socket.clone()
        };
        let http = if params.ajax.is_some() {
            None
        } else {
            params.http.clone()
        };

        Self {
            application: non_empty_or(&params.application, DEFAULT_APPLICATION),
            socket,
            http,
            ajax: params.ajax.clone(),
            url: params.url.clone().filter(|url| !url.is_empty()),
            mode: non_empty_or(&params.mode, DEFAULT_MODE),
            log: params.log,
            cookie_name: non_empty_or(&params.cookie_name, DEFAULT_COOKIE_NAME),
            jwt: params.jwt,
            jwt_decode: params.jwt_decode,
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Debug for StartSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartSettings")
            .field("application", &self.application)
            .field("socket", &self.socket.is_some())
            .field("http", &self.http.is_some())
            .field("ajax", &self.ajax.is_some())
            .field("url", &self.url)
            .field("mode", &self.mode)
            .field("log", &self.log)
            .field("cookie_name", &self.cookie_name)
            .field("jwt", &self.jwt)
            .field("jwt_decode", &self.jwt_decode)
            .finish()
    }
}
