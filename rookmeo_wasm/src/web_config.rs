use std::str::FromStr;

use serde::Deserialize;

use crate::rust_error;
use crate::web_error_handling::JsResult;


pub const DEFAULT_BOARD_ELEMENT_ID: &str = "chessboard";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const SOCKET_PATH: &str = "/ws";

// Passed by the page to `start` as a JSON string. Every field may be omitted.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebConfig {
    pub server_url: Option<String>,
    pub board_element_id: String,
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            server_url: None,
            board_element_id: DEFAULT_BOARD_ELEMENT_ID.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl WebConfig {
    pub fn from_json(config_json: &str) -> JsResult<Self> {
        if config_json.trim().is_empty() {
            return Ok(WebConfig::default());
        }
        serde_json::from_str(config_json).map_err(|err| rust_error!("Invalid config: {}", err))
    }

    pub fn log_level(&self) -> JsResult<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| rust_error!("Invalid log level: \"{}\"", self.log_level))
    }

    pub fn server_url(&self, location: &web_sys::Location) -> JsResult<String> {
        if let Some(url) = &self.server_url {
            return Ok(url.clone());
        }
        Ok(socket_url_for_page(&location.protocol()?, &location.host()?))
    }
}

// Secure pages must use a secure socket.
pub fn socket_url_for_page(page_protocol: &str, host: &str) -> String {
    let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
    format!("{scheme}://{host}{SOCKET_PATH}")
}
