use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

pub const FORBIDDEN: u16 = 403;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub logged_in: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body of a non-2xx answer. `detail` is not always a string
/// (validation errors come back as a list), so it is kept loose.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn server_error(status: u16, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail_text());
    ClientError::Server { status, detail }
}

/// Decode a JSON reply. Non-2xx statuses become [`ClientError::Server`]
/// whether or not their body parses.
pub fn read_reply<T: DeserializeOwned>(status: u16, body: &str) -> ClientResult<T> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ClientError::Malformed(e.to_string()))
}

/// Like [`read_reply`] for endpoints whose success body is unused.
pub fn read_ack(status: u16, body: &str) -> ClientResult<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(server_error(status, body))
    }
}
