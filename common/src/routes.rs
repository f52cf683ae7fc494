use serde::Serialize;
use urlencoding::encode;

use crate::error::{ClientError, ClientResult};

pub const ACTIVITIES_PATH: &str = "/activities";
pub const STATUS_PATH: &str = "/status";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub fn signup_path(activity: &str, email: &str) -> String {
    participant_path(activity, "signup", email)
}

pub fn unregister_path(activity: &str, email: &str) -> String {
    participant_path(activity, "unregister", email)
}

// Activity names go in the path and emails in the query, both percent-encoded.
// Only the RFC 3986 unreserved set survives, so `!'()*` are escaped too.
fn participant_path(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{}/{}/{}?email={}",
        ACTIVITIES_PATH,
        encode(activity),
        action,
        encode(email)
    )
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub fn login_form_body(credentials: &Credentials) -> ClientResult<String> {
    serde_urlencoded::to_string(credentials).map_err(|e| ClientError::Malformed(e.to_string()))
}
