//! Shared contract between the activity sign-up page and its backend.
//!
//! Nothing here touches the browser, so the whole crate is tested natively.

mod activity;
mod config;
mod error;
mod message;
mod outcome;
mod reply;
mod routes;

pub use activity::{
    activity_names, build_cards, ActivityCard, ActivityDetails, ActivityMap, ParticipantRow,
};
pub use config::{ClientConfig, API_BASE_KEY, DEFAULT_MESSAGE_TIMEOUT_MS};
pub use error::{ClientError, ClientResult};
pub use message::{DismissToken, Message, MessageKind, Notice};
pub use outcome::{
    login_outcome, mutation_outcome, LoginOutcome, Mutation, MutationOutcome, ADMIN_REQUIRED,
    GENERIC_ERROR, LOGIN_FAILED, LOGIN_TRANSPORT_ERROR,
};
pub use reply::{read_ack, read_reply, ErrorBody, MessageResponse, StatusResponse, FORBIDDEN};
pub use routes::{
    login_form_body, signup_path, unregister_path, Credentials, ACTIVITIES_PATH,
    FORM_CONTENT_TYPE, LOGIN_PATH, LOGOUT_PATH, STATUS_PATH,
};
