use crate::error::{ClientError, ClientResult};
use crate::message::Message;
use crate::reply::{MessageResponse, FORBIDDEN};

pub const ADMIN_REQUIRED: &str = "Admin login required";
pub const GENERIC_ERROR: &str = "An error occurred";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_TRANSPORT_ERROR: &str = "Error logging in";

/// The two participant-changing calls. They share every rule except the
/// text shown when the request never completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    pub fn transport_failure_text(&self) -> &'static str {
        match self {
            Mutation::Signup => "Failed to sign up. Please try again.",
            Mutation::Unregister => "Failed to unregister. Please try again.",
        }
    }

    pub fn log_label(&self) -> &'static str {
        match self {
            Mutation::Signup => "Error signing up",
            Mutation::Unregister => "Error unregistering",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub message: Message,
    /// The server accepted the change; the list must be re-fetched.
    pub succeeded: bool,
}

pub fn mutation_outcome(
    mutation: Mutation,
    result: &ClientResult<MessageResponse>,
) -> MutationOutcome {
    match result {
        Ok(reply) => MutationOutcome {
            message: Message::success(reply.message.clone()),
            succeeded: true,
        },
        Err(ClientError::Server { status, detail }) => {
            let fallback = if *status == FORBIDDEN {
                ADMIN_REQUIRED
            } else {
                GENERIC_ERROR
            };
            MutationOutcome {
                message: Message::error(detail.clone().unwrap_or_else(|| fallback.to_string())),
                succeeded: false,
            }
        }
        Err(_) => MutationOutcome {
            message: Message::error(mutation.transport_failure_text()),
            succeeded: false,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    /// Text for the login modal; the modal stays open.
    Rejected(String),
}

pub fn login_outcome(result: &ClientResult<()>) -> LoginOutcome {
    match result {
        Ok(()) => LoginOutcome::LoggedIn,
        Err(ClientError::Server { detail, .. }) => {
            LoginOutcome::Rejected(detail.clone().unwrap_or_else(|| LOGIN_FAILED.to_string()))
        }
        Err(_) => LoginOutcome::Rejected(LOGIN_TRANSPORT_ERROR.to_string()),
    }
}
