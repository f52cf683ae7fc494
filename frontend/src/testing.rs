//! In-memory backend and timer for driving the handlers natively.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use common::{
    ActivityMap, ClientConfig, ClientError, ClientResult, Credentials, MessageResponse,
    StatusResponse,
};
use sycamore::prelude::*;

use crate::api::Backend;
use crate::state::{AppState, Timer};

pub const CHESS_CLUB: &str = r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":["a@x.com"]}}"#;

pub fn activities() -> ActivityMap {
    serde_json::from_str(CHESS_CLUB).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Activities,
    Status,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
    Login { username: String },
    Logout,
}

fn no_reply() -> ClientError {
    ClientError::Network("no reply queued".into())
}

/// Replies are queued by the test; a call with nothing queued fails as if
/// the network were down.
#[derive(Default)]
pub struct FakeBackend {
    calls: RefCell<Vec<Call>>,
    activities: RefCell<VecDeque<ClientResult<ActivityMap>>>,
    status: RefCell<Option<ClientResult<bool>>>,
    mutation: RefCell<Option<ClientResult<String>>>,
    ack: RefCell<Option<ClientResult<()>>>,
}

impl FakeBackend {
    pub fn push_activities(&self, reply: ClientResult<ActivityMap>) {
        self.activities.borrow_mut().push_back(reply);
    }

    pub fn set_status(&self, reply: ClientResult<bool>) {
        *self.status.borrow_mut() = Some(reply);
    }

    /// Reply to the next signup or unregister.
    pub fn set_mutation(&self, reply: ClientResult<&str>) {
        *self.mutation.borrow_mut() = Some(reply.map(str::to_string));
    }

    /// Reply to the next login or logout.
    pub fn set_ack(&self, reply: ClientResult<()>) {
        *self.ack.borrow_mut() = Some(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation_reply(&self) -> ClientResult<MessageResponse> {
        let reply = self.mutation.borrow_mut().take().unwrap_or_else(|| Err(no_reply()));
        reply.map(|message| MessageResponse { message })
    }

    fn ack_reply(&self) -> ClientResult<()> {
        self.ack.borrow_mut().take().unwrap_or_else(|| Err(no_reply()))
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn fetch_activities(&self) -> ClientResult<ActivityMap> {
        self.record(Call::Activities);
        self.activities.borrow_mut().pop_front().unwrap_or_else(|| Err(no_reply()))
    }

    async fn fetch_status(&self) -> ClientResult<StatusResponse> {
        self.record(Call::Status);
        let reply = self.status.borrow_mut().take().unwrap_or_else(|| Err(no_reply()));
        reply.map(|logged_in| StatusResponse { logged_in })
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        self.record(Call::Signup {
            activity: activity.into(),
            email: email.into(),
        });
        self.mutation_reply()
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        self.record(Call::Unregister {
            activity: activity.into(),
            email: email.into(),
        });
        self.mutation_reply()
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<()> {
        self.record(Call::Login {
            username: credentials.username.clone(),
        });
        self.ack_reply()
    }

    async fn logout(&self) -> ClientResult<()> {
        self.record(Call::Logout);
        self.ack_reply()
    }
}

/// Returns at once and remembers how long each caller asked to wait.
#[derive(Default)]
pub struct FakeTimer {
    waits: RefCell<Vec<u32>>,
}

impl FakeTimer {
    pub fn waits(&self) -> Vec<u32> {
        self.waits.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Timer for FakeTimer {
    async fn sleep(&self, millis: u32) {
        self.waits.borrow_mut().push(millis);
    }
}

pub fn test_app<'a>(cx: Scope<'a>) -> (AppState<'a>, &'a FakeBackend, &'a FakeTimer) {
    let backend = create_ref(cx, FakeBackend::default());
    let timer = create_ref(cx, FakeTimer::default());
    let app = AppState::new(cx, ClientConfig::default(), backend, timer);
    (app, backend, timer)
}
