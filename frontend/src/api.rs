//! Calls against the activity backend. Each returns the decoded reply or a
//! [`ClientError`]; deciding what the user sees happens in `common`.

use async_trait::async_trait;
use common::{
    login_form_body, read_ack, read_reply, signup_path, unregister_path, ActivityMap,
    ClientConfig, ClientError, ClientResult, Credentials, MessageResponse, StatusResponse,
    ACTIVITIES_PATH, FORM_CONTENT_TYPE, LOGIN_PATH, LOGOUT_PATH, STATUS_PATH,
};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

/// The six endpoints the page talks to.
#[async_trait(?Send)]
pub trait Backend {
    async fn fetch_activities(&self) -> ClientResult<ActivityMap>;
    async fn fetch_status(&self) -> ClientResult<StatusResponse>;
    async fn signup(&self, activity: &str, email: &str) -> ClientResult<MessageResponse>;
    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<MessageResponse>;
    async fn login(&self, credentials: &Credentials) -> ClientResult<()>;
    async fn logout(&self) -> ClientResult<()>;
}

pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        HttpBackend { config }
    }

    // The session cookie set by /login must ride along when the API lives on
    // another origin.
    fn credentials(&self) -> RequestCredentials {
        if self.config.is_cross_origin() {
            RequestCredentials::Include
        } else {
            RequestCredentials::SameOrigin
        }
    }

    async fn send(&self, request: Request) -> ClientResult<RawReply> {
        let response = request
            .credentials(self.credentials())
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok(RawReply { status, body })
    }
}

struct RawReply {
    status: u16,
    body: String,
}

fn network_error(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_activities(&self) -> ClientResult<ActivityMap> {
        let reply = self
            .send(Request::get(&self.config.url(ACTIVITIES_PATH)))
            .await?;
        read_reply(reply.status, &reply.body)
    }

    async fn fetch_status(&self) -> ClientResult<StatusResponse> {
        let reply = self.send(Request::get(&self.config.url(STATUS_PATH))).await?;
        read_reply(reply.status, &reply.body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        let url = self.config.url(&signup_path(activity, email));
        let reply = self.send(Request::post(&url)).await?;
        read_reply(reply.status, &reply.body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<MessageResponse> {
        let url = self.config.url(&unregister_path(activity, email));
        let reply = self.send(Request::delete(&url)).await?;
        read_reply(reply.status, &reply.body)
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<()> {
        let body = login_form_body(credentials)?;
        let request = Request::post(&self.config.url(LOGIN_PATH))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body);
        let reply = self.send(request).await?;
        read_ack(reply.status, &reply.body)
    }

    async fn logout(&self) -> ClientResult<()> {
        let reply = self.send(Request::post(&self.config.url(LOGOUT_PATH))).await?;
        read_ack(reply.status, &reply.body)
    }
}
