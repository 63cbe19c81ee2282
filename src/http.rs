use crate::error::AppError;
use std::io;
use std::sync::Arc;
use tracing::warn;

const USER_AGENT: &str = concat!("loliglio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a GET and hands back status and body, whatever the status is.
/// Only failures to get a response at all are errors here.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        (**self).get(url)
    }
}

/// Blocking HTTPS transport. Certificates are checked against the bundled
/// webpki roots; invalid certificates fail the request.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        UreqTransport {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        UreqTransport::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        match self.agent.get(url).call() {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| AppError::Transport(e.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Status(status, resp)) => {
                let body = error_body(status, resp.into_string());
                Ok(HttpResponse { status, body })
            }
            Err(e) => Err(AppError::Transport(e.to_string())),
        }
    }
}

/// Body of a non-2xx response. A body that cannot be read still yields the
/// status, with the read error in place of the text.
fn error_body(status: u16, read: io::Result<String>) -> String {
    read.unwrap_or_else(|e| {
        warn!(status, error = %e, "could not read error response body");
        format!("<unreadable body: {}>", e)
    })
}
