use std::time::Duration;

use isahc::config::Configurable;
use isahc::{ReadResponseExt, Request};

use crate::form::contact::{FormResponse, FormTransport};
use crate::foundation::error::{RevealError, RevealResult};

/// Blocking HTTP transport backed by `isahc`.
#[derive(Clone, Copy, Debug)]
pub struct IsahcTransport {
    timeout: Duration,
}

impl Default for IsahcTransport {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl IsahcTransport {
    /// Transport with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl FormTransport for IsahcTransport {
    fn post_form(&mut self, url: &str, body: &str) -> RevealResult<FormResponse> {
        let request = Request::post(url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .map_err(|e| RevealError::form(format!("build request: {e}")))?;

        let mut response =
            isahc::send(request).map_err(|e| RevealError::form(format!("send: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| RevealError::form(format!("read body: {e}")))?;
        Ok(FormResponse { status, body })
    }
}
