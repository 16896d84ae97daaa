use crate::form::data::FormData;
use crate::foundation::error::{RevealError, RevealResult};

/// Default form-handling endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xqaqoqwy";
/// Shown after a successful submission.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks for your message! We'll be in touch.";
/// Shown when the submission fails without a usable reason.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your form.";

/// Where and how the contact form submits.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// POST target.
    pub endpoint: String,
    /// Message on success.
    pub success_message: String,
    /// Fallback message on failure.
    pub failure_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    /// Require an http(s) endpoint and non-empty messages.
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(RevealError::validation(format!(
                "form endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.success_message.is_empty() || self.failure_message.is_empty() {
            return Err(RevealError::validation("form messages must not be empty"));
        }
        Ok(())
    }
}

/// Raw endpoint reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl FormResponse {
    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an encoded form somewhere.
pub trait FormTransport {
    /// POST `body` (`application/x-www-form-urlencoded`) to `url`, asking for JSON back.
    fn post_form(&mut self, url: &str, body: &str) -> RevealResult<FormResponse>;
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// Accepted by the endpoint.
    Sent,
    /// Rejected with a reason reported by the endpoint.
    Rejected {
        /// First error message from the endpoint.
        reason: String,
    },
    /// Anything else: transport failure, unexpected status or body.
    Failed,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(serde::Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

/// Classify an endpoint reply.
pub fn interpret_response(response: &FormResponse) -> FormOutcome {
    if response.is_success() {
        return FormOutcome::Sent;
    }
    let Ok(body) = serde_json::from_str::<ErrorBody>(&response.body) else {
        return FormOutcome::Failed;
    };
    match body
        .errors
        .unwrap_or_default()
        .into_iter()
        .find_map(|e| e.message)
    {
        Some(reason) => FormOutcome::Rejected { reason },
        None => FormOutcome::Failed,
    }
}

/// Result of one submit, with the text to show under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReport {
    /// Classification.
    pub outcome: FormOutcome,
    /// User-facing message.
    pub message: String,
}

/// The contact form: its fields and where they go.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    config: FormConfig,
    data: FormData,
}

impl ContactForm {
    /// Empty form for `config`.
    pub fn new(config: FormConfig) -> RevealResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            data: FormData::new(),
        })
    }

    /// Submission settings.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current field values.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Set a field as the user would type it.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.data.set(name, value);
    }

    /// Submit once. Never returns an error: failures become a message. Fields are cleared
    /// only on success.
    #[tracing::instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    pub fn submit(&mut self, transport: &mut dyn FormTransport) -> SubmitReport {
        let body = self.data.encode();
        let outcome = match transport.post_form(&self.config.endpoint, &body) {
            Ok(resp) => {
                tracing::debug!(status = resp.status, "form endpoint replied");
                interpret_response(&resp)
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submission failed");
                FormOutcome::Failed
            }
        };

        let message = match &outcome {
            FormOutcome::Sent => {
                self.data.clear();
                self.config.success_message.clone()
            }
            FormOutcome::Rejected { reason } => {
                tracing::warn!(%reason, "form rejected by endpoint");
                reason.clone()
            }
            FormOutcome::Failed => self.config.failure_message.clone(),
        };
        SubmitReport { outcome, message }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/contact.rs"]
mod tests;
