use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, error, info};
use url::Url;

use clinic_types::api::SubmissionResponse;

use crate::error::ClientError;
use crate::forms::{Form, INVALID_NOTICE};

/// Shown for any failed request; the user is expected to resubmit by hand.
pub const FAILED_NOTICE: &str = "An error occurred. Please try again.";

/// What the page renders after a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked before any request was made.
    Invalid { fields: Vec<String> },
    /// The server stored the submission; the form has been reset.
    Sent { notice: &'static str, ack: SubmissionResponse<Value> },
    /// Transport failure or non-2xx answer. Not retried.
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Invalid { .. } => INVALID_NOTICE,
            SubmitOutcome::Sent { notice, .. } => *notice,
            SubmitOutcome::Failed { .. } => FAILED_NOTICE,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

/// Talks to the intake service on behalf of the site's forms.
#[derive(Clone)]
pub struct IntakeClient {
    http: Client,
    base_url: Url,
}

impl IntakeClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    /// Validate `form`, then post its entries as JSON.
    ///
    /// A form that fails validation never reaches the network. On success
    /// the form is cleared, matching the page's reset after a sent message.
    pub async fn submit(&self, form: &mut Form) -> SubmitOutcome {
        let fields = form.validate();
        if !fields.is_empty() {
            debug!(?fields, "Submission blocked by validation");
            return SubmitOutcome::Invalid { fields };
        }

        let endpoint = form.kind.endpoint();
        let url = match self.base_url.join(endpoint) {
            Ok(url) => url,
            Err(e) => return SubmitOutcome::Failed { reason: e.to_string() },
        };

        match self.post(url, form.entries()).await {
            Ok(ack) => {
                info!(id = ack.id, "Submission to {} accepted", endpoint);
                form.reset();
                SubmitOutcome::Sent { notice: form.kind.sent_notice(), ack }
            }
            Err(e) => {
                error!("Submission to {} failed: {}", endpoint, e);
                SubmitOutcome::Failed { reason: e.to_string() }
            }
        }
    }

    async fn post(
        &self,
        url: Url,
        entries: Map<String, Value>,
    ) -> Result<SubmissionResponse<Value>, reqwest::Error> {
        self.http
            .post(url)
            .json(&entries)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(
            IntakeClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(IntakeClient::new("http://127.0.0.1:3000").is_ok());
    }

    #[test]
    fn notices() {
        let invalid = SubmitOutcome::Invalid { fields: vec!["email".into()] };
        assert_eq!(invalid.notice(), "Please fill in all required fields correctly.");

        let failed = SubmitOutcome::Failed { reason: "connection refused".into() };
        assert_eq!(failed.notice(), "An error occurred. Please try again.");
        assert!(!failed.is_sent());
    }
}
