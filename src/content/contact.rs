//! Contact form and its submission state machine.
//!
//! `Idle -> Submitting -> Success | Failed`. Success clears the form and the
//! banner returns to `Idle` after [`BANNER_DURATION`]. Invalid input fails
//! without sending anything, and a submit while one is in flight is ignored.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{GatewayError, ValidationError};
use crate::gateway::GatewayClient;
use crate::traits::Response;

pub const CONTACT_ENDPOINT: &str = "/contact";

/// How long the success banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

/// Form fields as typed. `subject` is kept for display and never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: String::new(),
            message: message.into(),
        }
    }

    /// Check required fields and the email shape.
    pub fn validate(&self) -> Result<ContactRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if email.is_empty() {
            return Err(ValidationError::MissingField { field: "email" });
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(ValidationError::InvalidEmail {
                value: email.to_string(),
            });
        }
        if message.is_empty() {
            return Err(ValidationError::MissingField { field: "message" });
        }

        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Carries a message fit for display
    Failed(String),
}

/// Contact form plus submission status.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub form: ContactForm,
    status: SubmissionStatus,
}

impl ContactSubmission {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Enter `Submitting` and return the request body.
    ///
    /// Returns `None` (and sends nothing) when a submission is already in
    /// flight or the form is invalid; the latter sets `Failed`.
    pub fn begin(&mut self) -> Option<ContactRequest> {
        if self.status == SubmissionStatus::Submitting {
            return None;
        }

        match self.form.validate() {
            Ok(request) => {
                self.status = SubmissionStatus::Submitting;
                Some(request)
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e.user_message());
                None
            }
        }
    }

    /// Record the outcome of a submission started with [`begin`](Self::begin).
    pub fn complete(&mut self, outcome: Result<Response, GatewayError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }

        self.status = match outcome {
            Ok(response) if response.status == 200 || response.status == 201 => {
                info!("Contact message sent");
                self.form = ContactForm::default();
                SubmissionStatus::Success
            }
            Ok(response) => {
                warn!("Contact submission answered with HTTP {}", response.status);
                SubmissionStatus::Failed(
                    GatewayError::request_failed(response.status, "").user_message(),
                )
            }
            Err(e) => {
                warn!(code = e.error_code(), "Contact submission failed: {}", e);
                SubmissionStatus::Failed(e.user_message())
            }
        };
    }

    /// Validate, send, and record the outcome.
    pub async fn submit(&mut self, gateway: &GatewayClient) -> &SubmissionStatus {
        if let Some(request) = self.begin() {
            let outcome = gateway.post_json(CONTACT_ENDPOINT, &request).await;
            self.complete(outcome);
        }
        &self.status
    }

    /// Return to `Idle` once the success banner has been up for
    /// [`BANNER_DURATION`]. Returns whether the banner was cleared.
    pub fn expire_banner(&mut self, elapsed: Duration) -> bool {
        if self.status == SubmissionStatus::Success && elapsed >= BANNER_DURATION {
            self.status = SubmissionStatus::Idle;
            return true;
        }
        false
    }
}
