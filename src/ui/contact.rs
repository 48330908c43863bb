//! Contact form state machine: `Idle -> Submitting -> Success | Error`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "/api/contact";
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We will get back to you soon.";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
    Service,
}

/// The JSON body posted to the submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
}

/// Outbound capability for the form. Injected so the state machine runs in
/// tests without any network.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Posts the payload as JSON, returning the HTTP status code.
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<u16, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: String,
}

#[derive(Debug)]
pub struct ContactForm {
    values: FieldValues,
    errors: BTreeMap<Field, String>,
    status: SubmitStatus,
    error_message: Option<String>,
    endpoint: String,
    success_message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: FieldValues::default(),
            errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
            error_message: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// True while a submission is outstanding; the UI disables the submit
    /// control on this flag. Advisory only, not a server-side guarantee.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Editing a field clears that field's error, matching as-you-type
    /// error dismissal.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.errors.remove(&field);
        let value = value.into();
        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Phone => self.values.phone = value,
            Field::Message => self.values.message = value,
            Field::Service => self.values.service = value,
        }
    }

    /// Runs client-side validation, populating the field error map.
    /// Returns true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.values.name.chars().count() < MIN_NAME_LEN {
            errors.insert(
                Field::Name,
                "Name must contain at least 2 characters".to_string(),
            );
        }
        if !is_valid_email(&self.values.email) {
            errors.insert(
                Field::Email,
                "Please enter a valid email address".to_string(),
            );
        }
        if self.values.message.chars().count() < MIN_MESSAGE_LEN {
            errors.insert(
                Field::Message,
                "Message must contain at least 10 characters".to_string(),
            );
        }

        let ok = errors.is_empty();
        self.errors = errors;
        ok
    }

    fn payload(&self) -> SubmissionPayload {
        let optional = |s: &String| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        SubmissionPayload {
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            phone: optional(&self.values.phone),
            message: self.values.message.clone(),
            service: optional(&self.values.service),
        }
    }

    /// Validated submit. Invalid input leaves the form `Idle` with field
    /// errors set and performs no network call. Transport failures and
    /// non-success statuses land in `Error` with a user-facing message and
    /// never propagate to the caller.
    pub async fn submit(&mut self, transport: &dyn SubmitTransport) {
        if self.is_submitting() {
            return;
        }
        if !self.validate() {
            return;
        }

        self.errors.clear();
        self.error_message = None;
        self.status = SubmitStatus::Submitting;

        let payload = self.payload();
        match transport.post_json(&self.endpoint, &payload).await {
            Ok(status) if (200..300).contains(&status) => {
                self.status = SubmitStatus::Success;
                self.values = FieldValues::default();
            }
            Ok(_) => {
                self.status = SubmitStatus::Error;
                self.error_message =
                    Some("Failed to submit the form. Please try again.".to_string());
            }
            Err(e) => {
                self.status = SubmitStatus::Error;
                log::error!("Contact submission failed: {e}");
                self.error_message =
                    Some("An unexpected error occurred. Please try again.".to_string());
            }
        }
    }

    /// Explicit "send another message" action; only a successful form
    /// re-arms. There is no automatic timeout back to idle.
    pub fn send_another(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Transport backed by the shared HTTP client, used when the form runs
/// against a real endpoint.
pub struct HttpSubmitTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSubmitTransport {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SubmitTransport for HttpSubmitTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<u16, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}
