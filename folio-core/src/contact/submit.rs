//! Contact form submission
//!
//! The form posts to a hosted form-to-email endpoint. [`ContactSubmitter`]
//! is the port; [`Web3FormsClient`] is the HTTP implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// A validated message ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Submission errors
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered but refused the message
    #[error("Submission rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// Non-2xx response without a readable body
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No access key configured
    #[error("Contact form is not configured")]
    NotConfigured,
}

#[async_trait]
pub trait ContactSubmitter: Send + Sync + fmt::Debug {
    async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), SubmitError>;
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    access_key: &'a str,
}

#[derive(Debug, Deserialize)]
struct EndpointResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Client for web3forms-compatible endpoints.
#[derive(Debug, Clone)]
pub struct Web3FormsClient {
    http: reqwest::Client,
    endpoint: Url,
    access_key: String,
}

impl Web3FormsClient {
    pub fn new(
        endpoint: Url,
        access_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            access_key: access_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSubmitter for Web3FormsClient {
    async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), SubmitError> {
        if self.access_key.trim().is_empty() {
            return Err(SubmitError::NotConfigured);
        }

        let payload = Payload {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            access_key: &self.access_key,
        };

        log::info!("Submitting contact form to {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        interpret_response(status.as_u16(), status.is_success(), &body)
    }
}

/// The endpoint reports failures in a JSON body even on 4xx; only fall back
/// to the status code when the body is unreadable.
fn interpret_response(
    status: u16,
    is_success: bool,
    body: &str,
) -> Result<(), SubmitError> {
    match serde_json::from_str::<EndpointResponse>(body) {
        Ok(EndpointResponse { success: true, .. }) => Ok(()),
        Ok(EndpointResponse {
            success: false,
            message,
        }) => {
            log::warn!("Contact submission rejected ({}): {:?}", status, message);
            Err(SubmitError::Rejected(message.filter(|m| !m.trim().is_empty())))
        }
        Err(_) if !is_success => Err(SubmitError::Status(status)),
        Err(err) => Err(SubmitError::InvalidResponse(err.to_string())),
    }
}
