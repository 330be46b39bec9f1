//! HTTP registration sink
//!
//! POSTs the registration as JSON to the configured endpoint. Images travel
//! base64-encoded inline. Error bodies are decoded as the shared
//! [`ErrorResponse`] so the backend's message can reach the user.
//!
//! Timeouts, connection failures, 408, 429 and 5xx responses are retried with
//! exponential backoff; any other failure is returned immediately.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use re_core::domain::{ImageBlob, ImageSource, ServiceEntry};
use re_core::errors::SubmissionError;
use re_core::services::submission::{SubmissionReceipt, SubmissionSink};
use re_core::WorkerRegistration;
use re_shared::{phone, ErrorResponse, SubmissionConfig};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::InfrastructureError;

/// Image as sent over the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<&'a str>,
    content_type: &'a str,
    source: ImageSource,
    data: String,
}

impl<'a> From<&'a ImageBlob> for ImagePayload<'a> {
    fn from(image: &'a ImageBlob) -> Self {
        Self {
            file_name: image.file_name.as_deref(),
            content_type: &image.content_type,
            source: image.source,
            data: STANDARD.encode(&image.bytes),
        }
    }
}

/// Request body for the registration endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationPayload<'a> {
    full_name: &'a str,
    phone: &'a str,
    password: &'a str,
    verification_code: &'a str,
    services: &'a [ServiceEntry],
    address: &'a str,
    latitude: f64,
    longitude: f64,
    experience_years: u8,
    visiting_charge: u32,
    bio: &'a str,
    work_photos: Vec<ImagePayload<'a>>,
    selfie: Option<ImagePayload<'a>>,
    cnic: &'a str,
    cnic_front: Option<ImagePayload<'a>>,
    cnic_back: Option<ImagePayload<'a>>,
    language: &'a str,
}

impl<'a> From<&'a WorkerRegistration> for RegistrationPayload<'a> {
    fn from(registration: &'a WorkerRegistration) -> Self {
        Self {
            full_name: &registration.full_name,
            phone: &registration.phone,
            password: &registration.password,
            verification_code: &registration.verification_code,
            services: &registration.services,
            address: &registration.address,
            latitude: registration.coordinate.latitude,
            longitude: registration.coordinate.longitude,
            experience_years: registration.experience_years,
            visiting_charge: registration.visiting_charge,
            bio: &registration.bio,
            work_photos: registration.work_photos.iter().map(ImagePayload::from).collect(),
            selfie: registration.selfie.as_ref().map(ImagePayload::from),
            cnic: &registration.cnic,
            cnic_front: registration.cnic_front.as_ref().map(ImagePayload::from),
            cnic_back: registration.cnic_back.as_ref().map(ImagePayload::from),
            language: registration.language.code(),
        }
    }
}

/// Success body from the registration endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AcceptedResponse {
    #[serde(alias = "id")]
    registration_id: String,
    #[serde(default = "Utc::now")]
    submitted_at: DateTime<Utc>,
}

/// Failure of a single attempt
struct AttemptError {
    error: SubmissionError,
    retryable: bool,
}

impl AttemptError {
    fn retryable(error: SubmissionError) -> Self {
        Self { error, retryable: true }
    }

    fn fatal(error: SubmissionError) -> Self {
        Self { error, retryable: false }
    }
}

/// Registration sink backed by an HTTP endpoint
pub struct HttpSubmissionSink {
    client: reqwest::Client,
    endpoint: Url,
    max_attempts: u32,
    retry_delay: Duration,
}

impl HttpSubmissionSink {
    pub fn new(config: &SubmissionConfig) -> Result<Self, InfrastructureError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid submission endpoint '{}': {}",
                config.endpoint, e
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(endpoint = %endpoint, "HTTP submission sink initialized");

        Ok(Self {
            client,
            endpoint,
            max_attempts: config.max_attempts.max(1),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post_once(&self, body: &[u8]) -> Result<SubmissionReceipt, AttemptError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(|e| {
                let error = SubmissionError::Network { message: e.to_string() };
                if e.is_timeout() || e.is_connect() {
                    AttemptError::retryable(error)
                } else {
                    AttemptError::fatal(error)
                }
            })?;

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(status = %status, error = %e, "Could not read registration response body");
                String::new()
            }
        };

        if status.is_success() {
            return Ok(accepted_receipt(&text));
        }

        let retryable = status.is_server_error()
            || status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT;

        let error = match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) if !retryable => SubmissionError::Rejected {
                message: body.summary().to_string(),
            },
            _ => SubmissionError::Network {
                message: format!("Registration endpoint responded with {}", status),
            },
        };

        if retryable {
            Err(AttemptError::retryable(error))
        } else {
            Err(AttemptError::fatal(error))
        }
    }
}

/// Backoff for the following attempt, saturating instead of overflowing
fn next_delay(delay: Duration) -> Duration {
    delay.saturating_mul(2)
}

/// Receipt from a success body; an unreadable body still means the backend accepted
fn accepted_receipt(text: &str) -> SubmissionReceipt {
    match serde_json::from_str::<AcceptedResponse>(text) {
        Ok(accepted) => SubmissionReceipt {
            registration_id: accepted.registration_id,
            submitted_at: accepted.submitted_at,
        },
        Err(e) => {
            warn!(error = %e, "Registration accepted without a readable receipt");
            SubmissionReceipt::new(uuid::Uuid::new_v4().to_string())
        }
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, registration: &WorkerRegistration) -> Result<SubmissionReceipt, SubmissionError> {
        let payload = RegistrationPayload::from(registration);
        let body = serde_json::to_vec(&payload).map_err(|e| SubmissionError::Encoding {
            message: e.to_string(),
        })?;

        info!(
            phone = %phone::mask_phone_number(&registration.phone),
            bytes = body.len(),
            "Posting worker registration"
        );

        let mut attempts = 0;
        let mut delay = self.retry_delay;

        loop {
            attempts += 1;
            debug!("Registration attempt {}/{}", attempts, self.max_attempts);

            match self.post_once(&body).await {
                Ok(receipt) => {
                    info!(
                        registration_id = %receipt.registration_id,
                        attempts,
                        "Registration accepted"
                    );
                    return Ok(receipt);
                }
                Err(AttemptError { error, retryable }) => {
                    if !retryable || attempts >= self.max_attempts {
                        warn!(
                            error = %error,
                            attempts,
                            "Registration submission failed"
                        );
                        return Err(error);
                    }

                    warn!(
                        error = %error,
                        "Registration attempt {}/{} failed, retrying after {:?}",
                        attempts,
                        self.max_attempts,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = next_delay(delay);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
