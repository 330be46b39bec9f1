//! # Infrastructure Layer
//!
//! Concrete implementations behind the signup wizard's collaborator traits,
//! plus the process-level plumbing around them.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Config**: layered configuration loading (defaults, TOML file, env)
//! - **Telemetry**: `tracing` subscriber installation
//! - **Submission**: HTTP and in-memory registration sinks
//! - **Geocoding**: popular-city geocoder and fixed location provider

use std::sync::Arc;

use anyhow::Context;
use re_core::services::location::{Geocoder, LocationProvider};
use re_core::services::submission::SubmissionSink;
use re_core::services::wizard::WizardController;
use re_shared::SignupConfig;

// Re-export core types for convenience
pub use re_core::errors::*;

/// Configuration loading
pub mod config;

/// Geocoding and device location adapters
pub mod geocoding;

/// Registration submission sinks
pub mod submission;

/// Tracing subscriber setup
pub mod telemetry;

/// Infrastructure service container
///
/// Holds the collaborators a wizard needs, shared behind `Arc` so one
/// container can serve many wizard instances.
#[derive(Clone)]
pub struct SignupServices {
    pub config: SignupConfig,
    pub submission: Arc<dyn SubmissionSink>,
    pub geocoder: Arc<dyn Geocoder>,
    pub location: Arc<dyn LocationProvider>,
}

impl SignupServices {
    /// Build the container from an already loaded configuration
    pub fn from_config(config: SignupConfig) -> Result<Self, InfrastructureError> {
        let submission = submission::create_submission_sink(&config.submission)?;

        Ok(Self {
            config,
            submission,
            geocoder: Arc::new(geocoding::CityGeocoder::new()),
            location: Arc::new(geocoding::FixedLocationProvider::denied()),
        })
    }

    /// Start a fresh wizard configured from this container
    pub fn new_wizard(&self) -> WizardController {
        WizardController::new(self.config.wizard.clone())
    }
}

impl std::fmt::Debug for SignupServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupServices")
            .field("environment", &self.config.environment)
            .field("submission", &self.submission.name())
            .finish_non_exhaustive()
    }
}

/// Initialize infrastructure services
///
/// This function:
/// - Loads `.env` and the layered configuration
/// - Installs the tracing subscriber
/// - Builds the submission sink and location collaborators
pub fn initialize() -> anyhow::Result<SignupServices> {
    let config = config::load_config().context("Failed to load signup configuration")?;
    telemetry::init_tracing(&config.logging).context("Failed to initialize tracing")?;

    tracing::info!(
        environment = %config.environment,
        provider = ?config.submission.provider,
        "Initializing signup services"
    );

    let services = SignupServices::from_config(config).context("Failed to build signup services")?;

    tracing::info!(sink = services.submission.name(), "Signup services initialized");
    Ok(services)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration source or deserialization error
    #[error("Configuration error: {0}")]
    Settings(#[from] ::config::ConfigError),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
