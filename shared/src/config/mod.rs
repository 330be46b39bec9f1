//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `submission` - Registration backend settings
//! - `wizard` - Signup wizard behaviour

pub mod environment;
pub mod submission;
pub mod wizard;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use submission::{SubmissionConfig, SubmissionProvider};
pub use wizard::WizardConfig;

/// Complete configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignupConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub wizard: WizardConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl SignupConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            wizard: WizardConfig::default(),
            submission: SubmissionConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            wizard: WizardConfig {
                landing_route: String::from("/worker/pending-verification"),
                ..WizardConfig::default()
            },
            submission: SubmissionConfig::http("https://api.renoveasy.com/api/v1/workers/register"),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Preset for an environment; staging reuses development with staging logging
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }
}
