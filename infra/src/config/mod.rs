//! Configuration management for infrastructure services
//!
//! Sources, lowest precedence first:
//! - the environment preset (`SignupConfig::for_environment`)
//! - an optional `config.<environment>.toml` in the config directory
//! - `SIGNUP__*` environment variables, `__` separating nested keys
//!   (e.g. `SIGNUP__WIZARD__RESEND_COOLDOWN_SECONDS=30`)
//!
//! The environment itself comes from `SIGNUP_ENV` (or `ENVIRONMENT`).

use std::path::Path;

use ::config::{Config, Environment as EnvironmentSource, File};
use re_shared::{Environment, SignupConfig};

use crate::InfrastructureError;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SIGNUP";

/// Directory searched for `config.<environment>.toml`, overridable with `SIGNUP_CONFIG_DIR`
pub fn config_dir() -> String {
    std::env::var("SIGNUP_CONFIG_DIR").unwrap_or_else(|_| String::from("."))
}

/// Load configuration for the current process
pub fn load_config() -> Result<SignupConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let environment = Environment::from_env();
    load_config_for(environment, Path::new(&config_dir()))
}

/// Load configuration for a given environment from a given directory
pub fn load_config_for(
    environment: Environment,
    dir: &Path,
) -> Result<SignupConfig, InfrastructureError> {
    let preset = SignupConfig::for_environment(environment);
    let file = dir.join(environment.config_file());

    tracing::debug!(
        environment = %environment,
        file = %file.display(),
        "Loading signup configuration"
    );

    let settings = Config::builder()
        .add_source(Config::try_from(&preset)?)
        .add_source(File::from(file).required(false))
        .add_source(
            EnvironmentSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: SignupConfig = settings.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &SignupConfig) -> Result<(), InfrastructureError> {
    if config.submission.timeout_secs == 0 {
        return Err(InfrastructureError::Config(
            "submission.timeout_secs must be greater than zero".to_string(),
        ));
    }
    if !config.wizard.landing_route.starts_with('/') {
        return Err(InfrastructureError::Config(format!(
            "wizard.landing_route must be an absolute path, got '{}'",
            config.wizard.landing_route
        )));
    }
    Ok(())
}
