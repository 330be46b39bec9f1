//! Wizard behaviour settings

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Settings for the signup wizard controller
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WizardConfig {
    /// Seconds the user must wait before a new one-time code can be requested
    #[serde(default = "default_resend_cooldown")]
    pub resend_cooldown_seconds: u32,

    /// Route the presentation layer navigates to after a successful submission
    #[serde(default = "default_landing_route")]
    pub landing_route: String,

    /// Language the wizard starts in
    #[serde(default)]
    pub default_language: Language,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: default_resend_cooldown(),
            landing_route: default_landing_route(),
            default_language: Language::default(),
        }
    }
}

fn default_resend_cooldown() -> u32 {
    60
}

fn default_landing_route() -> String {
    String::from("/")
}
