//! Years-of-experience buckets.

use serde::{Deserialize, Serialize};

use crate::errors::WizardError;

/// Experience is chosen from fixed buckets, never typed freely
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExperienceYears {
    #[default]
    LessThanOne,
    One,
    Three,
    Five,
    TenPlus,
}

impl ExperienceYears {
    pub const ALL: [ExperienceYears; 5] = [
        ExperienceYears::LessThanOne,
        ExperienceYears::One,
        ExperienceYears::Three,
        ExperienceYears::Five,
        ExperienceYears::TenPlus,
    ];

    /// Numeric value submitted to the backend
    pub fn years(&self) -> u8 {
        match self {
            ExperienceYears::LessThanOne => 0,
            ExperienceYears::One => 1,
            ExperienceYears::Three => 3,
            ExperienceYears::Five => 5,
            ExperienceYears::TenPlus => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceYears::LessThanOne => "Less than 1 year",
            ExperienceYears::One => "1+ years",
            ExperienceYears::Three => "3+ years",
            ExperienceYears::Five => "5+ years",
            ExperienceYears::TenPlus => "10+ years",
        }
    }
}

impl TryFrom<u8> for ExperienceYears {
    type Error = WizardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.years() == value)
            .ok_or(WizardError::InvalidExperienceYears { value })
    }
}

impl From<ExperienceYears> for u8 {
    fn from(value: ExperienceYears) -> Self {
        value.years()
    }
}
