//! Single-slot selfie value object.

use serde::{Deserialize, Serialize};

use super::image::{ImageBlob, ImageSource};

/// Holds zero or one selfie, whichever way it was obtained
///
/// Capture and upload are mutually exclusive: setting either replaces the
/// other, so the slot can never hold two images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "image", rename_all = "lowercase")]
pub enum SelfieSlot {
    #[default]
    Empty,
    Captured(ImageBlob),
    Uploaded(ImageBlob),
}

impl SelfieSlot {
    /// Fill the slot according to the blob's source
    pub fn set(&mut self, image: ImageBlob) {
        *self = match image.source {
            ImageSource::Camera => SelfieSlot::Captured(image),
            ImageSource::Upload => SelfieSlot::Uploaded(image),
        };
    }

    pub fn clear(&mut self) {
        *self = SelfieSlot::Empty;
    }

    pub fn image(&self) -> Option<&ImageBlob> {
        match self {
            SelfieSlot::Empty => None,
            SelfieSlot::Captured(image) | SelfieSlot::Uploaded(image) => Some(image),
        }
    }

    pub fn is_filled(&self) -> bool {
        !matches!(self, SelfieSlot::Empty)
    }

    /// Number of images held (always 0 or 1)
    pub fn count(&self) -> usize {
        usize::from(self.is_filled())
    }
}
