//! Ordered, capped collection of work photos.

use serde::{Deserialize, Serialize};

use super::image::ImageBlob;
use crate::errors::WizardError;

/// Fewest photos a worker must provide
pub const MIN_WORK_PHOTOS: usize = 2;

/// Most photos a worker may provide
pub const MAX_WORK_PHOTOS: usize = 6;

/// Work photos in the order they were added
///
/// The maximum is enforced on every insert and on deserialization. The
/// minimum is a readiness threshold, since the list necessarily starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ImageBlob>", into = "Vec<ImageBlob>")]
pub struct WorkPhotos {
    photos: Vec<ImageBlob>,
}

impl WorkPhotos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a photo, refusing once the cap is reached
    pub fn push(&mut self, photo: ImageBlob) -> Result<(), WizardError> {
        if self.photos.len() >= MAX_WORK_PHOTOS {
            return Err(WizardError::PhotoLimitReached {
                max: MAX_WORK_PHOTOS,
            });
        }
        self.photos.push(photo);
        Ok(())
    }

    /// Remove the photo at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Result<ImageBlob, WizardError> {
        if index >= self.photos.len() {
            return Err(WizardError::PhotoIndexOutOfRange {
                index,
                len: self.photos.len(),
            });
        }
        Ok(self.photos.remove(index))
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn meets_minimum(&self) -> bool {
        self.photos.len() >= MIN_WORK_PHOTOS
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_WORK_PHOTOS - self.photos.len()
    }

    pub fn as_slice(&self) -> &[ImageBlob] {
        &self.photos
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageBlob> {
        self.photos.iter()
    }
}

impl TryFrom<Vec<ImageBlob>> for WorkPhotos {
    type Error = WizardError;

    fn try_from(photos: Vec<ImageBlob>) -> Result<Self, Self::Error> {
        if photos.len() > MAX_WORK_PHOTOS {
            return Err(WizardError::PhotoLimitReached {
                max: MAX_WORK_PHOTOS,
            });
        }
        Ok(Self { photos })
    }
}

impl From<WorkPhotos> for Vec<ImageBlob> {
    fn from(value: WorkPhotos) -> Self {
        value.photos
    }
}
