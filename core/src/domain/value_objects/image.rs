//! Image blobs collected by the wizard (work photos, selfie, CNIC scans).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where an image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// A frame frozen from a live camera stream
    Camera,
    /// A file chosen through a picker
    Upload,
}

/// An in-memory image
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlob {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub source: ImageSource,
}

impl ImageBlob {
    /// Wrap an uploaded file
    pub fn from_upload(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: Some(file_name.into()),
            content_type: content_type.into(),
            bytes,
            source: ImageSource::Upload,
        }
    }

    /// Wrap a captured camera frame (encoded as JPEG by the device layer)
    pub fn from_camera(bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: None,
            content_type: "image/jpeg".to_string(),
            bytes,
            source: ImageSource::Camera,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Raw bytes would flood logs
impl std::fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBlob")
            .field("id", &self.id)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .field("source", &self.source)
            .finish()
    }
}
