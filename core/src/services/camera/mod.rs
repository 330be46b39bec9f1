//! Camera access for the selfie step
//!
//! The device layer hands out a live [`MediaStream`]; the wizard keeps it
//! inside a [`CameraSession`], which stops the stream when dropped. Every exit
//! path (capture, step change, upload, submit, dropping the controller)
//! releases the camera by dropping the session.

use async_trait::async_trait;

use crate::domain::value_objects::{ImageBlob, ImageSource};
use crate::errors::DeviceError;

/// A device able to open a live video stream
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Request camera access and start streaming
    async fn acquire(&self) -> Result<Box<dyn MediaStream>, DeviceError>;
}

/// A live camera stream
pub trait MediaStream: Send {
    /// Freeze the current frame into an image
    fn capture_frame(&mut self) -> Result<ImageBlob, DeviceError>;

    /// Stop every track of the stream
    fn stop(&mut self);
}

/// An acquired camera stream, released on drop
pub struct CameraSession {
    stream: Box<dyn MediaStream>,
}

impl CameraSession {
    /// Acquire a stream from the device
    pub async fn open(device: &dyn CameraDevice) -> Result<Self, DeviceError> {
        let stream = device.acquire().await?;
        tracing::debug!(event = "camera_acquired", "Camera stream acquired");
        Ok(Self { stream })
    }

    /// Capture a single frame
    ///
    /// The frame is always tagged as a camera image, whatever the device
    /// reported.
    pub fn capture(&mut self) -> Result<ImageBlob, DeviceError> {
        let mut image = self.stream.capture_frame()?;
        image.source = ImageSource::Camera;
        tracing::debug!(
            image_id = %image.id,
            size = image.size(),
            event = "selfie_captured",
            "Frame captured from camera"
        );
        Ok(image)
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stream.stop();
        tracing::debug!(event = "camera_released", "Camera stream released");
    }
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession").finish_non_exhaustive()
    }
}
