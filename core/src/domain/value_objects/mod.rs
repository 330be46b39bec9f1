//! Value objects making up the wizard's field store.

pub mod cnic;
pub mod experience;
pub mod field;
pub mod image;
pub mod location;
pub mod otp_code;
pub mod selfie;
pub mod service_selection;
pub mod work_photos;

// Re-export commonly used types
pub use cnic::CnicNumber;
pub use experience::ExperienceYears;
pub use field::FieldName;
pub use image::{ImageBlob, ImageSource};
pub use location::ResolvedLocation;
pub use otp_code::{OtpCode, CODE_LENGTH};
pub use selfie::SelfieSlot;
pub use service_selection::{ServiceEntry, ServiceSelection};
pub use work_photos::{WorkPhotos, MAX_WORK_PHOTOS, MIN_WORK_PHOTOS};
