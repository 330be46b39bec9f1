//! Unit tests for submission sinks

use re_core::domain::{ImageBlob, ServiceSelection};
use re_core::WorkerRegistration;
use re_shared::{Coordinate, Language};

pub mod http_tests;

pub fn registration() -> WorkerRegistration {
    let mut services = ServiceSelection::new();
    services.select("plumbing", "Plumbing", "leak-repair");

    WorkerRegistration {
        full_name: "Bilal Ahmed".to_string(),
        phone: "+923001234567".to_string(),
        password: "Secret1!".to_string(),
        verification_code: "123456".to_string(),
        services: services.entries().to_vec(),
        address: "Lahore, Pakistan".to_string(),
        coordinate: Coordinate::new(31.5204, 74.3587),
        experience_years: 3,
        visiting_charge: 500,
        bio: "Ten years of household plumbing".to_string(),
        work_photos: vec![
            ImageBlob::from_upload("sink.jpg", "image/jpeg", vec![1, 2, 3]),
            ImageBlob::from_upload("pipe.jpg", "image/jpeg", vec![4, 5, 6]),
        ],
        selfie: Some(ImageBlob::from_camera(vec![0xFF, 0xD8])),
        cnic: "35202-1234567-1".to_string(),
        cnic_front: Some(ImageBlob::from_upload("front.jpg", "image/jpeg", vec![7])),
        cnic_back: Some(ImageBlob::from_upload("back.jpg", "image/jpeg", vec![8])),
        language: Language::English,
    }
}
