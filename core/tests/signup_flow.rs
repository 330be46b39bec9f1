//! Integration tests walking the worker signup end to end

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use re_core::domain::{ExperienceYears, FieldName, ImageBlob, SelfieSlot};
use re_core::errors::{DeviceError, SubmissionError};
use re_core::services::camera::{CameraDevice, MediaStream};
use re_core::services::submission::{SubmissionReceipt, SubmissionSink};
use re_core::services::wizard::{
    AdvanceOutcome, FieldEdit, StepId, SubmitOutcome, WizardController, WizardSignal,
};
use re_core::WorkerRegistration;
use re_shared::{Language, WizardConfig};

struct RecordingSink {
    registrations: Mutex<Vec<WorkerRegistration>>,
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn submit(&self, registration: &WorkerRegistration) -> Result<SubmissionReceipt, SubmissionError> {
        self.registrations.lock().unwrap().push(registration.clone());
        Ok(SubmissionReceipt::new("W-1001"))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

struct FrontCamera;

struct FrontStream;

impl MediaStream for FrontStream {
    fn capture_frame(&mut self) -> Result<ImageBlob, DeviceError> {
        Ok(ImageBlob::from_camera(vec![0xFF, 0xD8, 0xFF, 0xE0]))
    }

    fn stop(&mut self) {}
}

#[async_trait]
impl CameraDevice for FrontCamera {
    async fn acquire(&self) -> Result<Box<dyn MediaStream>, DeviceError> {
        Ok(Box::new(FrontStream))
    }
}

fn photo(name: &str) -> ImageBlob {
    ImageBlob::from_upload(name, "image/jpeg", vec![1, 2, 3])
}

fn apply(wizard: &mut WizardController, edit: FieldEdit) {
    wizard.apply(edit).expect("Edit should be accepted");
}

fn advance(wizard: &mut WizardController) -> usize {
    match wizard.advance().expect("Advance should not error") {
        AdvanceOutcome::Advanced { step } => step,
        other => panic!("expected to advance, got {:?} with {:?}", other, wizard.errors()),
    }
}

#[test]
fn test_identity_and_code_scenario() {
    let mut wizard = WizardController::new(WizardConfig::default());

    apply(&mut wizard, FieldEdit::FullName("Bilal".into()));
    apply(&mut wizard, FieldEdit::Phone("0300-1234567".into()));
    apply(&mut wizard, FieldEdit::Password("Secret1!".into()));
    apply(&mut wizard, FieldEdit::ConfirmPassword("Secret1!".into()));
    assert_eq!(advance(&mut wizard), 2);

    for (position, digit) in "12345".chars().enumerate() {
        apply(&mut wizard, FieldEdit::CodeDigit { position, digit });
    }
    let outcome = wizard.advance().expect("Advance should not error");
    assert!(matches!(outcome, AdvanceOutcome::Blocked { .. }));
    assert!(wizard.errors().contains(FieldName::Code));
    assert_eq!(wizard.step_index(), 2);

    apply(&mut wizard, FieldEdit::CodeDigit { position: 5, digit: '6' });
    assert_eq!(wizard.store().code.value(), "123456");
    assert_eq!(advance(&mut wizard), 3);
}

#[test]
fn test_resend_countdown_on_code_step() {
    let mut wizard = WizardController::new(WizardConfig::default());
    apply(&mut wizard, FieldEdit::FullName("Ayesha Khan".into()));
    apply(&mut wizard, FieldEdit::Phone("+92 321 7654321".into()));
    apply(&mut wizard, FieldEdit::Password("Str0ng#Pass".into()));
    apply(&mut wizard, FieldEdit::ConfirmPassword("Str0ng#Pass".into()));
    advance(&mut wizard);

    assert_eq!(wizard.countdown().label(), "1:00");
    assert!(wizard.resend_code().is_err());

    apply(&mut wizard, FieldEdit::CodePaste("4242".into()));
    for _ in 0..60 {
        wizard.tick(Duration::from_secs(1));
    }
    assert!(wizard.can_resend_code());

    wizard.resend_code().expect("Resend should be available");
    assert!(wizard.store().code.is_empty());
    assert_eq!(wizard.countdown().remaining_seconds(), 60);
}

#[tokio::test]
async fn test_complete_signup() {
    let mut wizard = WizardController::new(WizardConfig {
        landing_route: "/worker/pending-verification".into(),
        default_language: Language::Urdu,
        ..WizardConfig::default()
    });

    apply(&mut wizard, FieldEdit::FullName("  Imran Ali ".into()));
    apply(&mut wizard, FieldEdit::Phone("03451234567".into()));
    apply(&mut wizard, FieldEdit::Password("Wiring#2024".into()));
    apply(&mut wizard, FieldEdit::ConfirmPassword("Wiring#2024".into()));
    advance(&mut wizard);

    apply(&mut wizard, FieldEdit::CodePaste("654321".into()));
    advance(&mut wizard);

    apply(&mut wizard, FieldEdit::toggle_sub_service("electrical", "Electrical", "wiring"));
    apply(&mut wizard, FieldEdit::toggle_sub_service("electrical", "Electrical", "fan-installation"));
    advance(&mut wizard);

    wizard
        .choose_city(re_core::services::location::PopularCity::Islamabad)
        .expect("City should apply");
    advance(&mut wizard);

    apply(&mut wizard, FieldEdit::ExperienceYears(ExperienceYears::Five));
    apply(&mut wizard, FieldEdit::VisitingCharge(1200));
    apply(&mut wizard, FieldEdit::Bio("Residential wiring and repairs".into()));
    advance(&mut wizard);

    apply(&mut wizard, FieldEdit::AddWorkPhoto(photo("panel.jpg")));
    apply(&mut wizard, FieldEdit::AddWorkPhoto(photo("fan.jpg")));
    apply(&mut wizard, FieldEdit::AddWorkPhoto(photo("lights.jpg")));
    assert_eq!(advance(&mut wizard), 7);

    assert_eq!(wizard.current_step().id, StepId::Selfie);
    wizard.start_camera(&FrontCamera).await.expect("Camera should start");
    wizard.capture_selfie().expect("Capture should succeed");
    assert!(matches!(wizard.store().selfie, SelfieSlot::Captured(_)));
    advance(&mut wizard);

    apply(&mut wizard, FieldEdit::CnicInput("61101-9876543-2".into()));
    apply(&mut wizard, FieldEdit::CnicFront(photo("front.jpg")));
    apply(&mut wizard, FieldEdit::CnicBack(photo("back.jpg")));

    let sink = RecordingSink {
        registrations: Mutex::new(Vec::new()),
    };
    let outcome = wizard.submit(&sink).await.expect("Submit should not error");
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    assert_eq!(wizard.receipt().map(|r| r.registration_id.as_str()), Some("W-1001"));

    let signals = wizard.take_signals();
    assert_eq!(
        signals.last(),
        Some(&WizardSignal::NavigateTo {
            route: "/worker/pending-verification".into()
        })
    );

    let registrations = sink.registrations.lock().unwrap();
    let registration = &registrations[0];
    assert_eq!(registration.full_name, "Imran Ali");
    assert_eq!(registration.phone, "+923451234567");
    assert_eq!(registration.verification_code, "654321");
    assert_eq!(registration.services.len(), 1);
    assert_eq!(registration.services[0].sub_service_ids().len(), 2);
    assert_eq!(registration.address, "Islamabad, Pakistan");
    assert_eq!(registration.experience_years, 5);
    assert_eq!(registration.work_photos.len(), 3);
    assert!(registration.selfie.is_some());
    assert_eq!(registration.cnic, "61101-9876543-2");
    assert_eq!(registration.language, Language::Urdu);

    let json = serde_json::to_value(registration).expect("Registration should serialize");
    assert!(json.get("confirmPassword").is_none());
    assert_eq!(json["visitingCharge"], 1200);
}
