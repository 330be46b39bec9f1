//! Wizard controller: owns the field store and drives the step flow.

use std::time::Duration;

use re_shared::{phone, Language, WizardConfig};

use crate::domain::entities::{FieldStore, WorkerRegistration};
use crate::domain::value_objects::{CnicNumber, FieldName, SelfieSlot};
use crate::errors::{DomainResult, WizardError};
use crate::services::camera::{CameraDevice, CameraSession};
use crate::services::location::{self, Geocoder, LocationProvider, PopularCity, Suggestion};
use crate::services::submission::{SubmissionReceipt, SubmissionSink};

use super::countdown::ResendCountdown;
use super::edit::FieldEdit;
use super::error_map::ErrorMap;
use super::messages::{self, MessageKey};
use super::registry::{StepDefinition, StepId, StepRegistry};
use super::types::{AdvanceOutcome, EditOutcome, SubmitOutcome, WizardPhase, WizardSignal};
use super::validator::Validator;

/// Multi-step signup controller
///
/// Single owner of the [`FieldStore`]. All mutation goes through `&mut self`,
/// so edits, navigation, camera access and submission can never interleave.
/// Side effects for the presentation layer (scrolling, navigation, sending a
/// code) are queued as [`WizardSignal`]s and drained with
/// [`WizardController::take_signals`].
#[derive(Debug)]
pub struct WizardController {
    registry: StepRegistry,
    config: WizardConfig,
    store: FieldStore,
    /// 1-based, always within the registry
    step: usize,
    language: Language,
    errors: ErrorMap,
    general_error: Option<String>,
    phase: WizardPhase,
    countdown: ResendCountdown,
    camera: Option<CameraSession>,
    signals: Vec<WizardSignal>,
    receipt: Option<SubmissionReceipt>,
}

impl WizardController {
    /// Create a controller for the worker signup
    pub fn new(config: WizardConfig) -> Self {
        Self::with_registry(StepRegistry::worker_signup(), config)
    }

    /// Create a controller over a custom step table
    pub fn with_registry(registry: StepRegistry, config: WizardConfig) -> Self {
        let countdown = ResendCountdown::new(config.resend_cooldown_seconds);
        let language = config.default_language;

        Self {
            registry,
            config,
            store: FieldStore::new(),
            step: 1,
            language,
            errors: ErrorMap::new(),
            general_error: None,
            phase: WizardPhase::Collecting,
            countdown,
            camera: None,
            signals: Vec::new(),
            receipt: None,
        }
    }

    // ---------------------------------------------------------------------
    // Introspection
    // ---------------------------------------------------------------------

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.registry.len()
    }

    pub fn current_step(&self) -> &StepDefinition {
        self.registry
            .get(self.step)
            .unwrap_or_else(|| self.registry.first())
    }

    /// Label of the current step in the current language
    pub fn current_label(&self) -> String {
        messages::message(self.current_step().label_key, self.language)
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.registry.len()
    }

    /// Completed fraction of the flow, 1/N on the first step and 1.0 on the last
    pub fn progress(&self) -> f32 {
        self.step as f32 / self.registry.len() as f32
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// True only while a submit future is in flight; a dropped submit
    /// returns the wizard to collecting
    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn countdown(&self) -> &ResendCountdown {
        &self.countdown
    }

    pub fn can_resend_code(&self) -> bool {
        self.countdown.is_finished()
    }

    pub fn is_camera_active(&self) -> bool {
        self.camera.is_some()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language; messages already shown are not re-rendered
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip between the two supported languages
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Drain queued signals
    pub fn take_signals(&mut self) -> Vec<WizardSignal> {
        std::mem::take(&mut self.signals)
    }

    // ---------------------------------------------------------------------
    // Field edits
    // ---------------------------------------------------------------------

    /// Apply a single edit to the field store
    pub fn apply(&mut self, edit: FieldEdit) -> DomainResult<EditOutcome> {
        self.ensure_collecting()?;
        let field = edit.field();
        if matches!(edit, FieldEdit::UploadSelfie(_)) {
            self.release_camera();
        }
        let store = &mut self.store;

        let applied = match edit {
            FieldEdit::FullName(value) => {
                store.identity.full_name = value;
                true
            }
            FieldEdit::Phone(value) => {
                store.identity.phone = value;
                true
            }
            FieldEdit::Password(value) => {
                store.identity.password = value;
                true
            }
            FieldEdit::ConfirmPassword(value) => {
                store.identity.confirm_password = value;
                true
            }
            FieldEdit::CodeDigit { position, digit } => store.code.enter_digit(position, digit),
            FieldEdit::CodeBackspace { position } => store.code.backspace(position),
            FieldEdit::CodePaste(text) => store.code.paste(&text),
            FieldEdit::ToggleSubService {
                service_id,
                service_name,
                sub_service_id,
            } => {
                store.services.toggle(&service_id, &service_name, &sub_service_id);
                true
            }
            FieldEdit::RemoveService { service_id } => store.services.remove_service(&service_id),
            FieldEdit::Address(text) => {
                store.location.address = text;
                true
            }
            FieldEdit::Location(resolved) => {
                store.location.apply(resolved);
                true
            }
            FieldEdit::ExperienceYears(years) => {
                store.experience.years = years;
                true
            }
            FieldEdit::VisitingCharge(charge) => {
                store.experience.visiting_charge = charge;
                true
            }
            FieldEdit::Bio(text) => {
                store.experience.bio = text;
                true
            }
            FieldEdit::AddWorkPhoto(photo) => {
                store.work_photos.push(photo)?;
                true
            }
            FieldEdit::RemoveWorkPhoto(index) => {
                store.work_photos.remove(index)?;
                true
            }
            FieldEdit::UploadSelfie(image) => {
                store.selfie = SelfieSlot::Uploaded(image);
                true
            }
            FieldEdit::ClearSelfie => {
                store.selfie.clear();
                true
            }
            FieldEdit::CnicInput(text) => {
                store.identity_document.number = CnicNumber::from_input(&text);
                true
            }
            FieldEdit::CnicFront(image) => {
                store.identity_document.front = Some(image);
                true
            }
            FieldEdit::CnicBack(image) => {
                store.identity_document.back = Some(image);
                true
            }
            FieldEdit::RemoveCnicFront => store.identity_document.front.take().is_some(),
            FieldEdit::RemoveCnicBack => store.identity_document.back.take().is_some(),
        };

        if applied {
            self.errors.clear_field(field);
            Ok(EditOutcome::Applied)
        } else {
            Ok(EditOutcome::Ignored)
        }
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Validate the current step and move to the next one
    pub fn advance(&mut self) -> DomainResult<AdvanceOutcome> {
        self.ensure_collecting()?;

        if self.is_last_step() {
            return Ok(AdvanceOutcome::MustSubmit);
        }

        let errors = self.validate_current();
        if !errors.is_empty() {
            let invalid_fields = errors.len();
            tracing::debug!(
                step = %self.current_step().id,
                invalid_fields,
                event = "step_blocked",
                "Step validation failed"
            );
            self.errors = errors;
            return Ok(AdvanceOutcome::Blocked { invalid_fields });
        }

        let from = self.current_step().id;
        self.release_camera();
        self.step += 1;
        self.errors = ErrorMap::new();
        self.general_error = None;
        self.signals.push(WizardSignal::ScrollToTop);

        if self.current_step().id == StepId::Code {
            self.request_code();
        }

        tracing::info!(
            from = %from,
            to = %self.current_step().id,
            step = self.step,
            event = "step_advanced",
            "Wizard advanced"
        );

        Ok(AdvanceOutcome::Advanced { step: self.step })
    }

    /// Move back one step without validating; stays put on the first step
    pub fn retreat(&mut self) -> DomainResult<usize> {
        self.ensure_collecting()?;

        self.errors = ErrorMap::new();
        self.general_error = None;

        if self.step > 1 {
            self.release_camera();
            self.step -= 1;
            tracing::debug!(step = self.step, event = "step_retreated", "Wizard moved back");
        }

        Ok(self.step)
    }

    // ---------------------------------------------------------------------
    // Submission
    // ---------------------------------------------------------------------

    /// Validate the last step and hand the registration to the sink
    ///
    /// A sink failure keeps every field for a retry and sets the general
    /// error. Success resets the store and queues navigation to the landing
    /// route.
    pub async fn submit(&mut self, sink: &dyn SubmissionSink) -> DomainResult<SubmitOutcome> {
        self.ensure_collecting()?;

        if !self.is_last_step() {
            return Err(WizardError::NotOnLastStep {
                current: self.step,
                last: self.registry.len(),
            }
            .into());
        }

        let errors = self.validate_current();
        if !errors.is_empty() {
            let invalid_fields = errors.len();
            self.errors = errors;
            return Ok(SubmitOutcome::Blocked { invalid_fields });
        }

        self.errors = ErrorMap::new();
        self.general_error = None;
        self.release_camera();

        let registration = WorkerRegistration::from_store(&self.store, self.language);
        tracing::info!(
            sink = sink.name(),
            phone = %phone::mask_phone_number(&registration.phone),
            event = "submission_started",
            "Submitting worker registration"
        );

        let result = {
            let pending = PendingSubmission::begin(&mut self.phase);
            let result = sink.submit(&registration).await;
            pending.finish();
            result
        };

        match result {
            Ok(receipt) => {
                tracing::info!(
                    sink = sink.name(),
                    registration_id = %receipt.registration_id,
                    event = "submission_succeeded",
                    "Worker registration submitted"
                );
                self.phase = WizardPhase::Submitted;
                self.store = FieldStore::new();
                self.countdown.reset();
                self.receipt = Some(receipt.clone());
                self.signals.push(WizardSignal::NavigateTo {
                    route: self.config.landing_route.clone(),
                });
                Ok(SubmitOutcome::Submitted(receipt))
            }
            Err(error) => {
                tracing::warn!(
                    sink = sink.name(),
                    error = %error,
                    event = "submission_failed",
                    "Worker registration failed"
                );
                let message = error
                    .user_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| messages::message(MessageKey::SubmissionFailed, self.language));
                self.general_error = Some(message.clone());
                Ok(SubmitOutcome::Failed { message })
            }
        }
    }

    // ---------------------------------------------------------------------
    // One-time code
    // ---------------------------------------------------------------------

    /// Advance the resend countdown by wall time
    pub fn tick(&mut self, elapsed: Duration) {
        self.countdown.tick(elapsed);
    }

    /// Request a fresh code once the cooldown has run out
    pub fn resend_code(&mut self) -> DomainResult<()> {
        self.ensure_collecting()?;
        self.ensure_on(StepId::Code)?;

        if !self.countdown.is_finished() {
            return Err(WizardError::ResendCooldown {
                remaining_seconds: self.countdown.remaining_seconds(),
            }
            .into());
        }

        self.store.code.clear();
        self.errors.clear_field(FieldName::Code);
        self.request_code();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Camera
    // ---------------------------------------------------------------------

    /// Open the camera for a selfie
    ///
    /// Any previous stream is released first. On success the selfie slot is
    /// emptied so the live preview replaces an uploaded image; on failure
    /// nothing changes.
    pub async fn start_camera(&mut self, device: &dyn CameraDevice) -> DomainResult<()> {
        self.ensure_collecting()?;
        self.ensure_on(StepId::Selfie)?;
        self.release_camera();

        let session = match CameraSession::open(device).await {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(error = %error, event = "camera_unavailable", "Could not start camera");
                return Err(error.into());
            }
        };

        self.store.selfie.clear();
        self.camera = Some(session);
        Ok(())
    }

    /// Freeze the live frame into the selfie slot and release the camera
    pub fn capture_selfie(&mut self) -> DomainResult<()> {
        self.ensure_collecting()?;
        let session = self.camera.as_mut().ok_or(WizardError::CameraNotActive)?;

        let image = session.capture()?;
        self.store.selfie = SelfieSlot::Captured(image);
        self.errors.clear_field(FieldName::Selfie);
        self.release_camera();
        Ok(())
    }

    pub fn stop_camera(&mut self) {
        self.release_camera();
    }

    // ---------------------------------------------------------------------
    // Location
    // ---------------------------------------------------------------------

    pub fn choose_city(&mut self, city: PopularCity) -> DomainResult<EditOutcome> {
        self.apply(FieldEdit::Location(city.resolved()))
    }

    pub async fn choose_suggestion(
        &mut self,
        geocoder: &dyn Geocoder,
        suggestion: &Suggestion,
    ) -> DomainResult<EditOutcome> {
        self.ensure_collecting()?;
        let resolved = geocoder.resolve(suggestion).await?;
        self.apply(FieldEdit::Location(resolved))
    }

    /// Fill address and coordinates from the device position
    pub async fn use_current_location(
        &mut self,
        provider: &dyn LocationProvider,
        geocoder: &dyn Geocoder,
    ) -> DomainResult<EditOutcome> {
        self.ensure_collecting()?;
        let resolved = location::locate(provider, geocoder).await?;
        self.apply(FieldEdit::Location(resolved))
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn validate_current(&self) -> ErrorMap {
        Validator::new(&self.registry, self.language).validate(self.step, &self.store)
    }

    fn ensure_collecting(&self) -> Result<(), WizardError> {
        match self.phase {
            WizardPhase::Collecting => Ok(()),
            WizardPhase::Submitting => Err(WizardError::SubmissionInProgress),
            WizardPhase::Submitted => Err(WizardError::AlreadySubmitted),
        }
    }

    fn ensure_on(&self, expected: StepId) -> Result<(), WizardError> {
        if self.current_step().id == expected {
            Ok(())
        } else {
            Err(WizardError::NotOnStep {
                expected: expected.to_string(),
            })
        }
    }

    fn request_code(&mut self) {
        let phone_number = phone::to_e164(&self.store.identity.phone)
            .unwrap_or_else(|| self.store.identity.phone.trim().to_string());

        tracing::info!(
            phone = %phone::mask_phone_number(&phone_number),
            event = "code_requested",
            "Verification code requested"
        );
        self.countdown.start();
        self.signals.push(WizardSignal::CodeRequested { phone: phone_number });
    }

    fn release_camera(&mut self) {
        if self.camera.take().is_some() {
            self.signals.push(WizardSignal::CameraReleased);
        }
    }
}

/// Holds the phase at `Submitting` for the duration of a sink call
///
/// Dropping it, including when the submit future itself is dropped mid-await,
/// puts the wizard back to `Collecting` with every field intact.
struct PendingSubmission<'a> {
    phase: &'a mut WizardPhase,
    finished: bool,
}

impl<'a> PendingSubmission<'a> {
    fn begin(phase: &'a mut WizardPhase) -> Self {
        *phase = WizardPhase::Submitting;
        Self {
            phase,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        *self.phase = WizardPhase::Collecting;
        if !self.finished {
            tracing::warn!(event = "submission_abandoned", "Submission dropped before the sink answered");
        }
    }
}
