use crate::domain::ports::{Notifier, SubmissionGateway};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_DISPLAY: Duration = Duration::from_secs(3);

/// Round-trip of the simulated submission call.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
        }
    }

    const fn email(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Email,
            required: true,
        }
    }

    const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
            required: true,
        }
    }
}

/// One form on the site: its payload fields and the notifications shown
/// when a submission finishes.
#[derive(Debug, Clone, Copy)]
pub struct FormDefinition {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    pub success_message: &'static str,
    pub failure_message: &'static str,
}

/// General contact form.
pub static CONTACT: FormDefinition = FormDefinition {
    name: "contact",
    fields: &[
        FieldSpec::required("name"),
        FieldSpec::email("email"),
        FieldSpec::optional("company"),
        FieldSpec::required("subject"),
        FieldSpec::required("inquiryType"),
        FieldSpec::required("message"),
    ],
    success_message: "Message sent successfully! I'll get back to you within 24 hours.",
    failure_message: "Failed to send message. Please try again.",
};

/// Team training booking.
pub static BOOK_TRAINING: FormDefinition = FormDefinition {
    name: "book-training",
    fields: &[
        FieldSpec::required("name"),
        FieldSpec::email("email"),
        FieldSpec::required("company"),
        FieldSpec::required("teamSize"),
        FieldSpec::required("industry"),
        FieldSpec::required("trainingMode"),
        FieldSpec::optional("preferredDates"),
        FieldSpec::required("duration"),
        FieldSpec::required("currentLevel"),
        FieldSpec::optional("specificGoals"),
        FieldSpec::optional("challenges"),
        FieldSpec::optional("message"),
    ],
    success_message: "Team training request submitted successfully! I'll contact you within \
                      24 hours to discuss your custom program.",
    failure_message: "Failed to submit training request. Please try again.",
};

/// Speaking event booking.
pub static BOOK_EVENT: FormDefinition = FormDefinition {
    name: "book-event",
    fields: &[
        FieldSpec::required("name"),
        FieldSpec::email("email"),
        FieldSpec::required("company"),
        FieldSpec::required("eventName"),
        FieldSpec::date("eventDate"),
        FieldSpec::optional("attendees"),
        FieldSpec::required("duration"),
        FieldSpec::required("eventType"),
        FieldSpec::optional("message"),
    ],
    success_message: "Event booking request submitted successfully! I'll get back to you \
                      within 24 hours.",
    failure_message: "Failed to submit booking request. Please try again.",
};

/// Tool review request.
pub static BOOK_REVIEW: FormDefinition = FormDefinition {
    name: "book-review",
    fields: &[
        FieldSpec::required("name"),
        FieldSpec::email("email"),
        FieldSpec::required("company"),
        FieldSpec::required("toolName"),
        FieldSpec::required("toolCategory"),
        FieldSpec::required("reviewType"),
        FieldSpec::optional("currentUsage"),
        FieldSpec::optional("specificAreas"),
        FieldSpec::optional("timeline"),
        FieldSpec::optional("message"),
    ],
    success_message: "Tool review request submitted successfully! I'll contact you within \
                      24 hours to discuss the details.",
    failure_message: "Failed to submit review request. Please try again.",
};

/// Inquiry types offered by the contact form's select.
pub const INQUIRY_TYPES: [&str; 8] = [
    "General Inquiry",
    "Training Program",
    "Speaking Engagement",
    "Tool Review",
    "Consulting Services",
    "Partnership Opportunity",
    "Media Interview",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed,
}

/// One in-flight form instance: the entered values plus the submission
/// state machine `Idle -> Submitting -> {Succeeded, Failed} -> Idle`.
///
/// On success all fields reset to empty; on failure they are kept so the
/// visitor can retry without re-typing. Either way exactly one notification
/// goes out and the session returns to `Idle`.
pub struct FormSession {
    definition: &'static FormDefinition,
    values: BTreeMap<String, String>,
    state: SubmissionState,
}

impl FormSession {
    pub fn new(definition: &'static FormDefinition) -> Self {
        let values = definition
            .fields
            .iter()
            .map(|f| (f.name.to_string(), String::new()))
            .collect();
        Self {
            definition,
            values,
            state: SubmissionState::Idle,
        }
    }

    pub fn definition(&self) -> &'static FormDefinition {
        self.definition
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(SiteError::InvalidFieldError {
                field: field.to_string(),
                reason: format!("form '{}' has no such field", self.definition.name),
            }),
        }
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// The required-field and field-syntax guard that runs before the
    /// submission starts. Mirrors the input-level `required` markers; there
    /// is no centralized validator beyond this.
    fn check_fields(&self) -> Result<()> {
        for spec in self.definition.fields {
            let value = self.values.get(spec.name).map(String::as_str).unwrap_or("");
            if value.trim().is_empty() {
                if spec.required {
                    return Err(SiteError::MissingFieldError {
                        field: spec.name.to_string(),
                    });
                }
                continue;
            }
            match spec.kind {
                FieldKind::Text => {}
                FieldKind::Email => validation::validate_email(spec.name, value)?,
                FieldKind::Date => validation::validate_date(spec.name, value)?,
            }
        }
        Ok(())
    }

    /// Runs the whole submission: guard, gateway call, notification,
    /// field reset on success. Guard failures return `Err` and leave the
    /// session untouched; a gateway failure is a normal outcome, reported
    /// through the notifier with the entered values kept.
    pub async fn submit(
        &mut self,
        gateway: &dyn SubmissionGateway,
        notifier: &dyn Notifier,
    ) -> Result<SubmissionOutcome> {
        if self.state == SubmissionState::Submitting {
            return Err(SiteError::SubmissionError {
                message: "a submission is already in progress".to_string(),
            });
        }
        self.check_fields()?;

        self.state = SubmissionState::Submitting;
        tracing::debug!(form = self.definition.name, "Submitting form");
        let result = gateway.submit(self.definition.name, &self.values).await;
        self.state = SubmissionState::Idle;

        match result {
            Ok(()) => {
                notifier.success(self.definition.success_message, TOAST_DISPLAY);
                for value in self.values.values_mut() {
                    value.clear();
                }
                Ok(SubmissionOutcome::Succeeded)
            }
            Err(e) => {
                tracing::warn!(form = self.definition.name, error = %e, "Form submission failed");
                notifier.failure(self.definition.failure_message, TOAST_DISPLAY);
                Ok(SubmissionOutcome::Failed)
            }
        }
    }
}

/// Stand-in for the real transport: waits out the configured delay and
/// reports success. It never fails; the failure arm of `FormSession` is
/// still real code, exercised by gateways that do.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, form_name: &str, payload: &BTreeMap<String, String>) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(form = form_name, fields = payload.len(), "Simulated submission accepted");
        Ok(())
    }
}

/// Notifier that routes toasts into the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str, _display_for: Duration) {
        tracing::info!("✅ {}", message);
    }

    fn failure(&self, message: &str, _display_for: Duration) {
        tracing::warn!("❌ {}", message);
    }
}
