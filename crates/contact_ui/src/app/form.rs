use contact_core::contract::ContactSubmission;
use contact_core::validation::{validate_submission, ValidationError};
use thiserror::Error;

pub(crate) const SENT_MESSAGE: &str = "Thanks! Your message has been sent.";
pub(crate) const NOT_CONFIGURED_MESSAGE: &str = "Contact API not configured.";
pub(crate) const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub(crate) const NETWORK_FAILURE_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("contact api endpoint is not configured")]
    NotConfigured,
}

impl SubmitError {
    pub(crate) fn user_message(self) -> &'static str {
        match self {
            Self::Validation(error) => error.user_message(),
            Self::NotConfigured => NOT_CONFIGURED_MESSAGE,
        }
    }
}

/// How a request that left the form ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Delivered,
    Rejected { server_error: Option<String> },
    NetworkFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub(crate) ok: bool,
    pub(crate) text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingSubmission {
    pub(crate) endpoint: String,
    pub(crate) submission: ContactSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SubmitStart {
    /// A request is already outstanding; nothing changed.
    Busy,
    Rejected(SubmitError),
    Started(PendingSubmission),
}

/// Field values plus the single "last result" shown under the form.
#[derive(Debug, Default)]
pub(crate) struct ContactForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
    in_flight: bool,
    last_result: Option<StatusMessage>,
}

impl ContactForm {
    pub(crate) fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn last_result(&self) -> Option<&StatusMessage> {
        self.last_result.as_ref()
    }

    pub(crate) fn submission(&self) -> ContactSubmission {
        ContactSubmission::new(&self.name, &self.email, &self.message)
    }

    pub(crate) fn begin_submit(&mut self, endpoint: Option<&str>) -> SubmitStart {
        if self.in_flight {
            return SubmitStart::Busy;
        }
        self.last_result = None;

        let submission = self.submission();
        let checked = validate_submission(&submission)
            .map_err(SubmitError::from)
            .and_then(|()| {
                endpoint
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .ok_or(SubmitError::NotConfigured)
            });

        match checked {
            Ok(endpoint) => {
                self.in_flight = true;
                SubmitStart::Started(PendingSubmission {
                    endpoint: endpoint.to_string(),
                    submission,
                })
            }
            Err(error) => {
                self.last_result = Some(StatusMessage::failure(error.user_message()));
                SubmitStart::Rejected(error)
            }
        }
    }

    pub(crate) fn complete(&mut self, outcome: SubmitOutcome) {
        self.in_flight = false;
        self.last_result = Some(match outcome {
            SubmitOutcome::Delivered => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                StatusMessage::success(SENT_MESSAGE)
            }
            SubmitOutcome::Rejected { server_error } => StatusMessage::failure(
                server_error
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            ),
            SubmitOutcome::NetworkFailure(_) => StatusMessage::failure(NETWORK_FAILURE_MESSAGE),
        });
    }
}
