//! Application state for the contact form window.

use std::sync::mpsc::{Receiver, Sender};

mod form;
mod submit;


pub(crate) use form::{ContactForm, StatusMessage, SubmitOutcome, SubmitStart};

/// Main application state: the form plus the channel its background
/// request reports back on.
pub struct ContactApp {
    pub(crate) form: ContactForm,
    pub(crate) endpoint: Option<String>,
    pub(crate) mailto: Option<String>,
    sender: Sender<SubmitOutcome>,
    receiver: Receiver<SubmitOutcome>,
}

impl ContactApp {
    pub fn new(endpoint: Option<String>, mailto: Option<String>) -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();
        Self {
            form: ContactForm::default(),
            endpoint,
            mailto,
            sender,
            receiver,
        }
    }

    /// Validates the form and, when it passes, sends it on a worker thread.
    pub(crate) fn submit(&mut self) -> SubmitStart {
        let start = self.form.begin_submit(self.endpoint.as_deref());
        if let SubmitStart::Started(pending) = &start {
            let sender = self.sender.clone();
            let pending = pending.clone();
            std::thread::spawn(move || {
                let outcome = submit::post_submission(&pending.endpoint, &pending.submission);
                let _ = sender.send(outcome);
            });
        }
        start
    }

    pub(crate) fn drain_results(&mut self) {
        while let Ok(outcome) = self.receiver.try_recv() {
            self.form.complete(outcome);
        }
    }
}
