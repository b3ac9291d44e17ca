use crate::contract::ContactSubmission;

/// Provider-neutral description of the notification sent for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Vec<String>,
    pub subject: String,
    pub text_body: String,
}

/// Fixed sender and destination for relayed submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRoute {
    pub from: String,
    pub to: String,
}

pub fn subject_line(submission: &ContactSubmission) -> String {
    format!("Portfolio Contact: {}", submission.name)
}

pub fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission:\n\nFrom: {}\nEmail: {}\nMessage:\n{}",
        submission.name, submission.email, submission.message
    )
}

/// Builds the notification for an already validated submission. Replies go
/// straight to the submitter.
pub fn compose_email(submission: &ContactSubmission, route: &MailRoute) -> OutboundEmail {
    OutboundEmail {
        from: route.from.clone(),
        to: vec![route.to.clone()],
        reply_to: vec![submission.email.clone()],
        subject: subject_line(submission),
        text_body: text_body(submission),
    }
}
