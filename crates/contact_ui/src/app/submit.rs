use contact_core::contract::ContactSubmission;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{info, warn};

use super::form::SubmitOutcome;

/// Posts one submission to the relay and waits for the answer. No timeout
/// beyond the transport default and no retry.
pub(crate) fn post_submission(endpoint: &str, submission: &ContactSubmission) -> SubmitOutcome {
    let client = reqwest::blocking::Client::new();
    let response = match client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .json(submission)
        .send()
    {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "contact request did not complete");
            return SubmitOutcome::NetworkFailure(err.to_string());
        }
    };

    let status = response.status().as_u16();
    let body = match response.text() {
        Ok(body) => body,
        Err(err) => {
            warn!(status, error = %err, "failed to read contact response body");
            String::new()
        }
    };
    info!(status, "contact request finished");
    interpret_response(status, &body)
}

/// Maps a relay answer onto the form outcome. Bodies that are not JSON or
/// carry no string `error` leave the server message empty.
pub(crate) fn interpret_response(status: u16, body: &str) -> SubmitOutcome {
    if (200..300).contains(&status) {
        return SubmitOutcome::Delivered;
    }

    let server_error = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string));
    SubmitOutcome::Rejected { server_error }
}
