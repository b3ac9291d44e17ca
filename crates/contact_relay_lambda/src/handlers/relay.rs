use std::panic::{self, AssertUnwindSafe};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use contact_core::contract::{
    ContactSubmission, DeliveredResponse, ErrorResponse, PreflightResponse, CORS_HEADERS,
    INTERNAL_ERROR,
};
use contact_core::email::{compose_email, MailRoute};
use contact_core::validation::validate_submission;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{error, info, warn};

use crate::adapters::mailer::EmailSender;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(Value::as_str)
    }

    pub fn body_json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

/// Runs one relay invocation to completion. Every path yields exactly one
/// response carrying the CORS headers.
pub fn handle_relay_event(
    event: Value,
    route: &MailRoute,
    sender: &dyn EmailSender,
) -> ApiGatewayResponse {
    let method = request_method(&event);
    if method.eq_ignore_ascii_case("OPTIONS") {
        info!("answering cors preflight");
        return json_response(200, &PreflightResponse::default());
    }

    let body = request_body(&event);
    info!(method = %method, body_bytes = body.len(), "contact submission received");

    let submission = ContactSubmission::from_json_body(&body);
    if let Err(reason) = validate_submission(&submission) {
        warn!(%reason, "rejected contact submission");
        return json_response(400, &ErrorResponse::new(reason.relay_message()));
    }

    info!(message_chars = submission.message.chars().count(), "sending contact email");
    let email = compose_email(&submission, route);
    let delivery = panic::catch_unwind(AssertUnwindSafe(|| sender.send_email(&email)))
        .unwrap_or_else(|_| Err("email sender panicked".to_string()));

    match delivery {
        Ok(()) => {
            info!("contact email sent");
            json_response(200, &DeliveredResponse::default())
        }
        Err(message) => {
            error!(error = %message, "failed to send contact email");
            internal_error_response()
        }
    }
}

/// Reads the HTTP verb from either proxy payload version.
fn request_method(event: &Value) -> &str {
    event
        .get("httpMethod")
        .and_then(Value::as_str)
        .or_else(|| {
            event
                .pointer("/requestContext/http/method")
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
}

fn request_body(event: &Value) -> Vec<u8> {
    let Some(text) = event.get("body").and_then(Value::as_str) else {
        return Vec::new();
    };

    let encoded = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return text.as_bytes().to_vec();
    }

    BASE64.decode(text).unwrap_or_else(|error| {
        warn!(%error, "ignoring undecodable base64 body");
        Vec::new()
    })
}

fn cors_headers() -> Value {
    let mut headers: Map<String, Value> = CORS_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), Value::from(*value)))
        .collect();
    headers.insert("Content-Type".to_string(), Value::from("application/json"));
    Value::Object(headers)
}

fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: cors_headers(),
            body,
        },
        Err(error) => {
            error!(%error, "failed to serialize relay response");
            internal_error_response()
        }
    }
}

fn internal_error_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 500,
        headers: cors_headers(),
        body: json!({ "error": INTERNAL_ERROR }).to_string(),
    }
}
