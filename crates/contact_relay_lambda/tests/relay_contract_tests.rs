use std::sync::Mutex;

use contact_core::contract::CORS_HEADERS;
use contact_core::email::{MailRoute, OutboundEmail};
use contact_relay_lambda::adapters::mailer::EmailSender;
use contact_relay_lambda::handlers::relay::{handle_relay_event, ApiGatewayResponse};
use serde_json::{json, Value};

struct CapturingSender {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl CapturingSender {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("poisoned mutex").clone()
    }
}

impl EmailSender for CapturingSender {
    fn send_email(&self, email: &OutboundEmail) -> Result<(), String> {
        self.sent.lock().expect("poisoned mutex").push(email.clone());
        Ok(())
    }
}

struct FailingSender;

impl EmailSender for FailingSender {
    fn send_email(&self, _email: &OutboundEmail) -> Result<(), String> {
        Err("ThrottlingException: Maximum sending rate exceeded".to_string())
    }
}

struct PanickingSender;

impl EmailSender for PanickingSender {
    fn send_email(&self, _email: &OutboundEmail) -> Result<(), String> {
        panic!("connection pool exploded")
    }
}

fn route() -> MailRoute {
    MailRoute {
        from: "noreply@portfolio.dev".to_string(),
        to: "owner@portfolio.dev".to_string(),
    }
}

fn post(body: Value) -> Value {
    json!({
        "httpMethod": "POST",
        "headers": {"Content-Type": "application/json"},
        "body": body.to_string(),
        "isBase64Encoded": false,
    })
}

fn assert_cors(response: &ApiGatewayResponse) {
    for (name, value) in CORS_HEADERS {
        assert_eq!(response.header(name), Some(value), "missing {name}");
    }
}

#[test]
fn valid_submission_is_relayed_once_with_reply_to_submitter() {
    let sender = CapturingSender::new();
    let response = handle_relay_event(
        post(json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"})),
        &route(),
        &sender,
    );

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body_json(), json!({"ok": true}));
    assert_cors(&response);

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, vec!["jo@x.com".to_string()]);
    assert_eq!(sent[0].to, vec!["owner@portfolio.dev".to_string()]);
    assert_eq!(sent[0].from, "noreply@portfolio.dev");
    assert!(sent[0].subject.contains("Jo"));
    assert!(sent[0].text_body.contains("Jo"));
    assert!(sent[0].text_body.contains("jo@x.com"));
    assert!(sent[0].text_body.contains("Hi"));
}

#[test]
fn empty_name_is_rejected_without_contacting_provider() {
    let sender = CapturingSender::new();
    let response = handle_relay_event(
        post(json!({"name": "", "email": "jo@x.com", "message": "Hi"})),
        &route(),
        &sender,
    );

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body_json(), json!({"error": "Missing fields"}));
    assert_cors(&response);
    assert!(sender.sent().is_empty());
}

#[test]
fn whitespace_only_fields_count_as_missing() {
    let sender = CapturingSender::new();
    for body in [
        json!({"name": "  ", "email": "jo@x.com", "message": "Hi"}),
        json!({"name": "Jo", "email": "jo@x.com", "message": "\n\t"}),
        json!({"email": "jo@x.com", "message": "Hi"}),
    ] {
        let response = handle_relay_event(post(body), &route(), &sender);
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body_json(), json!({"error": "Missing fields"}));
    }
    assert!(sender.sent().is_empty());
}

#[test]
fn malformed_email_is_rejected() {
    let sender = CapturingSender::new();
    let response = handle_relay_event(
        post(json!({"name": "Jo", "email": "not-an-email", "message": "Hi"})),
        &route(),
        &sender,
    );

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body_json(), json!({"error": "Invalid email"}));
    assert_cors(&response);
    assert!(sender.sent().is_empty());
}

#[test]
fn provider_failure_maps_to_generic_internal_error() {
    let response = handle_relay_event(
        post(json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"})),
        &route(),
        &FailingSender,
    );

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body_json(),
        json!({"error": "Internal error sending email."})
    );
    assert!(!response.body.contains("Throttling"));
    assert_cors(&response);
}

#[test]
fn provider_panic_still_produces_internal_error_response() {
    let response = handle_relay_event(
        post(json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"})),
        &route(),
        &PanickingSender,
    );

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.body_json(),
        json!({"error": "Internal error sending email."})
    );
}

#[test]
fn preflight_short_circuits_regardless_of_body() {
    let sender = CapturingSender::new();
    for event in [
        json!({"httpMethod": "OPTIONS"}),
        json!({"httpMethod": "OPTIONS", "body": "{not json"}),
        json!({
            "httpMethod": "OPTIONS",
            "body": json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"}).to_string(),
        }),
        json!({"requestContext": {"http": {"method": "OPTIONS"}}, "body": ""}),
    ] {
        let response = handle_relay_event(event, &route(), &sender);
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json(),
            json!({"message": "CORS preflight successful"})
        );
        assert_cors(&response);
    }
    assert!(sender.sent().is_empty());
}

#[test]
fn unparseable_or_missing_body_is_reported_as_missing_fields() {
    let sender = CapturingSender::new();
    for event in [
        json!({"httpMethod": "POST"}),
        json!({"httpMethod": "POST", "body": null}),
        json!({"httpMethod": "POST", "body": ""}),
        json!({"httpMethod": "POST", "body": "{\"name\": \"Jo\""}),
        json!({"httpMethod": "POST", "body": "[\"Jo\", \"jo@x.com\", \"Hi\"]"}),
    ] {
        let response = handle_relay_event(event, &route(), &sender);
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body_json(), json!({"error": "Missing fields"}));
    }
    assert!(sender.sent().is_empty());
}

#[test]
fn identical_submissions_are_not_deduplicated() {
    let sender = CapturingSender::new();
    let body = json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"});

    let first = handle_relay_event(post(body.clone()), &route(), &sender);
    let second = handle_relay_event(post(body), &route(), &sender);

    assert_eq!(first.status_code, 200);
    assert_eq!(second.status_code, 200);
    let sent = sender.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[test]
fn http_api_v2_post_is_relayed() {
    let sender = CapturingSender::new();
    let response = handle_relay_event(
        json!({
            "version": "2.0",
            "requestContext": {"http": {"method": "POST", "path": "/contact"}},
            "body": json!({"name": "Jo", "email": "jo@x.com", "message": "Hi"}).to_string(),
            "isBase64Encoded": false,
        }),
        &route(),
        &sender,
    );

    assert_eq!(response.status_code, 200);
    assert_eq!(sender.sent().len(), 1);
}

#[test]
fn response_serializes_to_proxy_integration_shape() {
    let response = handle_relay_event(json!({"httpMethod": "OPTIONS"}), &route(), &FailingSender);
    let value = serde_json::to_value(&response).expect("response should serialize");

    assert_eq!(value["statusCode"], json!(200));
    assert!(value["headers"].is_object());
    assert!(value["body"].is_string());
}
