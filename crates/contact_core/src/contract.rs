use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const PREFLIGHT_MESSAGE: &str = "CORS preflight successful";
pub const MISSING_FIELDS_ERROR: &str = "Missing fields";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email";
pub const INTERNAL_ERROR: &str = "Internal error sending email.";

/// Headers attached to every relay response, preflight and errors included.
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With",
    ),
    ("Access-Control-Allow-Methods", "OPTIONS,POST,GET"),
    ("Access-Control-Max-Age", "86400"),
];

/// One contact form submission as it travels over the wire.
///
/// Deserialization never fails on shape: absent fields and fields of the
/// wrong JSON type come through as empty strings, which validation then
/// reports as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Reads a submission from a raw request body. Empty, unparseable and
    /// non-object bodies all yield the empty submission.
    pub fn from_json_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .ok()
            .filter(Value::is_object)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreflightResponse {
    pub message: String,
}

impl Default for PreflightResponse {
    fn default() -> Self {
        Self {
            message: PREFLIGHT_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveredResponse {
    pub ok: bool,
}

impl Default for DeliveredResponse {
    fn default() -> Self {
        Self { ok: true }
    }
}
