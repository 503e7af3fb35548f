use serde_json::Value;
use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True when the backend rejected the session credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Http { status: 401 | 403, .. })
    }

    /// Text for inline alerts. Backend rejections show the backend's own message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message, .. } | AppError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Extracts a user-facing message from an HTTP error body.
///
/// The backend reports failures as `{"detail": ...}` or `{"error": ...}`; other
/// bodies are trimmed and truncated.
pub fn message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "Request failed.".to_string();
    }

    let from_json = serde_json::from_str::<Value>(trimmed).ok().and_then(|value| {
        ["detail", "error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    let message = from_json.unwrap_or_else(|| trimmed.to_string());
    message.trim().chars().take(MAX_ERROR_CHARS).collect()
}

/// Distinct, non-empty messages for a section that failed to render, in the
/// order they were raised.
pub fn failure_details<I>(messages: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut details: Vec<String> = Vec::new();
    for message in messages {
        let message: String = message.trim().chars().take(MAX_ERROR_CHARS).collect();
        if !message.is_empty() && !details.contains(&message) {
            details.push(message);
        }
    }
    details
}
