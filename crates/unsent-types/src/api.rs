use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Color, Effect, Status};

// -- Submission --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitMemoryRequest {
    pub recipient: String,
    pub message: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub full_bg: bool,
    #[serde(default)]
    pub effect: Effect,
}

#[derive(Debug, Serialize)]
pub struct SubmitMemoryResponse {
    pub id: Uuid,
    pub status: Status,
}

// -- Feed --

/// One feed entry, ready to render: record fields plus the style tokens
/// the card is drawn with.
#[derive(Debug, Serialize)]
pub struct MemoryCard {
    pub id: Uuid,
    pub recipient: String,
    pub message: String,
    pub sender: Option<String>,
    pub status: Status,
    pub color: Color,
    pub full_bg: bool,
    pub effect: Effect,
    pub created_at: DateTime<Utc>,
    pub border_class: &'static str,
    pub background_class: &'static str,
}

// -- Quotes --

#[derive(Debug, Serialize)]
pub struct QuotesResponse {
    pub quotes: &'static [&'static str],
    pub rotate_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_applies_defaults() {
        let req: SubmitMemoryRequest =
            serde_json::from_str(r#"{"recipient": "Alex", "message": "I miss you"}"#).unwrap();

        assert_eq!(req.recipient, "Alex");
        assert_eq!(req.message, "I miss you");
        assert_eq!(req.sender, None);
        assert_eq!(req.color, Color::Default);
        assert!(!req.full_bg);
        assert_eq!(req.effect, Effect::None);
    }

    #[test]
    fn submit_request_rejects_unknown_fields() {
        let result = serde_json::from_str::<SubmitMemoryRequest>(
            r#"{"recipient": "A", "message": "B", "letter_style": "sad"}"#,
        );
        assert!(result.is_err());
    }
}
