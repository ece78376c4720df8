//! Wire-level enums and the per-request response record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::SupportError;

/// Supported response languages
///
/// Arabizi is Latin-script transliterated Arabic, digits standing in for
/// sounds without Latin equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Formal-script Arabic
    Arabic,
    /// English
    English,
    /// Latin-transliterated Arabic
    Arabizi,
}

impl Language {
    /// All supported languages
    pub const ALL: &'static [Language] = &[Language::Arabic, Language::English, Language::Arabizi];

    /// Lowercase wire tag
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::English => "english",
            Language::Arabizi => "arabizi",
        }
    }

    /// Lenient parse: case-insensitive, trimmed; anything unrecognized
    /// coerces to [`Language::English`]
    pub fn parse_or_default(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "arabic" => Language::Arabic,
            "english" => Language::English,
            "arabizi" => Language::Arabizi,
            _ => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Captain registration statuses with a dedicated response template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Application is being reviewed
    UnderReview,
    /// Required documents are missing or outdated
    DocumentsMissing,
    /// Registration accepted
    Approved,
    /// Registration declined
    Rejected,
    /// Security screening in progress
    BackgroundCheck,
    /// Processing delayed by request volume
    SystemDelay,
}

impl RegistrationStatus {
    /// All supported statuses
    pub const ALL: &'static [RegistrationStatus] = &[
        RegistrationStatus::UnderReview,
        RegistrationStatus::DocumentsMissing,
        RegistrationStatus::Approved,
        RegistrationStatus::Rejected,
        RegistrationStatus::BackgroundCheck,
        RegistrationStatus::SystemDelay,
    ];

    /// Lowercase wire tag
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationStatus::UnderReview => "under_review",
            RegistrationStatus::DocumentsMissing => "documents_missing",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
            RegistrationStatus::BackgroundCheck => "background_check",
            RegistrationStatus::SystemDelay => "system_delay",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = SupportError;

    /// Case-insensitive, trimmed parse. The error carries the caller's
    /// original tag so it can be quoted back in the response record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "under_review" => Ok(RegistrationStatus::UnderReview),
            "documents_missing" => Ok(RegistrationStatus::DocumentsMissing),
            "approved" => Ok(RegistrationStatus::Approved),
            "rejected" => Ok(RegistrationStatus::Rejected),
            "background_check" => Ok(RegistrationStatus::BackgroundCheck),
            "system_delay" => Ok(RegistrationStatus::SystemDelay),
            _ => Err(SupportError::InvalidStatus(s.to_string())),
        }
    }
}

/// Structured result of resolving one support request
///
/// Built fresh per call, never persisted, immutable after construction.
/// Serializes directly into a JSON API body.
#[derive(Debug, Clone, Serialize)]
pub struct SupportResponse {
    /// Final localized message text
    pub message: String,
    /// Sanitized captain name actually substituted into the message
    pub captain_name: String,
    /// Language the message was rendered in
    pub language: Language,
    /// Resolved status tag, or `"unknown"` on the fallback path
    pub status: String,
    /// When the response was built
    pub timestamp: DateTime<Utc>,
    /// False only when the status tag was not recognized
    pub success: bool,
    /// Description of what went wrong, when `success` is false
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parse_is_lenient() {
        assert_eq!(Language::parse_or_default("ARABIZI"), Language::Arabizi);
        assert_eq!(Language::parse_or_default("  Arabic "), Language::Arabic);
        assert_eq!(Language::parse_or_default("french"), Language::English);
        assert_eq!(Language::parse_or_default(""), Language::English);
    }

    #[test]
    fn status_parse_accepts_all_six_tags() {
        for &status in RegistrationStatus::ALL {
            assert_eq!(status.as_str().parse::<RegistrationStatus>(), Ok(status));
            assert_eq!(
                status.as_str().to_uppercase().parse::<RegistrationStatus>(),
                Ok(status)
            );
        }
    }

    #[test]
    fn status_parse_rejects_unknown_tags_with_the_raw_input() {
        let err = "pending_review_xyz".parse::<RegistrationStatus>().unwrap_err();
        assert_eq!(
            err,
            SupportError::InvalidStatus("pending_review_xyz".to_string())
        );
    }

    #[test]
    fn language_serializes_as_lowercase_tag() {
        assert_eq!(
            serde_json::to_string(&Language::Arabizi).unwrap(),
            "\"arabizi\""
        );
    }
}
