//! # Captain Support
//!
//! Localized support responses for ride-hailing captain registration.
//! Supports Arabic, English, and Arabizi (Latin-script transliterated
//! Arabic, digits standing in for sounds without Latin equivalents).
//!
//! Captain-supplied names pass through a three-lexicon profanity filter
//! before being substituted into a pre-written template for the captain's
//! registration status. The crate is synchronous, I/O-free, and never fails
//! a call: anomalies degrade into the response record's `error` field and a
//! usable localized message.
//!
//! ## Quick Start
//!
//! ```rust
//! use captain_support::SupportBot;
//!
//! let bot = SupportBot::new();
//! let message = bot.process("Ahmed", "english", "approved", None);
//! assert!(message.contains("Congratulations Captain Ahmed"));
//! ```
//!
//! ## Structured responses
//!
//! ```rust
//! use captain_support::SupportBot;
//!
//! let bot = SupportBot::new();
//! let record = bot.status_response("Ahmed", "arabic", "under_review");
//! assert!(record.success);
//! assert_eq!(record.captain_name, "Ahmed");
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use captain_support::SupportBot;
//!
//! let bot = SupportBot::builder()
//!     .fallback_name("Driver")
//!     .block_words(["badword"])
//!     .build();
//! let record = bot.status_response("", "english", "approved");
//! assert_eq!(record.captain_name, "Driver");
//! ```

pub mod core;
pub mod utils;

pub use crate::core::moderation::{NAME_MAX_CHARS, ProfanityFilter, REDACTION_MARKER};
pub use crate::core::responder::{FALLBACK_NAME, SupportBot, SupportBotBuilder};
pub use crate::core::templates::GeneralTopic;
pub use crate::core::types::{Language, RegistrationStatus, SupportResponse};
pub use crate::utils::error::{Result, SupportError};
