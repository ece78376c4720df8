//! Core sanitization and response-resolution logic
//!
//! - **lexicon**: static profanity word lists for the three language variants
//! - **moderation**: compiled whole-word matchers and name sanitization
//! - **templates**: typed, read-only localized template table
//! - **responder**: the support bot tying sanitizer and templates together
//! - **types**: wire enums and the structured response record

pub mod lexicon;
pub mod moderation;
pub mod responder;
pub mod templates;
pub mod types;
