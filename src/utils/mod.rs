//! Utility modules for the support responder

pub mod error;

pub use error::{Result, SupportError};
