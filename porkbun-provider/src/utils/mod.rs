//! Utility modules.

/// Lenient deserializers for Porkbun's loosely typed JSON fields.
pub mod lenient;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
