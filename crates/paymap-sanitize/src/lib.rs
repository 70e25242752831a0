//! paymap-sanitize: user input cleanup before storage or render
//!
//! This library normalizes and strips unsafe content from free-form text
//! fields:
//! - HTML entity escaping for render paths
//! - Plain-text sanitization (control characters, HTML-like tags,
//!   whitespace, length caps)
//! - Allow-list sanitization of machine records before persistence
//! - Loopback callback URL vetting for desktop OAuth flows
//!
//! Every entry point is a total function: no input errors, the worst
//! outcome is an empty string or `false`.

pub mod escape;
pub mod loopback;
pub mod machine;
pub mod text;

pub use escape::escape_html;
pub use loopback::is_safe_loopback_callback;
pub use machine::sanitize_pos_machine;
pub use text::{sanitize_plain_text, SanitizeOptions};
