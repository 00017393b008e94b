#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;

pub use error::{FieldBuilder, MessageBuilder, ValidateError};

/// Form types that can check their own data before it leaves
/// the client.
///
/// Implementations must be pure: no I/O, no interior state, and
/// identical results for identical input so they can be re-run on
/// every keystroke.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidateError>;
}
