use std::borrow::Cow;
use std::collections::HashMap;

/// Accumulates the violation messages of a single field.
pub struct MessageBuilder(Vec<Cow<'static, str>>);

impl MessageBuilder {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, message: impl Into<Cow<'static, str>>) {
        self.0.push(message.into());
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Cow<'static, str>>) {
        self.0.extend(messages);
    }

    pub fn build(self) -> ValidateError {
        ValidateError::Messages(self.0)
    }
}

/// Accumulates per-field errors into one [`ValidateError::Fields`].
///
/// Empty entries are discarded on insert so a clean field never
/// shows up in the final mapping.
#[allow(clippy::new_without_default)]
pub struct FieldBuilder(HashMap<Cow<'static, str>, ValidateError>);

impl FieldBuilder {
    pub fn new() -> Self {
        Self(Default::default())
    }

    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: ValidateError) {
        if !value.is_empty() {
            self.0.insert(key.into(), value);
        }
    }

    pub fn build(self) -> ValidateError {
        ValidateError::Fields(self.0)
    }
}

// ---------------------------------------------------- //

#[derive(Clone, PartialEq, Eq)]
pub enum ValidateError {
    /// Mapping from field name to the errors attached to it.
    Fields(HashMap<Cow<'static, str>, ValidateError>),
    /// Violation messages for one value, in rule-declaration order.
    Messages(Vec<Cow<'static, str>>),
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid data occurred")
    }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidateError::Fields(n) => n.fmt(f),
            ValidateError::Messages(n) => f.debug_map().entry(&"_errors", &n).finish(),
        }
    }
}

impl ValidateError {
    pub fn field_builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    pub fn msg_builder() -> MessageBuilder {
        MessageBuilder::new()
    }
}

impl ValidateError {
    pub fn is_empty(&self) -> bool {
        match self {
            ValidateError::Fields(n) => n.is_empty(),
            ValidateError::Messages(n) => n.is_empty(),
        }
    }

    /// Messages attached to `field`, if this error carries field
    /// entries and `field` is one of them.
    ///
    /// This is what inline UI feedback binds against.
    pub fn field_messages(&self, field: &str) -> Option<&[Cow<'static, str>]> {
        let ValidateError::Fields(fields) = self else {
            return None;
        };
        match fields.get(field) {
            Some(ValidateError::Messages(messages)) => Some(messages),
            _ => None,
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        matches!(self, ValidateError::Fields(fields) if fields.contains_key(field))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

use serde::{ser::SerializeMap, Serialize};

impl Serialize for ValidateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ValidateError::Fields(n) => n.serialize(serializer),
            ValidateError::Messages(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_errors", &n)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_error_is_empty() {
        assert!(MessageBuilder::new().build().is_empty());
        assert!(FieldBuilder::new().build().is_empty());

        let mut msg = MessageBuilder::new();
        msg.insert("Hello world!");
        assert!(!msg.build().is_empty());

        let mut msg = MessageBuilder::new();
        msg.insert("Hello world!");

        let mut err = FieldBuilder::new();
        err.insert("microbar", msg.build());
        assert!(!err.build().is_empty());
    }

    #[test]
    fn field_builder_discards_clean_fields() {
        let mut fields = FieldBuilder::new();
        fields.insert("email", MessageBuilder::new().build());

        let error = fields.build();
        assert!(error.is_empty());
        assert!(!error.has_field("email"));
        assert!(error.into_result().is_ok());
    }

    #[test]
    fn field_messages_keeps_insertion_order() {
        let mut msg = MessageBuilder::new();
        msg.insert("first");
        msg.insert("second");

        let mut fields = FieldBuilder::new();
        fields.insert("password", msg.build());

        let error = fields.build();
        let messages = error.field_messages("password").unwrap();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(error.field_messages("email"), None);
    }

    #[test]
    fn serializes_fields_with_inner_errors_key() {
        let mut msg = MessageBuilder::new();
        msg.insert("Name is required");

        let mut fields = FieldBuilder::new();
        fields.insert("name", msg.build());

        let json = serde_json::to_value(fields.build()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": { "_errors": ["Name is required"] } })
        );
    }
}
