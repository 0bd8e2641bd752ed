//! Wire field-name prefixing.
//!
//! The gateway reuses one address shape under several spellings: a billing
//! address serializes `address1`, the same object attached as a shipping
//! address serializes `shippingAddress1`. The prefix transform is the pure
//! function `prefix + capitalize(field)`, identity when the prefix is empty.

use std::fmt;

/// Derives the wire name for `field` under `prefix`.
///
/// Empty prefix is the identity transform. Otherwise the field's first ASCII
/// character is uppercased and appended to the prefix.
#[must_use]
pub fn wire_name(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        return field.to_owned();
    }
    let mut name = String::with_capacity(prefix.len() + field.len());
    name.push_str(prefix);
    let mut chars = field.chars();
    if let Some(first) = chars.next() {
        name.push(first.to_ascii_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

/// The field-name prefix a value object serializes under.
///
/// Value objects carry one of these and route every emitted field name
/// through [`FieldPrefix::apply`]. The default is the empty (identity)
/// prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPrefix(String);

impl FieldPrefix {
    /// Creates a prefix from the given string; empty means identity.
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self(prefix.into())
    }

    /// Applies this prefix to a field name.
    #[must_use]
    pub fn apply(&self, field: &str) -> String {
        wire_name(&self.0, field)
    }

    /// Returns `true` if this is the identity prefix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPrefix {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefix_is_identity() {
        assert_eq!(wire_name("", "address1"), "address1");
    }

    #[test]
    fn test_prefix_capitalizes_field() {
        assert_eq!(wire_name("shipping", "address1"), "shippingAddress1");
        assert_eq!(wire_name("customer", "firstName"), "customerFirstName");
    }

    #[test]
    fn test_already_capitalized_field() {
        assert_eq!(wire_name("recipient", "FirstName"), "recipientFirstName");
    }

    #[test]
    fn test_field_prefix_apply() {
        let prefix = FieldPrefix::new("recipient");
        assert_eq!(prefix.apply("lastName"), "recipientLastName");
        assert!(FieldPrefix::default().is_empty());
    }
}
