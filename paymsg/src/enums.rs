//! Enumerated request fields with table-lookup validation.
//!
//! Each enumerated field the gateway accepts is a closed set of canonical
//! textual codes. Candidates validate against a static alias table — the
//! canonical spelling plus any shorthand codes — compared case-insensitively,
//! and always resolve to the canonical form. An unmatched candidate fails at
//! the point of setting with the field name, the rejected value, and the
//! accepted list; it is never silently defaulted.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Resolves `candidate` against an alias table for `field`.
///
/// Matching is case-insensitive over every listed alias. Returns the
/// canonical value, or [`ValidationError::UnknownEnumValue`] carrying the
/// accepted canonical spellings.
fn validate<T: Copy>(
    field: &'static str,
    candidate: &str,
    table: &'static [(&'static str, T)],
    accepted: &'static [&'static str],
) -> Result<T, ValidationError> {
    table
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(candidate))
        .map(|&(_, value)| value)
        .ok_or_else(|| ValidationError::UnknownEnumValue {
            field,
            value: candidate.to_owned(),
            accepted,
        })
}

macro_rules! impl_wire_enum {
    ($ty:ident, $field:literal) => {
        impl $ty {
            /// Validates a candidate against this field's alias table and
            /// returns the canonical value.
            pub fn validate(candidate: &str) -> Result<Self, ValidationError> {
                validate($field, candidate, Self::TABLE, Self::ACCEPTED)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::validate(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// How the card details entered the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMethod {
    /// Customer-entered details on an e-commerce checkout.
    Ecommerce,
    /// Details taken from a mail order.
    MailOrder,
    /// Details taken over the telephone.
    TelephoneOrder,
}

impl EntryMethod {
    /// Canonical wire spellings this field accepts.
    pub const ACCEPTED: &'static [&'static str] = &["Ecommerce", "MailOrder", "TelephoneOrder"];

    const TABLE: &'static [(&'static str, Self)] = &[
        ("Ecommerce", Self::Ecommerce),
        ("MailOrder", Self::MailOrder),
        ("TelephoneOrder", Self::TelephoneOrder),
    ];

    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "Ecommerce",
            Self::MailOrder => "MailOrder",
            Self::TelephoneOrder => "TelephoneOrder",
        }
    }
}

impl_wire_enum!(EntryMethod, "entryMethod");

/// Marks a transaction as part of a recurring or instalment series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurringIndicator {
    /// One of a series of recurring payments.
    Recurring,
    /// One of a fixed number of instalments.
    Instalment,
}

impl RecurringIndicator {
    /// Canonical wire spellings this field accepts.
    pub const ACCEPTED: &'static [&'static str] = &["Recurring", "Instalment"];

    const TABLE: &'static [(&'static str, Self)] = &[
        ("Recurring", Self::Recurring),
        ("Instalment", Self::Instalment),
    ];

    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recurring => "Recurring",
            Self::Instalment => "Instalment",
        }
    }
}

impl_wire_enum!(RecurringIndicator, "recurringIndicator");

/// Controls whether the gateway runs AVS/CVC checks on the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyAvsCvcCheck {
    /// Use the merchant service profile's configured setting.
    UseMspSetting,
    /// Force the checks on.
    Force,
    /// Disable the checks.
    Disable,
    /// Force the checks but ignore the configured rejection rules.
    ForceIgnoringRules,
}

impl ApplyAvsCvcCheck {
    /// Canonical wire spellings this field accepts.
    pub const ACCEPTED: &'static [&'static str] =
        &["UseMSPSetting", "Force", "Disable", "ForceIgnoringRules"];

    const TABLE: &'static [(&'static str, Self)] = &[
        ("UseMSPSetting", Self::UseMspSetting),
        ("Force", Self::Force),
        ("Disable", Self::Disable),
        ("ForceIgnoringRules", Self::ForceIgnoringRules),
    ];

    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UseMspSetting => "UseMSPSetting",
            Self::Force => "Force",
            Self::Disable => "Disable",
            Self::ForceIgnoringRules => "ForceIgnoringRules",
        }
    }
}

impl_wire_enum!(ApplyAvsCvcCheck, "applyAvsCvcCheck");

/// Controls whether the gateway applies 3-D Secure authentication.
///
/// The numeric aliases `"0"`–`"3"` are the legacy direct-integration codes
/// for the same four settings and validate to the textual canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Apply3DSecure {
    /// Use the merchant service profile's configured setting.
    UseMspSetting,
    /// Force 3-D Secure on.
    Force,
    /// Disable 3-D Secure.
    Disable,
    /// Force 3-D Secure but ignore the configured rejection rules.
    ForceIgnoringRules,
}

impl Apply3DSecure {
    /// Canonical wire spellings this field accepts.
    pub const ACCEPTED: &'static [&'static str] =
        &["UseMSPSetting", "Force", "Disable", "ForceIgnoringRules"];

    const TABLE: &'static [(&'static str, Self)] = &[
        ("UseMSPSetting", Self::UseMspSetting),
        ("Force", Self::Force),
        ("Disable", Self::Disable),
        ("ForceIgnoringRules", Self::ForceIgnoringRules),
        ("0", Self::UseMspSetting),
        ("1", Self::Force),
        ("2", Self::Disable),
        ("3", Self::ForceIgnoringRules),
    ];

    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UseMspSetting => "UseMSPSetting",
            Self::Force => "Force",
            Self::Disable => "Disable",
            Self::ForceIgnoringRules => "ForceIgnoringRules",
        }
    }
}

impl_wire_enum!(Apply3DSecure, "apply3DSecure");
