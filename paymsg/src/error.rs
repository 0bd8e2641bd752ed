//! Error types for message construction and validation.
//!
//! Every failure in this crate is raised synchronously at construction or at
//! a scalar setter, naming the offending field and the rejected value. A
//! missing optional field or an absent response path is never an error — it
//! resolves to a default and is simply omitted from output.

/// Errors raised when a value object or request fails validation.
///
/// These are fatal to the single construction call that raised them: the
/// caller must supply corrected input and reconstruct. A partially-built
/// invalid object is never observable.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A mandatory field was empty or missing.
    #[error("field \"{0}\" is mandatory but not set")]
    MissingField(&'static str),
    /// The country code is not a recognised ISO 3166-1 alpha-2 code.
    #[error("country code \"{0}\" is not recognised")]
    UnknownCountry(String),
    /// The state code is not a recognised subdivision of the country.
    #[error("state code \"{state}\" for country \"{country}\" is not recognised")]
    UnknownState {
        /// The country the state was checked against.
        country: String,
        /// The rejected state code.
        state: String,
    },
    /// The country is US but no state was supplied.
    #[error("state must be provided for US addresses")]
    StateRequired,
    /// A state was supplied for a non-US country.
    #[error("state must be left blank for non-US addresses")]
    StateForbidden,
    /// The country requires a postal code but none was supplied.
    #[error("postal code is mandatory for non-IE addresses")]
    PostalCodeRequired,
    /// The currency code is not a recognised ISO 4217 code.
    #[error("currency code \"{0}\" is not recognised")]
    UnknownCurrency(String),
    /// A candidate value did not match any canonical value for an
    /// enumerated field.
    #[error("unknown {field} \"{value}\"; require one of {}", .accepted.join(", "))]
    UnknownEnumValue {
        /// The logical field being set.
        field: &'static str,
        /// The rejected candidate.
        value: String,
        /// The canonical values the field accepts.
        accepted: &'static [&'static str],
    },
    /// A monetary amount string could not be expressed in the currency's
    /// minor units.
    #[error("amount \"{0}\" is not valid for the currency")]
    InvalidAmount(String),
    /// A card expiry timestamp could not be parsed.
    #[error("expiry \"{0}\" is not a recognised timestamp")]
    InvalidExpiry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_value_lists_accepted() {
        let err = ValidationError::UnknownEnumValue {
            field: "entryMethod",
            value: "CardPresent".into(),
            accepted: &["Ecommerce", "MailOrder"],
        };
        assert_eq!(
            err.to_string(),
            "unknown entryMethod \"CardPresent\"; require one of Ecommerce, MailOrder"
        );
    }

    #[test]
    fn test_missing_field_names_field() {
        let err = ValidationError::MissingField("address1");
        assert_eq!(err.to_string(), "field \"address1\" is mandatory but not set");
    }
}
