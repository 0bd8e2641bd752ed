//! Stored card identifier returned when card details are tokenised.

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::ValidationError;
use crate::extract;

/// A tokenised card identifier with its expiry and card type.
///
/// Constructed once from a decoded response at receipt time and read-only
/// thereafter. The identifier itself is short-lived on the gateway side, so
/// [`CardIdentifierResponse::is_expired`] treats a missing expiry the same
/// as one already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardIdentifierResponse {
    card_identifier: Option<String>,
    expiry: Option<OffsetDateTime>,
    card_type: Option<String>,
}

impl CardIdentifierResponse {
    /// Creates a card identifier, parsing the expiry timestamp.
    ///
    /// The expiry accepts RFC 3339, or a date-time without offset which is
    /// assumed UTC. An unparseable expiry is a [`ValidationError`]; an
    /// absent one is not.
    pub fn new(
        card_identifier: Option<&str>,
        expiry: Option<&str>,
        card_type: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let expiry = expiry.map(parse_expiry).transpose()?;
        Ok(Self {
            card_identifier: card_identifier.map(str::to_owned),
            expiry,
            card_type: card_type.map(str::to_owned),
        })
    }

    /// Creates a card identifier from decoded response data.
    ///
    /// Reads the paths `cardIdentifier`, `expiry` and `cardType`.
    pub fn from_data(data: &Value) -> Result<Self, ValidationError> {
        Self::new(
            extract::get_str(data, "cardIdentifier"),
            extract::get_str(data, "expiry"),
            extract::get_str(data, "cardType"),
        )
    }

    /// Returns the card identifier token, if present.
    #[must_use]
    pub fn card_identifier(&self) -> Option<&str> {
        self.card_identifier.as_deref()
    }

    /// Returns the parsed expiry of the identifier, if present.
    #[must_use]
    pub const fn expiry(&self) -> Option<OffsetDateTime> {
        self.expiry
    }

    /// Returns the card type (e.g. `Visa`), if present.
    #[must_use]
    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    /// Returns `true` when the identifier can no longer be used: the expiry
    /// is absent or already in the past.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.expiry {
            Some(expiry) => OffsetDateTime::now_utc() > expiry,
            None => true,
        }
    }
}

fn parse_expiry(value: &str) -> Result<OffsetDateTime, ValidationError> {
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(parsed);
    }
    // No offset in the string; the gateway's clock is UTC.
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(value, format)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| ValidationError::InvalidExpiry(value.to_owned()))
}
