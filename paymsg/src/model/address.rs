//! Billing and shipping address value object.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::extract;
use crate::fields::FieldPrefix;

/// A postal address, validated at construction.
///
/// The (country, state) pair is always in one of exactly two shapes:
/// `(US, recognised subdivision)` or `(non-US, absent)`. The postal code is
/// mandatory except for `IE`. Once built the address never changes; a copy
/// serializing under a different field-name prefix is derived with
/// [`Address::with_field_prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    address1: String,
    address2: Option<String>,
    city: String,
    postal_code: Option<String>,
    country: String,
    state: Option<String>,
    prefix: FieldPrefix,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

impl Address {
    /// Creates a validated address.
    ///
    /// An empty string marks an optional field as unset. Fails when any of
    /// `address1`/`city`/`country` is empty, the country is not an ISO
    /// 3166-1 code, the state is missing or unrecognised for `US`, a state
    /// is supplied for a non-US country, or the postal code is empty for a
    /// non-IE country.
    pub fn new(
        address1: &str,
        address2: &str,
        city: &str,
        postal_code: &str,
        country: &str,
        state: &str,
    ) -> Result<Self, ValidationError> {
        if address1.is_empty() {
            return Err(ValidationError::MissingField("address1"));
        }
        if city.is_empty() {
            return Err(ValidationError::MissingField("city"));
        }
        if country.is_empty() {
            return Err(ValidationError::MissingField("country"));
        }

        if !paymsg_iso::countries::is_valid(country) {
            return Err(ValidationError::UnknownCountry(country.to_owned()));
        }

        if country == "US" {
            if state.is_empty() {
                return Err(ValidationError::StateRequired);
            }
            if !paymsg_iso::states::is_valid(country, state) {
                return Err(ValidationError::UnknownState {
                    country: country.to_owned(),
                    state: state.to_owned(),
                });
            }
        } else if !state.is_empty() {
            return Err(ValidationError::StateForbidden);
        }

        if country != "IE" && postal_code.is_empty() {
            return Err(ValidationError::PostalCodeRequired);
        }

        Ok(Self {
            address1: address1.to_owned(),
            address2: non_empty(address2),
            city: city.to_owned(),
            postal_code: non_empty(postal_code),
            country: country.to_owned(),
            state: non_empty(state),
            prefix: FieldPrefix::default(),
        })
    }

    /// Creates an address from decoded response data.
    ///
    /// Reads the paths `address1`, `address2`, `city`, `postalCode`,
    /// `country` and `state`; each defaults to unset when absent, after
    /// which the usual construction rules apply.
    pub fn from_data(data: &Value) -> Result<Self, ValidationError> {
        Self::new(
            extract::get_str(data, "address1").unwrap_or_default(),
            extract::get_str(data, "address2").unwrap_or_default(),
            extract::get_str(data, "city").unwrap_or_default(),
            extract::get_str(data, "postalCode").unwrap_or_default(),
            extract::get_str(data, "country").unwrap_or_default(),
            extract::get_str(data, "state").unwrap_or_default(),
        )
    }

    /// Returns a copy of this address serializing under `prefix`.
    ///
    /// The receiver is never mutated; both addresses share the same
    /// validated data.
    #[must_use]
    pub fn with_field_prefix(&self, prefix: &str) -> Self {
        let mut copy = self.clone();
        copy.prefix = FieldPrefix::new(prefix);
        copy
    }

    /// Returns the body partial for request composition.
    ///
    /// Mandatory fields are always present; optional fields only when set.
    /// Every field name passes through the active prefix.
    #[must_use]
    pub fn body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert(self.prefix.apply("address1"), self.address1.clone().into());
        if let Some(address2) = &self.address2 {
            body.insert(self.prefix.apply("address2"), address2.clone().into());
        }
        body.insert(self.prefix.apply("city"), self.city.clone().into());
        if let Some(postal_code) = &self.postal_code {
            body.insert(self.prefix.apply("postalCode"), postal_code.clone().into());
        }
        body.insert(self.prefix.apply("country"), self.country.clone().into());
        if let Some(state) = &self.state {
            body.insert(self.prefix.apply("state"), state.clone().into());
        }
        body
    }

    /// Returns the first address line.
    #[must_use]
    pub fn address1(&self) -> &str {
        &self.address1
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the ISO 3166-1 country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the state subdivision code, if set.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Returns the postal code, if set.
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gb_address_body_omits_unset_fields() {
        let address = Address::new("221B Baker St", "", "London", "NW16XE", "GB", "").unwrap();
        let body = Value::Object(address.body());
        assert_eq!(
            body,
            json!({
                "address1": "221B Baker St",
                "city": "London",
                "postalCode": "NW16XE",
                "country": "GB",
            })
        );
    }

    #[test]
    fn test_us_address_requires_state() {
        let err = Address::new("1 Infinite Loop", "", "Cupertino", "95014", "US", "").unwrap_err();
        assert!(matches!(err, ValidationError::StateRequired));
    }

    #[test]
    fn test_us_address_with_valid_state() {
        let address =
            Address::new("1 Infinite Loop", "", "Cupertino", "95014", "US", "CA").unwrap();
        assert_eq!(address.state(), Some("CA"));
    }

    #[test]
    fn test_us_address_rejects_unknown_state() {
        let err = Address::new("1 Infinite Loop", "", "Cupertino", "95014", "US", "ZZ").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownState { .. }));
    }

    #[test]
    fn test_non_us_address_forbids_state() {
        let err = Address::new("221B Baker St", "", "London", "NW16XE", "GB", "CA").unwrap_err();
        assert!(matches!(err, ValidationError::StateForbidden));
    }

    #[test]
    fn test_postal_code_optional_only_for_ie() {
        assert!(Address::new("1 Main St", "", "Dublin", "", "IE", "").is_ok());
        let err = Address::new("221B Baker St", "", "London", "", "GB", "").unwrap_err();
        assert!(matches!(err, ValidationError::PostalCodeRequired));
    }

    #[test]
    fn test_mandatory_fields() {
        assert!(matches!(
            Address::new("", "", "London", "NW16XE", "GB", ""),
            Err(ValidationError::MissingField("address1"))
        ));
        assert!(matches!(
            Address::new("221B Baker St", "", "", "NW16XE", "GB", ""),
            Err(ValidationError::MissingField("city"))
        ));
        assert!(matches!(
            Address::new("221B Baker St", "", "London", "NW16XE", "", ""),
            Err(ValidationError::MissingField("country"))
        ));
    }

    #[test]
    fn test_unknown_country_rejected() {
        let err = Address::new("1 Main St", "", "Nowhere", "123", "XX", "").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCountry(_)));
    }

    #[test]
    fn test_with_field_prefix_renames_without_mutating_original() {
        let address = Address::new("221B Baker St", "Flat B", "London", "NW16XE", "GB", "").unwrap();
        let prefixed = address.with_field_prefix("shipping");

        let body = Value::Object(prefixed.body());
        assert_eq!(
            body,
            json!({
                "shippingAddress1": "221B Baker St",
                "shippingAddress2": "Flat B",
                "shippingCity": "London",
                "shippingPostalCode": "NW16XE",
                "shippingCountry": "GB",
            })
        );

        // The original still serializes unprefixed.
        assert!(address.body().contains_key("address1"));
        assert!(!address.body().contains_key("shippingAddress1"));
    }

    #[test]
    fn test_from_data_roundtrip() {
        let address = Address::new("221B Baker St", "", "London", "NW16XE", "GB", "").unwrap();
        let body = Value::Object(address.body());
        let rebuilt = Address::from_data(&body).unwrap();
        assert_eq!(rebuilt, address);
    }
}
