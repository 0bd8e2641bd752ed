//! Customer and shipping-recipient value object.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::extract;
use crate::fields::FieldPrefix;

/// A person attached to a transaction: the paying customer or the shipping
/// recipient.
///
/// First and last name are mandatory; email and phone are optional and only
/// serialized in customer contexts. Shipping recipients contribute name
/// fields only, via [`Person::names_body`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    prefix: FieldPrefix,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

impl Person {
    /// Creates a validated person. An empty string marks an optional field
    /// as unset; an empty first or last name is an error.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Self, ValidationError> {
        if first_name.is_empty() {
            return Err(ValidationError::MissingField("firstName"));
        }
        if last_name.is_empty() {
            return Err(ValidationError::MissingField("lastName"));
        }
        Ok(Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: non_empty(email),
            phone: non_empty(phone),
            prefix: FieldPrefix::default(),
        })
    }

    /// Creates a person from decoded response data.
    ///
    /// Reads the paths `firstName`, `lastName`, `email` and `phone`.
    pub fn from_data(data: &Value) -> Result<Self, ValidationError> {
        Self::new(
            extract::get_str(data, "firstName").unwrap_or_default(),
            extract::get_str(data, "lastName").unwrap_or_default(),
            extract::get_str(data, "email").unwrap_or_default(),
            extract::get_str(data, "phone").unwrap_or_default(),
        )
    }

    /// Returns a copy of this person serializing under `prefix`.
    #[must_use]
    pub fn with_field_prefix(&self, prefix: &str) -> Self {
        let mut copy = self.clone();
        copy.prefix = FieldPrefix::new(prefix);
        copy
    }

    /// Returns the full body partial: names plus any contact fields.
    #[must_use]
    pub fn body(&self) -> Map<String, Value> {
        let mut body = self.names_body();
        if let Some(email) = &self.email {
            body.insert(self.prefix.apply("email"), email.clone().into());
        }
        if let Some(phone) = &self.phone {
            body.insert(self.prefix.apply("phone"), phone.clone().into());
        }
        body
    }

    /// Returns only the name fields, for shipping-recipient contexts.
    #[must_use]
    pub fn names_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert(self.prefix.apply("firstName"), self.first_name.clone().into());
        body.insert(self.prefix.apply("lastName"), self.last_name.clone().into());
        body
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the email address, if set.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if set.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_are_mandatory() {
        assert!(matches!(
            Person::new("", "Holmes", "", ""),
            Err(ValidationError::MissingField("firstName"))
        ));
        assert!(matches!(
            Person::new("Sherlock", "", "", ""),
            Err(ValidationError::MissingField("lastName"))
        ));
    }

    #[test]
    fn test_body_includes_contact_fields_when_set() {
        let person = Person::new("Sherlock", "Holmes", "sh@example.com", "").unwrap();
        let body = Value::Object(person.body());
        assert_eq!(
            body,
            json!({
                "firstName": "Sherlock",
                "lastName": "Holmes",
                "email": "sh@example.com",
            })
        );
    }

    #[test]
    fn test_names_body_excludes_contact_fields() {
        let person =
            Person::new("Sherlock", "Holmes", "sh@example.com", "020 7946 0000").unwrap();
        let body = Value::Object(person.names_body());
        assert_eq!(body, json!({"firstName": "Sherlock", "lastName": "Holmes"}));
    }

    #[test]
    fn test_prefixed_bodies() {
        let person = Person::new("Sherlock", "Holmes", "sh@example.com", "").unwrap();
        let customer = person.with_field_prefix("customer");
        let body = Value::Object(customer.body());
        assert_eq!(
            body,
            json!({
                "customerFirstName": "Sherlock",
                "customerLastName": "Holmes",
                "customerEmail": "sh@example.com",
            })
        );

        let recipient = person.with_field_prefix("recipient");
        let names = Value::Object(recipient.names_body());
        assert_eq!(
            names,
            json!({"recipientFirstName": "Sherlock", "recipientLastName": "Holmes"})
        );
    }

    #[test]
    fn test_from_data() {
        let data = json!({"firstName": "John", "lastName": "Watson", "phone": "12345"});
        let person = Person::from_data(&data).unwrap();
        assert_eq!(person.first_name(), "John");
        assert_eq!(person.phone(), Some("12345"));
        assert_eq!(person.email(), None);
    }
}
