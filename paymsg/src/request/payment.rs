//! The payment transaction request.

use serde_json::{Map, Value};

use crate::amount::Amount;
use crate::enums::{Apply3DSecure, ApplyAvsCvcCheck, EntryMethod, RecurringIndicator};
use crate::error::ValidationError;
use crate::model::{Address, Person};

/// Field-name prefix applied to the customer's fields.
const CUSTOMER_PREFIX: &str = "customer";
/// Field-name prefix applied to the shipping address fields.
const SHIPPING_ADDRESS_PREFIX: &str = "shipping";
/// Field-name prefix applied to the shipping recipient's name fields.
const SHIPPING_RECIPIENT_PREFIX: &str = "recipient";

/// A payment transaction request.
///
/// Composes the payment method, merchant transaction code, amount, billing
/// address and customer (all mandatory, taken at construction) with an
/// optional shipping address/recipient and scalar options. The request owns
/// re-prefixed copies of its value objects: billing serializes unprefixed,
/// the customer under `customer`, the shipping address under `shipping` and
/// the shipping recipient under `recipient`.
///
/// Every `with_*` mutator consumes the request and returns a new value;
/// enumerated options are validated at the point of setting, never at
/// serialization time. [`Payment::body`] itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    payment_method: Value,
    vendor_tx_code: String,
    amount: Amount,
    description: String,
    billing_address: Address,
    customer: Person,
    shipping_address: Option<Address>,
    shipping_recipient: Option<Person>,
    entry_method: Option<EntryMethod>,
    recurring_indicator: Option<RecurringIndicator>,
    gift_aid: bool,
    apply_avs_cvc_check: Option<ApplyAvsCvcCheck>,
    apply_3d_secure: Option<Apply3DSecure>,
    referrer_id: Option<String>,
}

impl Payment {
    /// Wire tag identifying this transaction type.
    pub const TRANSACTION_TYPE: &'static str = "Payment";

    /// Creates a payment request from its mandatory parts.
    ///
    /// `payment_method` is the already-serialized payment method block from
    /// the payment-method collaborator (e.g. a card block). The billing
    /// address and customer are copied with their request prefixes applied;
    /// the values passed in are unaffected by anything done to the request
    /// afterwards.
    pub fn new<V, D>(
        payment_method: Value,
        vendor_tx_code: V,
        amount: Amount,
        description: D,
        billing_address: Address,
        customer: Person,
    ) -> Self
    where
        V: Into<String>,
        D: Into<String>,
    {
        Self {
            payment_method,
            vendor_tx_code: vendor_tx_code.into(),
            amount,
            description: description.into(),
            billing_address: billing_address.with_field_prefix(""),
            customer: customer.with_field_prefix(CUSTOMER_PREFIX),
            shipping_address: None,
            shipping_recipient: None,
            entry_method: None,
            recurring_indicator: None,
            gift_aid: false,
            apply_avs_cvc_check: None,
            apply_3d_secure: None,
            referrer_id: None,
        }
    }

    /// Attaches a shipping address, re-prefixed for the shipping block.
    #[must_use]
    pub fn with_shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address.with_field_prefix(SHIPPING_ADDRESS_PREFIX));
        self
    }

    /// Attaches a shipping recipient, re-prefixed for the shipping block.
    ///
    /// Only the recipient's name fields are serialized.
    #[must_use]
    pub fn with_shipping_recipient(mut self, recipient: Person) -> Self {
        self.shipping_recipient = Some(recipient.with_field_prefix(SHIPPING_RECIPIENT_PREFIX));
        self
    }

    /// Sets the entry method, validated against its accepted values.
    pub fn with_entry_method(mut self, entry_method: &str) -> Result<Self, ValidationError> {
        self.entry_method = Some(EntryMethod::validate(entry_method)?);
        Ok(self)
    }

    /// Sets the recurring indicator, validated against its accepted values.
    pub fn with_recurring_indicator(
        mut self,
        recurring_indicator: &str,
    ) -> Result<Self, ValidationError> {
        self.recurring_indicator = Some(RecurringIndicator::validate(recurring_indicator)?);
        Ok(self)
    }

    /// Sets the gift-aid flag; only a `true` value is ever serialized.
    #[must_use]
    pub const fn with_gift_aid(mut self, gift_aid: bool) -> Self {
        self.gift_aid = gift_aid;
        self
    }

    /// Sets the AVS/CVC check mode, validated against its accepted values.
    pub fn with_apply_avs_cvc_check(
        mut self,
        apply_avs_cvc_check: &str,
    ) -> Result<Self, ValidationError> {
        self.apply_avs_cvc_check = Some(ApplyAvsCvcCheck::validate(apply_avs_cvc_check)?);
        Ok(self)
    }

    /// Sets the 3-D Secure mode, validated against its accepted values.
    pub fn with_apply_3d_secure(mut self, apply_3d_secure: &str) -> Result<Self, ValidationError> {
        self.apply_3d_secure = Some(Apply3DSecure::validate(apply_3d_secure)?);
        Ok(self)
    }

    /// Replaces the transaction description.
    #[must_use]
    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the partner referrer id.
    #[must_use]
    pub fn with_referrer_id<R: Into<String>>(mut self, referrer_id: R) -> Self {
        self.referrer_id = Some(referrer_id.into());
        self
    }

    /// Returns the merchant's transaction code.
    #[must_use]
    pub fn vendor_tx_code(&self) -> &str {
        &self.vendor_tx_code
    }

    /// Returns the transaction amount.
    #[must_use]
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Composes the outbound body map.
    ///
    /// The mandatory block comes first, then the customer fields merged flat
    /// at top level, then the `shippingDetails` block (present only when a
    /// shipping address is attached), then each optional scalar that has
    /// been explicitly set. Map order is insertion order and no field is
    /// emitted twice.
    #[must_use]
    pub fn body(&self) -> Map<String, Value> {
        let mut result = Map::new();

        result.insert("transactionType".to_owned(), Self::TRANSACTION_TYPE.into());
        result.insert("paymentMethod".to_owned(), self.payment_method.clone());
        result.insert("vendorTxCode".to_owned(), self.vendor_tx_code.clone().into());
        result.insert("amount".to_owned(), self.amount.minor_units().into());
        result.insert("currency".to_owned(), self.amount.currency().into());
        result.insert("description".to_owned(), self.description.clone().into());
        result.insert(
            "billingAddress".to_owned(),
            Value::Object(self.billing_address.body()),
        );

        // Customer names and contact fields sit flat at the top level,
        // already carrying the customer prefix.
        result.extend(self.customer.body());

        if let Some(shipping_address) = &self.shipping_address {
            let mut shipping_details = shipping_address.body();
            if let Some(recipient) = &self.shipping_recipient {
                shipping_details.extend(recipient.names_body());
            }
            result.insert(
                "shippingDetails".to_owned(),
                Value::Object(shipping_details),
            );
        }

        if let Some(entry_method) = self.entry_method {
            result.insert("entryMethod".to_owned(), entry_method.as_str().into());
        }
        if let Some(recurring_indicator) = self.recurring_indicator {
            result.insert(
                "recurringIndicator".to_owned(),
                recurring_indicator.as_str().into(),
            );
        }
        if self.gift_aid {
            result.insert("giftAid".to_owned(), true.into());
        }
        if let Some(apply_avs_cvc_check) = self.apply_avs_cvc_check {
            result.insert(
                "applyAvsCvcCheck".to_owned(),
                apply_avs_cvc_check.as_str().into(),
            );
        }
        if let Some(apply_3d_secure) = self.apply_3d_secure {
            result.insert("apply3DSecure".to_owned(), apply_3d_secure.as_str().into());
        }
        if let Some(referrer_id) = &self.referrer_id {
            result.insert("referrerId".to_owned(), referrer_id.clone().into());
        }

        #[cfg(feature = "telemetry")]
        tracing::trace!(
            vendor_tx_code = %self.vendor_tx_code,
            fields = result.len(),
            "Composed payment request body"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn billing() -> Address {
        Address::new("221B Baker St", "", "London", "NW16XE", "GB", "").unwrap()
    }

    fn customer() -> Person {
        Person::new("Sherlock", "Holmes", "sh@example.com", "").unwrap()
    }

    fn payment() -> Payment {
        Payment::new(
            json!({"type": "card", "cardIdentifier": "token"}),
            "TX-0001",
            Amount::new(1234, "GBP").unwrap(),
            "Deerstalker hat",
            billing(),
            customer(),
        )
    }

    #[test]
    fn test_mandatory_block_and_flat_customer() {
        let body = Value::Object(payment().body());
        assert_eq!(
            body,
            json!({
                "transactionType": "Payment",
                "paymentMethod": {"type": "card", "cardIdentifier": "token"},
                "vendorTxCode": "TX-0001",
                "amount": 1234,
                "currency": "GBP",
                "description": "Deerstalker hat",
                "billingAddress": {
                    "address1": "221B Baker St",
                    "city": "London",
                    "postalCode": "NW16XE",
                    "country": "GB",
                },
                "customerFirstName": "Sherlock",
                "customerLastName": "Holmes",
                "customerEmail": "sh@example.com",
            })
        );
    }

    #[test]
    fn test_body_preserves_insertion_order() {
        let body = payment().body();
        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "transactionType",
                "paymentMethod",
                "vendorTxCode",
                "amount",
                "currency",
                "description",
                "billingAddress",
                "customerFirstName",
                "customerLastName",
                "customerEmail",
            ]
        );
    }

    #[test]
    fn test_shipping_block_omitted_without_address() {
        // A recipient alone is not enough to emit the block.
        let request =
            payment().with_shipping_recipient(Person::new("John", "Watson", "", "").unwrap());
        assert!(!request.body().contains_key("shippingDetails"));
    }

    #[test]
    fn test_shipping_block_with_recipient_names_only() {
        let shipping = Address::new("10 Downing St", "", "London", "SW1A2AA", "GB", "").unwrap();
        let recipient =
            Person::new("John", "Watson", "jw@example.com", "020 7946 0000").unwrap();
        let request = payment()
            .with_shipping_address(shipping)
            .with_shipping_recipient(recipient);

        let body = request.body();
        assert_eq!(
            body.get("shippingDetails").unwrap(),
            &json!({
                "shippingAddress1": "10 Downing St",
                "shippingCity": "London",
                "shippingPostalCode": "SW1A2AA",
                "shippingCountry": "GB",
                "recipientFirstName": "John",
                "recipientLastName": "Watson",
            })
        );
    }

    #[test]
    fn test_optional_scalars_emitted_only_when_set() {
        let base = payment().body();
        for key in [
            "entryMethod",
            "recurringIndicator",
            "giftAid",
            "applyAvsCvcCheck",
            "apply3DSecure",
            "referrerId",
        ] {
            assert!(!base.contains_key(key), "{key} should be absent until set");
        }

        let request = payment()
            .with_entry_method("Ecommerce")
            .unwrap()
            .with_recurring_indicator("Recurring")
            .unwrap()
            .with_gift_aid(true)
            .with_apply_avs_cvc_check("Force")
            .unwrap()
            .with_apply_3d_secure("UseMSPSetting")
            .unwrap()
            .with_referrer_id("partner-42");
        let body = request.body();
        assert_eq!(body["entryMethod"], "Ecommerce");
        assert_eq!(body["recurringIndicator"], "Recurring");
        assert_eq!(body["giftAid"], json!(true));
        assert_eq!(body["applyAvsCvcCheck"], "Force");
        assert_eq!(body["apply3DSecure"], "UseMSPSetting");
        assert_eq!(body["referrerId"], "partner-42");
    }

    #[test]
    fn test_gift_aid_false_never_emitted() {
        let request = payment().with_gift_aid(true).with_gift_aid(false);
        assert!(!request.body().contains_key("giftAid"));
    }

    #[test]
    fn test_enum_options_fail_at_the_setter() {
        let err = payment().with_entry_method("CardPresent").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownEnumValue {
                field: "entryMethod",
                ..
            }
        ));

        let err = payment().with_apply_3d_secure("Maybe").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnknownEnumValue {
                field: "apply3DSecure",
                ..
            }
        ));
    }

    #[test]
    fn test_enum_aliases_stored_canonically() {
        let request = payment().with_apply_3d_secure("1").unwrap();
        assert_eq!(request.body()["apply3DSecure"], "Force");
    }

    #[test]
    fn test_with_mutators_leave_inputs_untouched() {
        let billing = billing();
        let request = Payment::new(
            json!({}),
            "TX-0002",
            Amount::new(500, "EUR").unwrap(),
            "Test",
            billing.clone(),
            customer(),
        );
        let updated = request.with_description("Changed");

        // The address supplied at construction still serializes unprefixed
        // and unchanged.
        assert!(billing.body().contains_key("address1"));
        assert_eq!(updated.body()["description"], "Changed");
    }

    #[test]
    fn test_description_replaced_not_duplicated() {
        let body = payment().with_description("Other").body();
        assert_eq!(body["description"], "Other");
        assert_eq!(body.keys().filter(|k| *k == "description").count(), 1);
    }
}
