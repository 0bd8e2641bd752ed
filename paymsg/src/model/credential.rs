//! Credential-on-file metadata, required when reusing stored cards.

use serde::{Serialize, Serializer};
use std::fmt;

/// Whether this is the first use of a stored credential or a subsequent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CofUsage {
    /// First time the credential is stored and used.
    First,
    /// A later use of an already-stored credential.
    Subsequent,
}

impl CofUsage {
    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Subsequent => "Subsequent",
        }
    }
}

/// Which party initiated the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiatedType {
    /// Customer-initiated transaction.
    ConsumerInitiated,
    /// Merchant-initiated transaction.
    MerchantInitiated,
}

impl InitiatedType {
    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConsumerInitiated => "CIT",
            Self::MerchantInitiated => "MIT",
        }
    }
}

/// The kind of merchant-initiated transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MitType {
    /// Fixed recurring series.
    Recurring,
    /// Instalment of a fixed total.
    Instalment,
    /// Unscheduled use of a stored credential.
    Unscheduled,
    /// Incremental charge on an existing authorization.
    Incremental,
    /// Charge after the original services were rendered.
    DelayedCharge,
    /// Charge for a no-show against a reservation.
    NoShow,
    /// Reauthorization of a prior purchase.
    Reauthorisation,
    /// Resubmission after a declined original.
    Resubmission,
}

impl MitType {
    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recurring => "Recurring",
            Self::Instalment => "Instalment",
            Self::Unscheduled => "Unscheduled",
            Self::Incremental => "Incremental",
            Self::DelayedCharge => "DelayedCharge",
            Self::NoShow => "NoShow",
            Self::Reauthorisation => "Reauthorisation",
            Self::Resubmission => "Resubmission",
        }
    }
}

macro_rules! impl_str_serialize {
    ($($ty:ident),+) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    )+};
}

impl_str_serialize!(CofUsage, InitiatedType, MitType);

/// Credential-on-file metadata describing how a stored card is being reused.
///
/// There is no cross-field constraint; unset optional fields are omitted
/// from serialization. Most callers want one of the three fixed recipes
/// rather than free-form construction:
/// [`CredentialType::for_new_reusable_card`],
/// [`CredentialType::for_customer_reusing_card`] or
/// [`CredentialType::for_merchant_reusing_card`].
///
/// # JSON Format
///
/// ```json
/// {
///   "cofUsage": "Subsequent",
///   "initiatedType": "MIT",
///   "mitType": "Unscheduled"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialType {
    cof_usage: CofUsage,
    initiated_type: InitiatedType,
    #[serde(skip_serializing_if = "Option::is_none")]
    mit_type: Option<MitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurring_expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurring_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_instal_data: Option<String>,
}

impl CredentialType {
    /// Creates credential metadata with the two mandatory discriminators.
    #[must_use]
    pub const fn new(cof_usage: CofUsage, initiated_type: InitiatedType) -> Self {
        Self {
            cof_usage,
            initiated_type,
            mit_type: None,
            recurring_expiry: None,
            recurring_frequency: None,
            purchase_instal_data: None,
        }
    }

    /// Recipe: storing a card for the first time with consent to reuse it.
    #[must_use]
    pub const fn for_new_reusable_card() -> Self {
        Self::new(CofUsage::First, InitiatedType::ConsumerInitiated)
    }

    /// Recipe: the customer actively reusing a stored card.
    #[must_use]
    pub const fn for_customer_reusing_card() -> Self {
        Self::new(CofUsage::Subsequent, InitiatedType::ConsumerInitiated)
            .with_mit_type(MitType::Unscheduled)
    }

    /// Recipe: the merchant charging a stored card without the customer
    /// present.
    #[must_use]
    pub const fn for_merchant_reusing_card() -> Self {
        Self::new(CofUsage::Subsequent, InitiatedType::MerchantInitiated)
            .with_mit_type(MitType::Unscheduled)
    }

    /// Sets the merchant-initiated transaction type.
    #[must_use]
    pub const fn with_mit_type(mut self, mit_type: MitType) -> Self {
        self.mit_type = Some(mit_type);
        self
    }

    /// Sets the final date of a recurring agreement (`YYYYMMDD`).
    #[must_use]
    pub fn with_recurring_expiry<S: Into<String>>(mut self, expiry: S) -> Self {
        self.recurring_expiry = Some(expiry.into());
        self
    }

    /// Sets the minimum number of days between recurring charges.
    #[must_use]
    pub fn with_recurring_frequency<S: Into<String>>(mut self, frequency: S) -> Self {
        self.recurring_frequency = Some(frequency.into());
        self
    }

    /// Sets the instalment purchase data.
    #[must_use]
    pub fn with_purchase_instal_data<S: Into<String>>(mut self, data: S) -> Self {
        self.purchase_instal_data = Some(data.into());
        self
    }

    /// Returns the credential-on-file usage discriminator.
    #[must_use]
    pub const fn cof_usage(&self) -> CofUsage {
        self.cof_usage
    }

    /// Returns the initiating-party discriminator.
    #[must_use]
    pub const fn initiated_type(&self) -> InitiatedType {
        self.initiated_type
    }

    /// Returns the merchant-initiated transaction type, if set.
    #[must_use]
    pub const fn mit_type(&self) -> Option<MitType> {
        self.mit_type
    }
}
