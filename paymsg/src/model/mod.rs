//! Self-validating request value objects.
//!
//! Each type here validates its own invariants at construction and is
//! immutable afterwards; the only derived form is a copy carrying a
//! different field-name prefix. Serialization is a partial body map that a
//! request composer merges into the outbound payload.

mod address;
mod credential;
mod person;

pub use address::Address;
pub use credential::{CofUsage, CredentialType, InitiatedType, MitType};
pub use person::Person;
