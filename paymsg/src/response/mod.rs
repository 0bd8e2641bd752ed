//! Typed inbound response objects.
//!
//! Each type is built once from the decoded response JSON via a `from_data`
//! factory documenting the dotted paths it reads, and is read-only
//! thereafter. Absent paths are defaults, never errors.

mod card_identifier;
mod secure3d;

pub use card_identifier::CardIdentifierResponse;
pub use secure3d::{Secure3D, Secure3DStatus};
