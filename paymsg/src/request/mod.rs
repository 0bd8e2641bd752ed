//! Outbound request composition.
//!
//! The composer merges validated value objects and scalar options into one
//! insertion-ordered body map for the transport collaborator to encode. All
//! validation has already happened by the time a body is produced; building
//! the body itself cannot fail.

mod payment;

pub use payment::Payment;
