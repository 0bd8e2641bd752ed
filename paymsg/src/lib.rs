#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Message construction and validation for card payment gateway clients.
//!
//! This crate is the structured message layer of a gateway client SDK: it
//! builds strictly-validated outbound request bodies and parses structured
//! inbound responses into typed value objects. It performs no I/O — an
//! external transport collaborator encodes the bodies this crate produces
//! and decodes the JSON this crate consumes.
//!
//! # Overview
//!
//! Outbound, callers construct value objects (validated at construction),
//! compose them into a [`request::Payment`], and hand the resulting body map
//! to the transport. Inbound, the decoded response JSON is pulled apart with
//! [`extract`] and rebuilt into immutable response objects via per-type
//! `from_data` factories.
//!
//! # Modules
//!
//! - [`amount`] - Monetary amounts in currency minor units
//! - [`enums`] - Enumerated request fields with table-lookup validation
//! - [`error`] - The construction-time validation error taxonomy
//! - [`extract`] - Dotted-path extraction over decoded response JSON
//! - [`fields`] - Wire field-name prefixing
//! - [`model`] - Self-validating request value objects
//! - [`request`] - Outbound request composition
//! - [`response`] - Typed inbound response objects
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod amount;
pub mod enums;
pub mod error;
pub mod extract;
pub mod fields;
pub mod model;
pub mod request;
pub mod response;

pub use amount::Amount;
pub use error::ValidationError;
