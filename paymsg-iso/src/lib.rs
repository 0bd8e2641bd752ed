//! ISO reference tables consumed by the `paymsg` message layer.
//!
//! This crate holds the static lookup data that request validation depends
//! on, kept apart from the core types so the tables can be revised without
//! touching message logic:
//!
//! - [`countries`] - ISO 3166-1 alpha-2 country codes
//! - [`states`] - ISO 3166-2 subdivision codes, keyed by country
//! - [`currencies`] - ISO 4217 currency codes with minor-unit exponents
//!
//! Every table is a sorted `&'static` slice with a binary-search predicate;
//! lookups are pure and never allocate.

pub mod countries;
pub mod currencies;
pub mod states;
