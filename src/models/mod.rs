//! Data models exchanged with the front end and the catalog API.

/// Catalog API response envelope
pub mod catalog;
/// Checkout order and outcome
pub mod checkout;
/// Frequently asked questions
pub mod faq;
