//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls a service (catalog client, checkout validator)
//! 3. Returns HTTP response (JSON, status code)

/// Character detail endpoint
pub mod characters;
/// Checkout endpoint
pub mod checkout;
/// Comic list and detail endpoints
pub mod comics;
/// FAQ endpoint
pub mod faqs;
pub mod health;
