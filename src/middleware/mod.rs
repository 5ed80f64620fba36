//! HTTP middleware components.
//!
//! Middleware run before route handlers. They can short-circuit a request
//! (wrong verb) or replace a failed one with a safe response (panic).

/// Checkout method guard and panic handler
pub mod guard;
