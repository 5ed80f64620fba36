//! Business logic services.
//!
//! Services contain the logic separated from HTTP handlers: signing catalog
//! requests, talking to the catalog, and classifying checkout orders.

pub mod checkout;
pub mod marvel;
pub mod signer;
