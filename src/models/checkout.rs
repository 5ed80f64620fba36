//! Checkout request body and outcome types.
//!
//! This module defines:
//! - `CheckoutOrder`: the order posted by the checkout form
//! - `CheckoutOutcome`: the single result of validating an order
//! - `CheckoutFailure`: every declared reason an order can be refused
//!
//! Orders are transient. They are validated once and echoed back on success;
//! nothing is stored server-side.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Order posted to `POST /api/checkout`.
///
/// Only `card.number` and `customer.address.address2` are typed: they are the
/// two fields checkout reads. Every other key is kept as-is in the `extra`
/// maps, whatever its type, so a successful order is echoed back exactly as
/// it was posted.
///
/// # JSON Example
///
/// ```json
/// {
///   "customer": {
///     "name": "Peter",
///     "lastname": "Parker",
///     "email": "peter@dailybugle.com",
///     "address": {
///       "address1": "20 Ingram Street",
///       "address2": "Apt 4",
///       "city": "New York",
///       "state": "NY",
///       "zipCode": "11375"
///     }
///   },
///   "card": {
///     "number": "4242424242424242",
///     "nameOnCard": "PETER PARKER",
///     "expDate": "12/29",
///     "cvc": "123"
///   },
///   "order": { "name": "Amazing Fantasy #15", "image": "https://...", "price": 72 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    pub customer: Customer,
    pub card: Card,

    /// `order` summary and anything else the page sends along.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub address: Address,

    /// `name`, `lastname`, `email`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Free-form second line; the literal `invalid` marks an undeliverable address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// `address1`, `city`, `state`, `zipCode`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub number: String,

    /// `nameOnCard`, `expDate`, `cvc`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Last four characters of the card number, for logs.
    pub fn last_four(&self) -> &str {
        let number = self.number.trim_end();
        let start = number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &number[start..]
    }
}

/// Every declared reason a checkout can fail.
///
/// The wire codes are the ones the checkout page switches on to pick a
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutFailure {
    InvalidAddress,
    CardWithoutFunds,
    CardWithoutAuthorization,
    CardDataIncorrect,
    MethodNotAllowed,
    ServerError,
}

impl CheckoutFailure {
    pub fn code(self) -> &'static str {
        match self {
            CheckoutFailure::InvalidAddress => "ERROR_INCORRECT_ADDRESS",
            CheckoutFailure::CardWithoutFunds => "ERROR_CARD_WITHOUT_FUNDS",
            CheckoutFailure::CardWithoutAuthorization => "ERROR_CARD_WITHOUT_AUTHORIZATION",
            CheckoutFailure::CardDataIncorrect => "ERROR_CARD_DATA_INCORRECT",
            CheckoutFailure::MethodNotAllowed => "ERROR_METHOD_NOT_ALLOWED",
            CheckoutFailure::ServerError => "ERROR_SERVER",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CheckoutFailure::InvalidAddress => "Invalid delivery address",
            CheckoutFailure::CardWithoutFunds => "Card without available funds",
            CheckoutFailure::CardWithoutAuthorization => {
                "Card without authorization. Contact your bank and try again"
            }
            CheckoutFailure::CardDataIncorrect => "Incorrect card data",
            CheckoutFailure::MethodNotAllowed => "Method not allowed",
            CheckoutFailure::ServerError => "Server error. Try again",
        }
    }

    /// - Address and card content → 400 Bad Request
    /// - Wrong verb → 405 Method Not Allowed
    /// - Unexpected fault → 500 Internal Server Error
    pub fn status(self) -> StatusCode {
        match self {
            CheckoutFailure::InvalidAddress
            | CheckoutFailure::CardWithoutFunds
            | CheckoutFailure::CardWithoutAuthorization
            | CheckoutFailure::CardDataIncorrect => StatusCode::BAD_REQUEST,
            CheckoutFailure::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CheckoutFailure::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CheckoutFailure {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code(),
            "message": self.message()
        }));

        (self.status(), body).into_response()
    }
}

/// Result of validating one order. Exactly one variant per attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Success(CheckoutOrder),
    Failure(CheckoutFailure),
}

impl CheckoutOutcome {
    /// Wire code for logs: `OK` or the failure code.
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutOutcome::Success(_) => "OK",
            CheckoutOutcome::Failure(failure) => failure.code(),
        }
    }
}

/// # Response Format
///
/// - Success (200): `{"data": <order>}`
/// - Failure: `{"error": "<CODE>", "message": "..."}` with the failure's status
impl IntoResponse for CheckoutOutcome {
    fn into_response(self) -> Response {
        match self {
            CheckoutOutcome::Success(order) => {
                (StatusCode::OK, Json(json!({ "data": order }))).into_response()
            }
            CheckoutOutcome::Failure(failure) => failure.into_response(),
        }
    }
}
