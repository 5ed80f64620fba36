//! Checkout HTTP handler.
//!
//! `/api/checkout` is routed for every verb; the method guard in
//! [`middleware::guard`](crate::middleware::guard) answers non-POST requests
//! before this handler runs.

use axum::{Json, extract::rejection::JsonRejection};

use crate::{
    models::checkout::{CheckoutFailure, CheckoutOrder, CheckoutOutcome},
    services::checkout::validate,
};

/// Validate a submitted order.
///
/// # Endpoint
///
/// `POST /api/checkout`
///
/// # Response
///
/// - **Success (200)**: `{"data": <order>}`
/// - **Error (400)**: address or card rejected, e.g.
///   `{"error": "ERROR_CARD_WITHOUT_FUNDS", "message": "..."}`
/// - **Error (405)**: any verb other than POST
/// - **Error (500)**: body missing or not a checkout order (`ERROR_SERVER`)
///
/// A body that cannot be decoded is an internal fault (`ERROR_SERVER`), not
/// bad card data.
pub async fn checkout(payload: Result<Json<CheckoutOrder>, JsonRejection>) -> CheckoutOutcome {
    let order = match payload {
        Ok(Json(order)) => order,
        Err(rejection) => {
            tracing::error!(error = %rejection, "checkout body could not be decoded");
            return CheckoutOutcome::Failure(CheckoutFailure::ServerError);
        }
    };

    let outcome = validate(&order);
    tracing::info!(
        outcome = outcome.code(),
        card_last4 = order.card.last_four(),
        "checkout processed"
    );

    outcome
}
