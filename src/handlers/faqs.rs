//! FAQ HTTP handler.

use axum::Json;

use crate::models::faq::{FAQS, Faq};

/// `GET /api/faqs` - the static FAQ list, in display order.
pub async fn list_faqs() -> Json<&'static [Faq]> {
    Json(FAQS)
}
