//! Guards around the checkout endpoint.
//!
//! - [`require_post`] rejects any verb other than POST before the body is read
//! - [`server_error_on_panic`] turns a panic while handling a checkout into the
//!   generic `ERROR_SERVER` response instead of a dropped connection
//!
//! Both answer in the checkout wire format, so the checkout page can show a
//! message for every case.

use std::any::Any;

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::models::checkout::CheckoutFailure;

/// Method guard middleware function.
///
/// # Flow
///
/// 1. If the verb is POST, call the next handler
/// 2. Otherwise return 405 with `ERROR_METHOD_NOT_ALLOWED`, no field inspected
pub async fn require_post(request: Request, next: Next) -> Response {
    if request.method() != Method::POST {
        tracing::info!(method = %request.method(), "checkout rejected: method not allowed");
        return CheckoutFailure::MethodNotAllowed.into_response();
    }

    next.run(request).await
}

/// Response for `CatchPanicLayer::custom`.
///
/// The panic message is logged, never sent to the client.
pub fn server_error_on_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(detail, "checkout handler panicked");

    CheckoutFailure::ServerError.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn,
        routing::any,
    };
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn boom() -> &'static str {
        panic!("classification exploded")
    }

    async fn ok() -> &'static str {
        "ok"
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn request(method: Method) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn non_post_verbs_are_rejected() {
        let app = Router::new()
            .route("/", any(ok))
            .route_layer(from_fn(require_post));

        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = app.clone().oneshot(request(method)).await.unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body_json(response).await["error"], "ERROR_METHOD_NOT_ALLOWED");
        }
    }

    #[tokio::test]
    async fn post_reaches_handler() {
        let app = Router::new()
            .route("/", any(ok))
            .route_layer(from_fn(require_post));

        let response = app.oneshot(request(Method::POST)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn panic_becomes_server_error() {
        let app = Router::new()
            .route("/", any(boom))
            .layer(CatchPanicLayer::custom(server_error_on_panic));

        let response = app.oneshot(request(Method::POST)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "ERROR_SERVER");
        assert!(!body["message"].as_str().unwrap().contains("exploded"));
    }
}
