//! Shared helpers for unit tests.

use std::time::Duration;

use axum::Router;
use secrecy::SecretString;
use url::Url;

use crate::config::CatalogConfig;

/// Serve `router` on an ephemeral local port and return the catalog base URL
/// (`http://127.0.0.1:<port>/v1/public`).
pub async fn spawn_upstream(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{addr}/v1/public")).unwrap()
}

pub fn catalog_config(base_url: Url) -> CatalogConfig {
    CatalogConfig {
        base_url,
        public_key: "1234".to_string(),
        private_key: SecretString::from("abcd"),
        timeout: Duration::from_secs(5),
    }
}

/// Body the checkout form posts, with the given card number.
pub fn checkout_body(card_number: &str, address2: &str) -> serde_json::Value {
    serde_json::json!({
        "customer": {
            "name": "Peter",
            "lastname": "Parker",
            "email": "peter@dailybugle.com",
            "address": {
                "address1": "20 Ingram Street",
                "address2": address2,
                "city": "New York",
                "state": "NY",
                "zipCode": "11375"
            }
        },
        "card": {
            "number": card_number,
            "nameOnCard": "PETER PARKER",
            "expDate": "12/29",
            "cvc": "123"
        }
    })
}
