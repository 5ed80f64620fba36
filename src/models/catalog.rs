//! Response envelope of the comic catalog API.
//!
//! Every catalog response wraps its results the same way:
//!
//! ```json
//! {
//!   "code": 200,
//!   "status": "Ok",
//!   "data": { "offset": 0, "limit": 20, "total": 1, "count": 1, "results": [ ... ] }
//! }
//! ```
//!
//! Only the parts of the envelope this service reads are typed. Results stay
//! `serde_json::Value` so they reach the page layer exactly as the catalog
//! sent them.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DataWrapper<T> {
    pub data: DataContainer<T>,
}

#[derive(Debug, Deserialize)]
pub struct DataContainer<T> {
    /// Matches available upstream, not the number returned.
    #[serde(default)]
    pub total: u32,
    pub results: Vec<T>,
}

impl<T> DataWrapper<T> {
    /// First result, for single-resource lookups.
    pub fn into_first(self) -> Option<T> {
        self.data.results.into_iter().next()
    }
}
