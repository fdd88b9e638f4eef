//! Data models for the Ozon Seller API.
//!
//! Request parameters serialize to the exact JSON bodies the service expects.
//! Responses tolerate missing fields and carry the [`CommonResponse`] envelope
//! in their `common` field.

pub mod api_response;
pub mod bulk;
pub mod common;
pub mod economy;
pub mod prices;
pub mod products;
pub mod reports;
pub mod stocks;

pub use api_response::{CommonResponse, CommonResponseDetail, EmptyResponse, Envelope};
pub use bulk::{BulkResponse, ItemOutcome};
pub use common::*;
pub use economy::*;
pub use prices::*;
pub use products::*;
pub use reports::*;
pub use stocks::*;

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
