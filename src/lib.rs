//! # ozon-seller-client
//!
//! A Rust client library for the Ozon Seller API.
//!
//! This crate provides a typed, async interface to the product catalog,
//! stocks, prices and reports of an Ozon seller account.
//!
//! ## Features
//!
//! - Typed request parameters and responses for every endpoint
//! - Lazy page streams for list endpoints
//! - Per-item outcomes for bulk updates
//! - Local checks of documented batch limits before anything is sent
//!
//! ## Example
//!
//! ```rust,no_run
//! use ozon_seller_client::{BulkResponse, OzonClient, StockUpdate, UpdateStocksParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OzonClient::builder()
//!         .client_id("123456")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let params = UpdateStocksParams {
//!         stocks: vec![StockUpdate {
//!             offer_id: "PH11042".into(),
//!             stock: 12,
//!             ..Default::default()
//!         }],
//!     };
//!
//!     let response = client.products().update_stocks(&params).await?;
//!     for item in response.failed() {
//!         println!("{}: {:?}", item.offer_id, item.errors);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;
pub mod pagination;
mod validation;

pub use api::{Products, Reports};
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{OzonClient, OzonClientBuilder, DEFAULT_BASE_URL};
pub use error::{OzonError, OzonResult, UrlParseError};
pub use models::*;
pub use pagination::Paginated;
pub use validation::{Validate, MAX_PAGE_LIMIT};
