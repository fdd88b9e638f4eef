//! Endpoint groups of the Seller API.

pub mod products;
pub mod reports;

pub use products::Products;
pub use reports::Reports;
