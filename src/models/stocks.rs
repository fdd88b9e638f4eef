//! Stock levels: reading and updating product quantities.

use serde::{Deserialize, Serialize};

use super::api_response::impl_envelope;
use super::bulk::{BulkResponse, ItemOutcome};
use super::common::{ItemError, Visibility};
use super::{is_zero, CommonResponse};
use crate::pagination::{has_next_cursor, Paginated};
use crate::validation::{self, Validate, MAX_PAGE_LIMIT};

/// Request for `/v4/product/info/stocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StocksInfoParams {
    /// Cursor for the next data sample. Leave empty in the first request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cursor: String,

    /// Number of entries in a reply, 1 to 1000. Defaults to 1000 remotely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    pub filter: StocksInfoFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StocksInfoFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<i64>,

    /// Omitted when unset; the API then applies `ALL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// Economy products filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_quant: Option<WithQuant>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WithQuant {
    /// Active economy products.
    pub created: bool,

    /// Economy products in all statuses.
    pub exists: bool,
}

impl Validate for StocksInfoParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::page_limit(self.limit)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StocksInfoResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    /// Cursor for the next data sample. Empty on the last page.
    pub cursor: String,

    /// Number of unique products with stock information.
    pub total: i32,

    pub items: Vec<StockInfoItem>,
}

impl Paginated for StocksInfoResponse {
    type Params = StocksInfoParams;

    const DEFAULT_LIMIT: i64 = MAX_PAGE_LIMIT;

    fn first_params(params: StocksInfoParams) -> StocksInfoParams {
        StocksInfoParams {
            limit: Some(params.limit.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &StocksInfoParams) -> Option<StocksInfoParams> {
        let limit = current.limit.unwrap_or(Self::DEFAULT_LIMIT);
        has_next_cursor(&current.cursor, &self.cursor, self.items.len(), limit).then(|| {
            StocksInfoParams {
                cursor: self.cursor.clone(),
                ..current.clone()
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockInfoItem {
    pub offer_id: String,

    pub product_id: i64,

    pub stocks: Vec<StockInfoItemStock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockInfoItemStock {
    /// Quantity at the warehouse.
    pub present: i32,

    pub reserved: i32,

    /// Warehouse type (`fbo`, `fbs`, ...).
    #[serde(rename = "type")]
    pub warehouse_type: String,

    pub shipment_type: String,

    pub sku: i64,
}

/// Request for `/v1/product/import/stocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateStocksParams {
    pub stocks: Vec<StockUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockUpdate {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_id: String,

    #[serde(skip_serializing_if = "is_zero")]
    pub product_id: i64,

    /// Quantity of products in stock.
    #[serde(rename = "stocks")]
    pub stock: i64,
}

impl Validate for UpdateStocksParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("stocks", self.stocks.len())?;
        validation::max_items("stocks", self.stocks.len(), 100)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStocksResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<StockUpdateResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockUpdateResult {
    pub errors: Vec<ItemError>,

    pub offer_id: String,

    pub product_id: i64,

    /// True if the stock was updated.
    pub updated: bool,
}

impl ItemOutcome for StockUpdateResult {
    fn is_success(&self) -> bool {
        self.updated
    }
}

impl BulkResponse for UpdateStocksResponse {
    type Item = StockUpdateResult;

    fn items(&self) -> &[StockUpdateResult] {
        &self.result
    }
}

/// Request for `/v2/products/stocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateWarehouseStocksParams {
    pub stocks: Vec<WarehouseStockUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WarehouseStockUpdate {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_id: String,

    #[serde(skip_serializing_if = "is_zero")]
    pub product_id: i64,

    /// Set only when a regular and an economy product share the same
    /// `offer_id`: `1` for the regular product, the MOQ size for the economy
    /// one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quant_size: Option<i64>,

    pub stock: i64,

    pub warehouse_id: i64,
}

impl Validate for UpdateWarehouseStocksParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("stocks", self.stocks.len())?;
        validation::max_items("stocks", self.stocks.len(), 100)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateWarehouseStocksResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<WarehouseStockUpdateResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseStockUpdateResult {
    pub errors: Vec<ItemError>,

    pub offer_id: String,

    pub product_id: i64,

    pub quant_size: i64,

    pub updated: bool,

    pub warehouse_id: i64,
}

impl ItemOutcome for WarehouseStockUpdateResult {
    fn is_success(&self) -> bool {
        self.updated
    }
}

impl BulkResponse for UpdateWarehouseStocksResponse {
    type Item = WarehouseStockUpdateResult;

    fn items(&self) -> &[WarehouseStockUpdateResult] {
        &self.result
    }
}

/// Request for `/v1/product/info/stocks-by-warehouse/fbs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FbsWarehouseStocksParams {
    pub sku: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FbsWarehouseStocksResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<FbsWarehouseStock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbsWarehouseStock {
    /// SKU of the product sold from the seller's warehouse.
    pub sku: i64,

    pub present: i64,

    pub product_id: i64,

    pub reserved: i64,

    pub warehouse_id: i64,

    pub warehouse_name: String,
}

impl_envelope!(
    StocksInfoResponse,
    UpdateStocksResponse,
    UpdateWarehouseStocksResponse,
    FbsWarehouseStocksResponse,
);
