//! Economy products sold in minimum order quantities (MOQ, "quants").

use serde::{Deserialize, Serialize};

use super::api_response::impl_envelope;
use super::common::Visibility;
use super::CommonResponse;
use crate::pagination::{has_next_cursor, Paginated};
use crate::validation::{self, Validate, MAX_PAGE_LIMIT};

/// Request for `/v1/product/quant/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EconomyInfoParams {
    pub quant_code: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EconomyInfoResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub items: Vec<EconomyInfoItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyInfoItem {
    pub offer_id: String,

    pub product_id: i64,

    pub quant_info: QuantInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantInfo {
    pub quants: Vec<Quant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quant {
    pub barcodes_extended: Vec<QuantBarcode>,

    pub dimensions: Dimensions,

    pub marketing_price: QuantMarketingPrice,

    pub min_price: String,

    pub old_price: String,

    pub price: String,

    pub quant_code: String,

    /// MOQ size. The service spells the field `quant_sice`.
    #[serde(rename = "quant_sice", alias = "quant_size")]
    pub quant_size: i64,

    pub shipment_type: String,

    pub sku: i64,

    pub statuses: QuantStatuses,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantBarcode {
    pub barcode: String,

    pub error: String,

    pub status: String,
}

/// Package dimensions in millimeters, weight in grams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub depth: i64,

    pub height: i64,

    pub weight: i64,

    pub width: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantMarketingPrice {
    pub price: String,

    pub seller_price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantStatuses {
    pub state_description: String,

    pub state_name: String,

    pub state_sys_name: String,

    pub state_tooltip: String,
}

/// Request for `/v1/product/quant/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EconomyListParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cursor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl Validate for EconomyListParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::page_limit(self.limit)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EconomyListResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub cursor: String,

    pub products: Vec<EconomyProduct>,

    /// Leftover stock in all warehouses.
    pub total_items: i32,
}

impl Paginated for EconomyListResponse {
    type Params = EconomyListParams;

    const DEFAULT_LIMIT: i64 = MAX_PAGE_LIMIT;

    fn first_params(params: EconomyListParams) -> EconomyListParams {
        EconomyListParams {
            limit: Some(params.limit.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &EconomyListParams) -> Option<EconomyListParams> {
        let limit = current.limit.unwrap_or(Self::DEFAULT_LIMIT);
        has_next_cursor(&current.cursor, &self.cursor, self.products.len(), limit).then(|| {
            EconomyListParams {
                cursor: self.cursor.clone(),
                ..current.clone()
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyProduct {
    pub offer_id: String,

    pub product_id: i64,

    pub quants: Vec<EconomyProductQuant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyProductQuant {
    pub quant_code: String,

    pub quant_size: i64,
}

impl_envelope!(EconomyInfoResponse, EconomyListResponse);
