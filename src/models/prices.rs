//! Prices, markdown discounts and price relevance timers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::api_response::impl_envelope;
use super::bulk::{BulkResponse, ItemOutcome};
use super::common::{AutoAction, ItemError, PriceStrategy, Vat, Visibility};
use super::{is_zero, CommonResponse};
use crate::pagination::{has_next_cursor, Paginated};
use crate::validation::{self, Validate, MAX_PAGE_LIMIT};

/// Request for `/v1/product/import/prices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePricesParams {
    pub prices: Vec<PriceUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceUpdate {
    /// Auto-application of promotions.
    pub auto_action_enabled: AutoAction,

    /// Must match the currency of the seller account. `RUB` remotely when
    /// omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Whether the minimum price is taken into account for promotions.
    /// Left unchanged when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price_for_auto_actions_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,

    /// Cost price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_price: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_id: String,

    /// Price before discounts. Pass `0` to reset it.
    pub old_price: String,

    /// Price including discounts.
    pub price: String,

    pub price_strategy_enabled: PriceStrategy,

    #[serde(skip_serializing_if = "is_zero")]
    pub product_id: i64,

    /// Set only when a regular and an economy product share the same
    /// `offer_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quant_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<Vat>,
}

impl Validate for UpdatePricesParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("prices", self.prices.len())?;
        validation::max_items("prices", self.prices.len(), 1000)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePricesResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<PriceUpdateResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceUpdateResult {
    pub errors: Vec<ItemError>,

    pub offer_id: String,

    pub product_id: i64,

    pub updated: bool,
}

impl ItemOutcome for PriceUpdateResult {
    fn is_success(&self) -> bool {
        self.updated
    }
}

impl BulkResponse for UpdatePricesResponse {
    type Item = PriceUpdateResult;

    fn items(&self) -> &[PriceUpdateResult] {
        &self.result
    }
}

/// Request for `/v5/product/info/prices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PricesInfoParams {
    pub filter: PricesInfoFilter,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub cursor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PricesInfoFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    /// Up to 1000 values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<i64>,

    /// Always sent; defaults to `ALL`.
    pub visibility: Visibility,
}

impl Validate for PricesInfoParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::page_limit(self.limit)?;
        validation::max_items("filter.offer_id", self.filter.offer_id.len(), 1000)?;
        validation::max_items("filter.product_id", self.filter.product_id.len(), 1000)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PricesInfoResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub items: Vec<PriceInfoItem>,

    pub cursor: String,

    pub total: i32,
}

impl Paginated for PricesInfoResponse {
    type Params = PricesInfoParams;

    const DEFAULT_LIMIT: i64 = MAX_PAGE_LIMIT;

    fn first_params(params: PricesInfoParams) -> PricesInfoParams {
        PricesInfoParams {
            limit: Some(params.limit.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &PricesInfoParams) -> Option<PricesInfoParams> {
        let limit = current.limit.unwrap_or(Self::DEFAULT_LIMIT);
        has_next_cursor(&current.cursor, &self.cursor, self.items.len(), limit).then(|| {
            PricesInfoParams {
                cursor: self.cursor.clone(),
                ..current.clone()
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceInfoItem {
    /// Maximum acquiring fee.
    pub acquiring: f64,

    pub commissions: PriceCommissions,

    pub marketing_actions: Option<MarketingActions>,

    pub offer_id: String,

    pub price: PriceDetails,

    pub price_indexes: PriceIndexes,

    pub product_id: i64,

    pub volume_weight: f64,
}

/// Commission fees for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceCommissions {
    #[serde(rename = "fbo_deliv_to_customer_amount")]
    pub fbo_last_mile: f64,

    #[serde(rename = "fbo_direct_flow_trans_max_amount")]
    pub fbo_pipeline_to: f64,

    #[serde(rename = "fbo_direct_flow_trans_min_amount")]
    pub fbo_pipeline_from: f64,

    #[serde(rename = "fbo_fulfillment_amount")]
    pub fbo_order_packaging_fee: f64,

    #[serde(rename = "fbo_return_flow_amount")]
    pub fbo_return_cancellation_fee: f64,

    #[serde(rename = "fbo_return_flow_trans_min_amount")]
    pub fbo_reverse_logistics_fee_from: f64,

    #[serde(rename = "fbo_return_flow_trans_max_amount")]
    pub fbo_reverse_logistics_fee_to: f64,

    #[serde(rename = "fbs_deliv_to_customer_amount")]
    pub fbs_last_mile: f64,

    #[serde(rename = "fbs_direct_flow_trans_max_amount")]
    pub fbs_pipeline_to: f64,

    #[serde(rename = "fbs_direct_flow_trans_min_amount")]
    pub fbs_pipeline_from: f64,

    #[serde(rename = "fbs_first_mile_min_amount")]
    pub fbs_shipment_processing_min_fee: f64,

    #[serde(rename = "fbs_first_mile_max_amount")]
    pub fbs_shipment_processing_max_fee: f64,

    #[serde(rename = "fbs_return_flow_amount")]
    pub fbs_return_cancellation_processing_fee: f64,

    #[serde(rename = "fbs_return_flow_trans_max_amount")]
    pub fbs_return_cancellation_to_fee: f64,

    #[serde(rename = "fbs_return_flow_trans_min_amount")]
    pub fbs_return_cancellation_from_fee: f64,

    pub sales_percent_fbo: f64,

    pub sales_percent_fbs: f64,

    /// The larger of the FBO and FBS sales commission percentages.
    pub sales_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingActions {
    pub actions: Vec<MarketingAction>,

    pub current_period_from: Option<DateTime<Utc>>,

    pub current_period_to: Option<DateTime<Utc>>,

    /// True if a promotion can be applied at the marketplace's expense.
    pub ozon_actions_exist: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingAction {
    pub date_from: Option<DateTime<Utc>>,

    pub date_to: Option<DateTime<Utc>>,

    pub title: String,

    /// Discount of the seller's promotion.
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceDetails {
    pub auto_action_enabled: bool,

    pub currency_code: String,

    pub marketing_price: f64,

    pub marketing_seller_price: f64,

    pub min_ozon_price: f64,

    pub min_price: f64,

    pub old_price: f64,

    pub price: f64,

    pub retail_price: f64,

    pub vat: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceIndexes {
    pub color_index: String,

    pub external_index_data: PriceIndexValue,

    pub ozon_index_data: PriceIndexValue,

    #[serde(rename = "self_marketplaces_index_data")]
    pub self_marketplace_index_data: PriceIndexValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceIndexValue {
    pub min_price: f64,

    pub min_price_currency: String,

    pub price_index_value: f64,
}

/// Request for `/v1/product/info/discounted`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkdownInfoParams {
    pub discounted_skus: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarkdownInfoResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub items: Vec<MarkdownItem>,
}

/// Condition of a markdown product and the SKU of its main product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownItem {
    pub comment_reason_damaged: String,

    /// `new` or `used`.
    pub condition: String,

    /// Condition on a 1 to 7 scale.
    pub condition_estimation: String,

    pub defects: String,

    pub discounted_sku: i64,

    pub mechanical_damage: String,

    pub package_damage: String,

    pub packaging_violation: String,

    pub reason_damaged: String,

    pub repair: String,

    pub shortage: String,

    /// SKU of the main product.
    pub sku: i64,

    pub warranty_type: String,
}

/// Request for `/v1/product/update/discount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetMarkdownDiscountParams {
    /// Discount percentage, 3 to 99.
    pub discount: i32,

    pub product_id: i64,
}

impl Validate for SetMarkdownDiscountParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::in_range("discount", i64::from(self.discount), 3, 99)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SetMarkdownDiscountResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: bool,
}

/// Request for the price relevance timer endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceTimerParams {
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceTimerStatusResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub statuses: Vec<PriceTimerStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTimerStatus {
    /// Timer end time.
    pub expired_at: Option<DateTime<Utc>>,

    pub min_price_for_auto_actions_enabled: bool,

    pub product_id: i64,
}

impl_envelope!(
    UpdatePricesResponse,
    PricesInfoResponse,
    MarkdownInfoResponse,
    SetMarkdownDiscountResponse,
    PriceTimerStatusResponse,
);
