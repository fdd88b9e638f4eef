//! Product catalog: creation, listing, details, characteristics and archive.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::api_response::impl_envelope;
use super::bulk::{BulkResponse, ItemOutcome};
use super::common::{Attribute, ModelInfo, ServiceType, SkuAvailability, Vat, Visibility};
use super::{is_zero, CommonResponse};
use crate::pagination::{has_next_cursor, Paginated};
use crate::validation::{self, Validate, MAX_PAGE_LIMIT};

const MAX_OFFER_ID_CHARS: usize = 50;
const MAX_NAME_CHARS: usize = 500;

fn max_chars(field: &str, value: &str, max: usize) -> crate::OzonResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(crate::OzonError::InvalidParameters(format!(
            "{field}: at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Request for `/v3/product/import`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportProductsParams {
    pub items: Vec<ImportProductItem>,
}

/// A product to create or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportProductItem {
    /// Characteristics; the set depends on the category.
    pub attributes: Vec<Attribute>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub barcode: String,

    pub description_category_id: i64,

    /// Set to move the product to another category.
    #[serde(skip_serializing_if = "is_zero")]
    pub new_description_category_id: i64,

    /// Marketing color image link.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_image: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub complex_attributes: Vec<ComplexAttribute>,

    pub depth: i32,

    /// `mm`, `cm` or `in`.
    pub dimension_unit: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geo_names: Vec<String>,

    pub height: i32,

    /// Up to 15 image links, 14 if `primary_image` is set.
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_image: String,

    /// Up to 70 links to 360 images.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images_360: Vec<String>,

    pub name: String,

    pub offer_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency_code: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub old_price: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pdf_list: Vec<ProductPdf>,

    pub price: String,

    /// Sent as `IS_CODE_SERVICE` unless changed.
    pub service_type: ServiceType,

    #[serde(skip_serializing_if = "is_zero")]
    pub type_id: i64,

    pub vat: Vat,

    pub weight: i32,

    /// `g`, `kg` or `lb`.
    pub weight_unit: String,

    pub width: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexAttribute {
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPdf {
    /// Storage order index.
    pub index: i64,

    pub name: String,

    pub url: String,
}

impl Validate for ImportProductsParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("items", self.items.len())?;
        validation::max_items("items", self.items.len(), 100)?;

        for item in &self.items {
            let max_images = if item.primary_image.is_empty() { 15 } else { 14 };
            validation::max_items("images", item.images.len(), max_images)?;
            validation::max_items("images_360", item.images_360.len(), 70)?;
            max_chars("name", &item.name, MAX_NAME_CHARS)?;
            max_chars("offer_id", &item.offer_id, MAX_OFFER_ID_CHARS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImportProductsResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ImportTask,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportTask {
    /// Pass it to `/v1/product/import/info` to follow the import.
    pub task_id: i64,
}

/// Request for `/v3/product/list`.
///
/// Only one of `filter.offer_id` and `filter.product_id` may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductListParams {
    pub filter: ProductListFilter,

    /// Leave empty in the first request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductListFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl Validate for ProductListParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::page_limit(self.limit)?;
        validation::max_items("filter.offer_id", self.filter.offer_id.len(), 1000)?;
        validation::max_items("filter.product_id", self.filter.product_id.len(), 1000)?;
        validation::single_identifier_group(&[
            ("offer_id", self.filter.offer_id.len()),
            ("product_id", self.filter.product_id.len()),
        ])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductListResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ProductListResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductListResult {
    pub items: Vec<ProductListItem>,

    pub total: i32,

    /// Token for the next page. Empty on the last page.
    pub last_id: String,
}

impl Paginated for ProductListResponse {
    type Params = ProductListParams;

    const DEFAULT_LIMIT: i64 = MAX_PAGE_LIMIT;

    fn first_params(params: ProductListParams) -> ProductListParams {
        ProductListParams {
            limit: Some(params.limit.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &ProductListParams) -> Option<ProductListParams> {
        let result = &self.result;
        let limit = current.limit.unwrap_or(Self::DEFAULT_LIMIT);
        has_next_cursor(&current.last_id, &result.last_id, result.items.len(), limit).then(|| {
            ProductListParams {
                last_id: result.last_id.clone(),
                ..current.clone()
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductListItem {
    pub product_id: i64,

    pub offer_id: String,

    pub has_fbo_stocks: bool,

    pub has_fbs_stocks: bool,

    pub archived: bool,

    pub is_discounted: bool,

    pub quants: Vec<ProductQuant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuant {
    pub warehouse_id: i64,

    pub quantity: i64,

    pub reserved: i64,
}

/// Request for `/v1/product/rating-by-sku`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RatingBySkuParams {
    pub skus: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RatingBySkuResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub products: Vec<ProductRating>,
}

/// Content rating of a product, 0 to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRating {
    pub sku: i64,

    pub rating: f64,

    pub groups: Vec<RatingGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingGroup {
    pub conditions: Vec<RatingCondition>,

    /// Attributes to fill in to reach the maximum score of the group.
    pub improve_at_least: i32,

    pub improve_attributes: Vec<RatingAttribute>,

    pub key: String,

    pub name: String,

    pub rating: f64,

    /// Influence of the group on the rating, in percent.
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingCondition {
    pub cost: f64,

    pub description: String,

    pub fulfilled: bool,

    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingAttribute {
    pub id: i64,

    pub name: String,
}

/// Request for `/v1/product/import/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportStatusParams {
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImportStatusResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ImportStatusResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportStatusResult {
    pub items: Vec<ImportStatusItem>,

    pub total: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportStatusItem {
    pub offer_id: String,

    pub product_id: i64,

    /// `pending`, `imported` or `failed`.
    pub status: String,

    pub errors: Vec<ProductItemError>,
}

/// Validation error of a product card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductItemError {
    pub code: String,

    pub state: String,

    /// Error level, e.g. `error` or `warning`.
    pub level: String,

    pub description: String,

    pub field: String,

    pub attribute_id: i64,

    pub attribute_name: String,

    pub optional_description_elements: HashMap<String, String>,

    /// Technical description, present in import status responses.
    pub message: String,
}

/// Request for `/v1/product/import-by-sku`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportBySkuParams {
    pub items: Vec<ImportBySkuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportBySkuItem {
    pub name: String,

    pub offer_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub old_price: String,

    pub price: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency_code: String,

    /// SKU of the product card to copy.
    pub sku: i64,

    pub vat: Vat,
}

impl Validate for ImportBySkuParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("items", self.items.len())?;
        for item in &self.items {
            max_chars("name", &item.name, MAX_NAME_CHARS)?;
            max_chars("offer_id", &item.offer_id, MAX_OFFER_ID_CHARS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImportBySkuResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ImportBySkuResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportBySkuResult {
    pub task_id: i64,

    /// SKUs that could not be copied.
    pub unmatched_sku_list: Vec<i64>,
}

/// Request for `/v1/product/pictures/import`.
///
/// Every call replaces the whole image set of the product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateImagesParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color_image: String,

    /// The first image becomes the main one. Up to 15 links.
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images360: Vec<String>,

    pub product_id: i64,
}

impl Validate for UpdateImagesParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::max_items("images", self.images.len(), 15)?;
        validation::max_items("images360", self.images360.len(), 70)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateImagesResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: UpdateImagesResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateImagesResult {
    pub pictures: Vec<Picture>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    pub is_360: bool,

    pub is_color: bool,

    pub is_primary: bool,

    pub product_id: i64,

    /// `imported` right after upload; `uploaded` or `pending` afterwards.
    pub state: String,

    pub url: String,
}

/// Request for `/v2/product/pictures/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImagesStatusParams {
    pub product_id: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImagesStatusResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub items: Vec<ProductImages>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductImages {
    pub product_id: i64,

    pub primary_photo: Vec<String>,

    pub photo: Vec<String>,

    pub color_photo: Vec<String>,

    pub photo_360: Vec<String>,
}

/// Request for `/v3/product/info/list`.
///
/// Identifiers of a single kind only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListByIdsParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<i64>,
}

impl Validate for ListByIdsParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::single_identifier_group(&[
            ("offer_id", self.offer_id.len()),
            ("product_id", self.product_id.len()),
            ("sku", self.sku.len()),
        ])?;
        let total = self.offer_id.len() + self.product_id.len() + self.sku.len();
        validation::max_items("identifiers", total, 1000)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListByIdsResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub items: Vec<ProductDetails>,
}

/// Full product card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetails {
    pub id: i64,

    pub offer_id: String,

    pub name: String,

    pub barcodes: Vec<String>,

    pub description_category_id: i64,

    pub type_id: i64,

    pub sku: i64,

    pub color_image: Vec<String>,

    pub images: Vec<String>,

    pub primary_image: Vec<String>,

    pub images360: Vec<String>,

    pub commissions: Vec<ProductCommission>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,

    pub currency_code: String,

    pub marketing_price: String,

    pub min_price: String,

    pub old_price: String,

    pub price: String,

    pub vat: String,

    pub price_indexes: ProductPriceIndexes,

    pub discounted_fbo_stocks: i32,

    pub has_discounted_fbo_item: bool,

    pub is_discounted: bool,

    pub is_kgt: bool,

    pub is_prepayment_allowed: bool,

    pub is_archived: bool,

    #[serde(rename = "is_autoarchived")]
    pub is_auto_archived: bool,

    pub is_super: bool,

    pub errors: Vec<ProductCardError>,

    pub sources: Vec<ProductSource>,

    pub stocks: ProductStocks,

    pub statuses: ProductStatuses,

    pub visibility_details: VisibilityDetails,

    pub model_info: ModelInfo,

    pub volume_weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCommission {
    pub delivery_amount: f64,

    pub percent: f64,

    pub return_amount: f64,

    /// `fbo`, `fbs`, `rfbs`...
    pub sale_schema: String,

    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPriceIndexes {
    pub color_index: String,

    pub external_index_data: ProductPriceIndex,

    pub ozon_index_data: ProductPriceIndex,

    #[serde(rename = "self_marketplaces_index_data")]
    pub self_marketplace_index_data: ProductPriceIndex,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPriceIndex {
    pub minimal_price: String,

    pub minimal_price_currency: String,

    pub price_index_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCardError {
    pub attribute_id: i64,

    pub code: String,

    pub field: String,

    pub level: String,

    pub state: String,

    pub texts: ProductCardErrorTexts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCardErrorTexts {
    pub attribute_name: String,

    pub description: String,

    pub hint_code: String,

    pub message: String,

    pub short_description: String,

    pub params: Vec<NameValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameValue {
    pub name: String,

    pub value: String,
}

/// Where a product is sold from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSource {
    pub created_at: Option<DateTime<Utc>>,

    pub sku: i64,

    pub source: String,

    pub shipment_type: String,

    pub quant_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductStocks {
    pub has_stock: bool,

    pub stocks: Vec<ProductStock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductStock {
    pub sku: i64,

    pub present: i32,

    pub reserved: i32,

    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductStatuses {
    pub is_created: bool,

    pub moderate_status: String,

    pub status: String,

    pub status_description: String,

    pub status_failed: String,

    pub status_name: String,

    pub status_tooltip: String,

    pub status_updated_at: Option<DateTime<Utc>>,

    pub validation_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityDetails {
    pub has_price: bool,

    pub has_stock: bool,

    pub reasons: HashMap<String, Value>,
}

/// Sort direction for attribute listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Request for `/v4/product/info/attributes` filtered by offer or product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributesParams {
    pub filter: AttributesFilter,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(rename = "sort_dir", skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributesFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl Validate for AttributesParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::page_limit(self.limit)?;
        validation::single_identifier_group(&[
            ("offer_id", self.filter.offer_id.len()),
            ("product_id", self.filter.product_id.len()),
        ])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttributesResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<ProductAttributes>,

    pub last_id: String,

    pub total: i32,
}

impl Paginated for AttributesResponse {
    type Params = AttributesParams;

    const DEFAULT_LIMIT: i64 = MAX_PAGE_LIMIT;

    fn first_params(params: AttributesParams) -> AttributesParams {
        AttributesParams {
            limit: Some(params.limit.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &AttributesParams) -> Option<AttributesParams> {
        let limit = current.limit.unwrap_or(Self::DEFAULT_LIMIT);
        has_next_cursor(&current.last_id, &self.last_id, self.result.len(), limit).then(|| {
            AttributesParams {
                last_id: self.last_id.clone(),
                ..current.clone()
            }
        })
    }
}

/// Characteristics of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttributes {
    pub id: i64,

    pub attributes: Vec<Attribute>,

    pub barcode: String,

    pub barcodes: Vec<String>,

    pub description_category_id: i64,

    pub color_image: String,

    pub complex_attributes: Vec<ComplexAttribute>,

    pub depth: i32,

    pub dimension_unit: String,

    pub height: i32,

    pub images: Vec<String>,

    pub model_info: ModelInfo,

    pub images360: Vec<Image360>,

    pub name: String,

    pub offer_id: String,

    pub pdf_list: Vec<AttributesPdf>,

    pub primary_image: String,

    pub sku: i64,

    pub type_id: i64,

    pub weight: i32,

    pub weight_unit: String,

    pub width: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image360 {
    pub file_name: String,

    pub index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributesPdf {
    pub file_name: String,

    pub index: i64,

    pub name: String,
}

/// Request for `/v4/product/info/attributes` filtered by SKU, offer or product
/// id given as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributesBySkuParams {
    pub filter: AttributesBySkuFilter,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    #[serde(rename = "sort_dir", skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributesBySkuFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_id: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl Validate for AttributesBySkuParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::page_limit(self.limit)?;
        validation::single_identifier_group(&[
            ("product_id", self.filter.product_id.len()),
            ("offer_id", self.filter.offer_id.len()),
            ("sku", self.filter.sku.len()),
        ])
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AttributesBySkuResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<SkuAttributes>,

    pub total: i32,

    pub last_id: String,
}

impl Paginated for AttributesBySkuResponse {
    type Params = AttributesBySkuParams;

    const DEFAULT_LIMIT: i64 = MAX_PAGE_LIMIT;

    fn first_params(params: AttributesBySkuParams) -> AttributesBySkuParams {
        AttributesBySkuParams {
            limit: Some(params.limit.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &AttributesBySkuParams) -> Option<AttributesBySkuParams> {
        let limit = current.limit.unwrap_or(Self::DEFAULT_LIMIT);
        has_next_cursor(&current.last_id, &self.last_id, self.result.len(), limit).then(|| {
            AttributesBySkuParams {
                last_id: self.last_id.clone(),
                ..current.clone()
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuAttributes {
    pub id: i64,

    pub barcode: String,

    pub name: String,

    pub offer_id: String,

    pub height: i32,

    pub depth: i32,

    pub width: i32,

    pub dimension_unit: String,

    pub weight: i32,

    pub weight_unit: String,

    pub description_category_id: i64,

    pub type_id: i64,

    pub primary_image: String,

    pub model_info: Option<ModelInfo>,

    pub images: Vec<String>,

    pub pdf_list: Vec<String>,

    pub attributes: Vec<Attribute>,

    pub complex_attributes: Vec<Attribute>,

    pub color_image: String,
}

/// Request for `/v1/product/info/description`. Set one of the identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescriptionParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_id: String,

    #[serde(skip_serializing_if = "is_zero")]
    pub product_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DescriptionResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ProductDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDescription {
    pub description: String,

    pub id: i64,

    pub name: String,

    pub offer_id: String,
}

/// Response of `/v4/product/info/limit`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RangeLimitResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub daily_create: UploadQuota,

    pub daily_update: UploadQuota,

    /// Product range limit. `limit` is `-1` when there is none.
    pub total: RangeLimitTotal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeLimitTotal {
    pub limit: i64,

    pub usage: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadQuota {
    pub limit: i64,

    /// Counter reset time for the current day.
    pub reset_at: Option<DateTime<Utc>>,

    pub usage: i64,
}

/// Request for `/v1/product/update/offer-id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangeOfferIdsParams {
    pub update_offer_id: Vec<OfferIdChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OfferIdChange {
    pub new_offer_id: String,

    pub offer_id: String,
}

impl Validate for ChangeOfferIdsParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("update_offer_id", self.update_offer_id.len())?;
        validation::max_items("update_offer_id", self.update_offer_id.len(), 250)?;
        for change in &self.update_offer_id {
            max_chars("new_offer_id", &change.new_offer_id, MAX_OFFER_ID_CHARS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChangeOfferIdsResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    /// Identifiers that were not changed.
    pub errors: Vec<OfferIdChangeError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferIdChangeError {
    pub message: String,

    pub offer_id: String,
}

/// Request for `/v1/product/archive` and `/v1/product/unarchive`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArchiveParams {
    pub product_id: Vec<i64>,
}

/// Response carrying a single success flag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoolResultResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: bool,
}

/// Request for `/v2/products/delete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteWithoutSkuParams {
    pub products: Vec<DeleteWithoutSkuProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteWithoutSkuProduct {
    pub offer_id: String,
}

impl Validate for DeleteWithoutSkuParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::not_empty("products", self.products.len())?;
        validation::max_items("products", self.products.len(), 500)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteWithoutSkuResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub status: Vec<DeleteStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteStatus {
    pub error: String,

    pub is_deleted: bool,

    pub offer_id: String,
}

impl ItemOutcome for DeleteStatus {
    fn is_success(&self) -> bool {
        self.is_deleted
    }
}

impl BulkResponse for DeleteWithoutSkuResponse {
    type Item = DeleteStatus;

    fn items(&self) -> &[DeleteStatus] {
        &self.status
    }
}

/// Request for `/v1/product/upload_digital_codes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadDigitalCodesParams {
    pub digital_codes: Vec<String>,

    pub product_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UploadDigitalCodesResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ImportTask,
}

/// Request for `/v1/product/upload_digital_codes/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DigitalCodesStatusParams {
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DigitalCodesStatusResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: DigitalCodesStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalCodesStatus {
    /// `pending`, `imported` or `failed`.
    pub status: String,
}

/// Request for `/v1/product/info/subscription`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionCountParams {
    pub skus: Vec<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionCountResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Vec<SubscriptionCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionCount {
    /// Users waiting for the product to be back in stock.
    pub count: i64,

    pub sku: i64,
}

/// Request for `/v1/product/attributes/update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAttributesParams {
    pub items: Vec<AttributesUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributesUpdate {
    pub attributes: Vec<Attribute>,

    pub offer_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateAttributesResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    /// Pass it to `/v1/product/import/info` to follow the update.
    pub task_id: i64,
}

/// Request for `/v1/product/related-sku/get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RelatedSkusParams {
    #[serde(rename = "sku")]
    pub skus: Vec<String>,
}

impl Validate for RelatedSkusParams {
    fn validate(&self) -> crate::OzonResult<()> {
        validation::max_items("sku", self.skus.len(), 200)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedSkusResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub items: Vec<RelatedSku>,

    pub errors: Vec<RelatedSkuError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedSku {
    pub availability: SkuAvailability,

    pub deleted_at: Option<DateTime<Utc>>,

    pub delivery_schema: String,

    pub product_id: i64,

    pub sku: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedSkuError {
    pub code: String,

    pub sku: i64,

    pub message: String,
}

impl_envelope!(
    ImportProductsResponse,
    ProductListResponse,
    RatingBySkuResponse,
    ImportStatusResponse,
    ImportBySkuResponse,
    UpdateImagesResponse,
    ImagesStatusResponse,
    ListByIdsResponse,
    AttributesResponse,
    AttributesBySkuResponse,
    DescriptionResponse,
    RangeLimitResponse,
    ChangeOfferIdsResponse,
    BoolResultResponse,
    DeleteWithoutSkuResponse,
    UploadDigitalCodesResponse,
    DigitalCodesStatusResponse,
    SubscriptionCountResponse,
    UpdateAttributesResponse,
    RelatedSkusResponse,
);
