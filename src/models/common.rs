//! Enumerations and small types shared by several endpoints.

use serde::{Deserialize, Serialize};

/// Product visibility filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// All products.
    #[default]
    All,
    /// Products visible to customers.
    Visible,
    /// Products hidden from customers.
    Invisible,
    /// Products with no stock.
    EmptyStock,
    /// Products that did not pass moderation.
    NotModerated,
    /// Products that passed moderation.
    Moderated,
    /// Products shown on the site but not available for purchase.
    Disabled,
    /// Products whose creation failed.
    StateFailed,
    /// Products ready for supply.
    ReadyToSupply,
    /// Products awaiting validation.
    ValidationStatePending,
    /// Products that failed validation.
    ValidationStateFail,
    /// Products that passed validation.
    ValidationStateSuccess,
    /// Products ready for sale.
    ToSupply,
    /// Products on sale.
    InSale,
    /// Products removed from sale.
    RemovedFromSale,
    /// Blocked products.
    Banned,
    /// Products with an overpriced price.
    Overpriced,
    /// Products with a critically overpriced price.
    CriticallyOverpriced,
    /// Products without a barcode.
    EmptyBarcode,
    /// Products with a barcode.
    BarcodeExists,
    /// Products in quarantine after a price change.
    Quarantine,
    /// Archived products.
    Archived,
    /// Overpriced products that have stock.
    OverpricedWithStock,
    /// Partially approved products.
    PartialApproved,
    /// Products without images.
    ImageAbsent,
    /// Products blocked by moderation.
    ModerationBlock,
}

/// VAT rate of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vat {
    /// Not subject to VAT.
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "0.05")]
    Five,
    #[serde(rename = "0.07")]
    Seven,
    #[serde(rename = "0.1")]
    Ten,
    #[serde(rename = "0.2")]
    Twenty,
}

/// Auto-application of pricing strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceStrategy {
    Enabled,
    Disabled,
    /// Keeps the current setting.
    #[default]
    Unknown,
}

/// Auto-application of promotions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoAction {
    Enabled,
    Disabled,
    /// Keeps the current setting.
    #[default]
    Unknown,
}

/// Service type of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    #[default]
    IsCodeService,
    IsNoCodeService,
}

/// Language of a generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    /// Language configured in the seller account.
    #[default]
    Default,
    Ru,
    En,
}

/// Availability of a product by SKU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkuAvailability {
    Hidden,
    Available,
    Unavailable,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Error attached to a single item of a bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemError {
    /// Error code.
    pub code: String,

    /// Error reason.
    pub message: String,
}

/// Characteristic value taken from a dictionary or given as free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValue {
    /// Identifier of the value in the characteristic dictionary.
    pub dictionary_value_id: i64,

    /// Characteristic value.
    pub value: String,
}

/// Product characteristic with its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    /// Identifier of the characteristic that supports nested properties.
    pub complex_id: i64,

    /// Characteristic identifier.
    pub id: i64,

    pub values: Vec<AttributeValue>,
}

/// Product model details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    /// Model identifier.
    pub model_id: i64,

    /// Number of products combined in the model.
    pub count: i64,
}
