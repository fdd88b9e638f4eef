//! Report generation and the cash flow statement.
//!
//! Report creation endpoints return a report `code` only. The file itself is
//! produced asynchronously; poll `/v1/report/info` with the code until the
//! status is [`ReportStatus::Success`] and the `file` link is set.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::api_response::impl_envelope;
use super::common::{Language, Visibility};
use super::CommonResponse;
use crate::pagination::{has_next_page, Paginated};
use crate::validation::{self, Validate};

/// Page size the report list applies when none is given.
pub const DEFAULT_REPORT_PAGE_SIZE: i64 = 100;

/// Kind of a generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    /// All reports. Only meaningful as a list filter.
    #[default]
    All,
    SellerProducts,
    SellerTransactions,
    SellerProductPrices,
    SellerStock,
    SellerProductMovement,
    SellerReturns,
    SellerPostings,
    SellerFinance,
    /// A report type this client does not know about.
    #[serde(other)]
    Other,
}

/// Generation status of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Waiting,
    Processing,
    Success,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A generated report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub code: String,

    pub created_at: Option<DateTime<Utc>>,

    /// Error code when generation failed.
    pub error: String,

    /// Link to the CSV file. Returns reports keep it for 5 minutes only.
    pub file: String,

    /// Filters the report was created with.
    pub params: HashMap<String, String>,

    pub report_type: ReportType,

    pub status: ReportStatus,
}

/// Request for `/v1/report/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportListParams {
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    /// 1 to 1000, 100 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,

    /// Sent as `ALL` unless changed.
    pub report_type: ReportType,
}

impl Validate for ReportListParams {
    fn validate(&self) -> crate::OzonResult<()> {
        if let Some(page) = self.page {
            validation::in_range("page", page, 1, i64::MAX)?;
        }
        if let Some(page_size) = self.page_size {
            validation::in_range("page_size", page_size, 1, validation::MAX_PAGE_LIMIT)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportListResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ReportListResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportListResult {
    pub reports: Vec<Report>,

    /// Total number of reports.
    pub total: i32,
}

impl Paginated for ReportListResponse {
    type Params = ReportListParams;

    const DEFAULT_LIMIT: i64 = DEFAULT_REPORT_PAGE_SIZE;

    fn first_params(params: ReportListParams) -> ReportListParams {
        ReportListParams {
            page_size: Some(params.page_size.unwrap_or(Self::DEFAULT_LIMIT)),
            ..params
        }
    }

    fn next_params(&self, current: &ReportListParams) -> Option<ReportListParams> {
        let page_size = current.page_size.unwrap_or(Self::DEFAULT_LIMIT);
        if !has_next_page(self.result.reports.len(), page_size) {
            return None;
        }
        let page = current.page.unwrap_or(1).checked_add(1)?;
        Some(ReportListParams {
            page: Some(page),
            ..current.clone()
        })
    }
}

/// Request for `/v1/report/info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportInfoParams {
    pub code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportInfoResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: Report,
}

/// Request for `/v1/finance/cash-flow-statement/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowParams {
    pub date: CashFlowPeriod,

    /// Page number, starting at 1.
    pub page: i64,

    /// Adds [`CashFlowDetails`] to the response.
    pub with_details: bool,

    pub page_size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowPeriod {
    pub from: DateTime<Utc>,

    pub to: DateTime<Utc>,
}

impl CashFlowParams {
    /// First page of the statement for `from..to`.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        CashFlowParams {
            date: CashFlowPeriod { from, to },
            page: 1,
            with_details: false,
            page_size: DEFAULT_REPORT_PAGE_SIZE,
        }
    }
}

impl Validate for CashFlowParams {
    fn validate(&self) -> crate::OzonResult<()> {
        if self.date.from > self.date.to {
            return Err(crate::OzonError::InvalidParameters(
                "date: `from` must not be after `to`".into(),
            ));
        }
        validation::in_range("page", self.page, 1, i64::MAX)?;
        validation::in_range("page_size", self.page_size, 1, validation::MAX_PAGE_LIMIT)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CashFlowResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: CashFlowResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowResult {
    pub cash_flows: Vec<CashFlow>,

    /// Present when `with_details` was requested.
    pub details: Option<CashFlowDetails>,

    pub page_count: i64,
}

impl Paginated for CashFlowResponse {
    type Params = CashFlowParams;

    const DEFAULT_LIMIT: i64 = DEFAULT_REPORT_PAGE_SIZE;

    fn next_params(&self, current: &CashFlowParams) -> Option<CashFlowParams> {
        if current.page >= self.result.page_count {
            return None;
        }
        let page = current.page.checked_add(1)?;
        Some(CashFlowParams {
            page,
            ..current.clone()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlow {
    pub period: CashFlowPeriodInfo,

    pub orders_amount: f64,

    pub returns_amount: f64,

    pub commission_amount: f64,

    pub services_amount: f64,

    pub item_delivery_and_return_amount: f64,

    pub currency_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowPeriodInfo {
    pub id: i64,

    pub begin: Option<DateTime<Utc>>,

    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowDetails {
    pub begin_balance_amount: f64,

    pub delivery: DeliveryDetails,

    /// Amount to be paid for the period.
    pub invoice_transfer: f64,

    /// Transfers under loan agreements.
    pub loan: f64,

    pub payments: Vec<Payment>,

    pub period: CashFlowPeriodInfo,

    #[serde(rename = "return")]
    pub returns: ReturnDetails,

    pub rfbs: RfbsDetails,

    pub services: AmountBreakdown,

    /// Compensations and other accruals.
    pub others: AmountBreakdown,

    pub end_balance_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryDetails {
    pub total: f64,

    /// Amount the products were bought for, commission included.
    pub amount: f64,

    pub delivery_services: AmountBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnDetails {
    pub total: f64,

    pub amount: f64,

    pub return_services: AmountBreakdown,
}

/// A total and the operations it is made of.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountBreakdown {
    pub total: f64,

    pub items: Vec<AmountItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountItem {
    /// Operation name.
    pub name: String,

    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    pub currency_code: String,

    pub payment: f64,
}

/// rFBS transfers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RfbsDetails {
    pub total: f64,

    pub transfer_delivery: f64,

    pub transfer_delivery_return: f64,

    pub compensation_delivery_return: f64,

    pub partial_compensation: f64,

    pub partial_compensation_return: f64,
}

/// Request for `/v1/report/products/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductsReportParams {
    pub language: Language,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,

    /// Search by record content.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<i64>,

    pub visibility: Visibility,
}

/// Request for `/v2/report/returns/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReturnsReportParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ReturnsReportFilter>,

    pub language: Language,
}

/// Dates are limited to the last three months.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReturnsReportFilter {
    /// `fbs` or `fbo`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delivery_schema: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

/// Request for `/v1/report/postings/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostingsReportParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PostingsReportFilter>,

    pub language: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostingsReportFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cancel_reason_id: Vec<i64>,

    /// At most one of `fbo` and `fbs`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delivery_schema: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub offer_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_from: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_to: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_alias: Vec<String>,

    /// Numeric posting statuses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<i64>,

    /// Product name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl Validate for PostingsReportParams {
    fn validate(&self) -> crate::OzonResult<()> {
        match &self.filter {
            Some(filter) => {
                validation::max_items("delivery_schema", filter.delivery_schema.len(), 1)
            }
            None => Ok(()),
        }
    }
}

/// Request for `/v1/report/warehouse/stock`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FbsStocksReportParams {
    pub language: Language,

    #[serde(rename = "warehouse_id")]
    pub warehouse_ids: Vec<i64>,
}

/// Response of the report creation endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportCodeResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub result: ReportCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportCode {
    /// Pass it to `/v1/report/info`.
    pub code: String,
}

/// Response of `/v1/report/discounted/create`.
///
/// The report code sits at the top level of the body, next to where the
/// envelope keeps its numeric error code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscountedReportResponse {
    #[serde(skip)]
    pub common: CommonResponse,

    pub code: String,
}

impl_envelope!(
    ReportListResponse,
    ReportInfoResponse,
    CashFlowResponse,
    ReportCodeResponse,
    DiscountedReportResponse,
);
