use futures::Stream;
use http::Method;

use crate::models::*;
use crate::pagination;
use crate::validation::Validate;
use crate::{OzonClient, OzonResult};

/// Report generation and financial statements.
///
/// Obtained with [`OzonClient::reports`]. Reports are generated in the
/// background: the `create_*` methods return a code that is then polled with
/// [`Reports::info`].
#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    client: &'a OzonClient,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(client: &'a OzonClient) -> Self {
        Self { client }
    }

    /// Lists previously generated reports, one page per call.
    pub async fn list(&self, params: &ReportListParams) -> OzonResult<ReportListResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/report/list", Some(params))
            .await
    }

    /// Streams every page of [`Reports::list`] starting from `params`.
    pub fn list_pages(
        &self,
        params: ReportListParams,
    ) -> impl Stream<Item = OzonResult<ReportListResponse>> + 'a {
        let this = *self;
        pagination::pages::<ReportListResponse, _, _>(params, move |p| async move {
            this.list(&p).await
        })
    }

    /// Returns a report by its code.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &ozon_seller_client::OzonClient) -> Result<(), ozon_seller_client::OzonError> {
    /// use ozon_seller_client::{ReportInfoParams, ReportStatus};
    ///
    /// let params = ReportInfoParams { code: "REPORT_seller_products_924336_1720170405_a9ea2f27".into() };
    /// let report = client.reports().info(&params).await?.result;
    /// if report.status == ReportStatus::Success {
    ///     println!("download: {}", report.file);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn info(&self, params: &ReportInfoParams) -> OzonResult<ReportInfoResponse> {
        self.client
            .request(Method::POST, "/v1/report/info", Some(params))
            .await
    }

    /// Returns the cash flow statement for a period, one page per call.
    pub async fn cash_flow_statement(
        &self,
        params: &CashFlowParams,
    ) -> OzonResult<CashFlowResponse> {
        params.validate()?;
        self.client
            .request(
                Method::POST,
                "/v1/finance/cash-flow-statement/list",
                Some(params),
            )
            .await
    }

    pub fn cash_flow_statement_pages(
        &self,
        params: CashFlowParams,
    ) -> impl Stream<Item = OzonResult<CashFlowResponse>> + 'a {
        let this = *self;
        pagination::pages::<CashFlowResponse, _, _>(params, move |p| async move {
            this.cash_flow_statement(&p).await
        })
    }

    /// Starts a report with product data: Ozon ID, quantities, prices and
    /// statuses.
    pub async fn create_products_report(
        &self,
        params: &ProductsReportParams,
    ) -> OzonResult<ReportCodeResponse> {
        self.client
            .request(Method::POST, "/v1/report/products/create", Some(params))
            .await
    }

    /// Starts a report on FBO and FBS returns.
    pub async fn create_returns_report(
        &self,
        params: &ReturnsReportParams,
    ) -> OzonResult<ReportCodeResponse> {
        self.client
            .request(Method::POST, "/v2/report/returns/create", Some(params))
            .await
    }

    /// Starts a report on postings with statuses, dates and contents.
    pub async fn create_postings_report(
        &self,
        params: &PostingsReportParams,
    ) -> OzonResult<ReportCodeResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/report/postings/create", Some(params))
            .await
    }

    /// Starts a report on products discounted in Ozon warehouses.
    pub async fn create_discounted_report(&self) -> OzonResult<DiscountedReportResponse> {
        self.client
            .request(Method::POST, "/v1/report/discounted/create", None::<&()>)
            .await
    }

    /// Starts a report on available and reserved stock at FBS warehouses.
    pub async fn create_fbs_stocks_report(
        &self,
        params: &FbsStocksReportParams,
    ) -> OzonResult<ReportCodeResponse> {
        self.client
            .request(Method::POST, "/v1/report/warehouse/stock", Some(params))
            .await
    }
}
