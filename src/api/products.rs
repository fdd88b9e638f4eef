use futures::Stream;
use http::Method;

use crate::models::*;
use crate::pagination;
use crate::validation::Validate;
use crate::{OzonClient, OzonResult};

/// Product catalog, stocks and prices.
///
/// Obtained with [`OzonClient::products`].
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    client: &'a OzonClient,
}

impl<'a> Products<'a> {
    pub(crate) fn new(client: &'a OzonClient) -> Self {
        Self { client }
    }

    /// Returns stock information of products, one page per call.
    ///
    /// Use [`Products::stocks_info_pages`] to walk all pages.
    pub async fn stocks_info(&self, params: &StocksInfoParams) -> OzonResult<StocksInfoResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v4/product/info/stocks", Some(params))
            .await
    }

    /// Streams every page of [`Products::stocks_info`] starting from `params`.
    pub fn stocks_info_pages(
        &self,
        params: StocksInfoParams,
    ) -> impl Stream<Item = OzonResult<StocksInfoResponse>> + 'a {
        let this = *self;
        pagination::pages::<StocksInfoResponse, _, _>(params, move |p| async move {
            this.stocks_info(&p).await
        })
    }

    /// Updates the stock of products at all FBS warehouses.
    ///
    /// Up to 100 products per request and 80 requests per minute. The stock
    /// of a single product can be updated once per 2 minutes. Items that were
    /// rejected are reported in the response, see [`BulkResponse::failed`].
    ///
    /// # Errors
    ///
    /// Returns `OzonError::InvalidParameters` if `params.stocks` is empty or
    /// holds more than 100 items. Nothing is sent in that case.
    pub async fn update_stocks(
        &self,
        params: &UpdateStocksParams,
    ) -> OzonResult<UpdateStocksResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/import/stocks", Some(params))
            .await
    }

    /// Updates the stock of products at given warehouses.
    ///
    /// Up to 100 pairs of product and warehouse per request and 80 requests
    /// per minute. A pair can be updated once per 2 minutes.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &ozon_seller_client::OzonClient) -> Result<(), ozon_seller_client::OzonError> {
    /// use ozon_seller_client::{BulkResponse, UpdateWarehouseStocksParams, WarehouseStockUpdate};
    ///
    /// let params = UpdateWarehouseStocksParams {
    ///     stocks: vec![WarehouseStockUpdate {
    ///         offer_id: "PH11042".into(),
    ///         stock: 4,
    ///         warehouse_id: 22142605386000,
    ///         ..Default::default()
    ///     }],
    /// };
    ///
    /// let response = client.products().update_warehouse_stocks(&params).await?;
    /// for failed in response.failed() {
    ///     println!("{} not updated: {:?}", failed.offer_id, failed.errors);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_warehouse_stocks(
        &self,
        params: &UpdateWarehouseStocksParams,
    ) -> OzonResult<UpdateWarehouseStocksResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v2/products/stocks", Some(params))
            .await
    }

    /// Returns stocks at the seller's FBS and rFBS warehouses by SKU.
    pub async fn fbs_warehouse_stocks(
        &self,
        params: &FbsWarehouseStocksParams,
    ) -> OzonResult<FbsWarehouseStocksResponse> {
        self.client
            .request(
                Method::POST,
                "/v1/product/info/stocks-by-warehouse/fbs",
                Some(params),
            )
            .await
    }

    /// Updates prices of up to 1000 products.
    ///
    /// The price of a product can be updated up to 10 times per hour.
    pub async fn update_prices(
        &self,
        params: &UpdatePricesParams,
    ) -> OzonResult<UpdatePricesResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/import/prices", Some(params))
            .await
    }

    /// Creates products or updates their details.
    ///
    /// Returns an import task; follow it with [`Products::import_status`].
    pub async fn import(
        &self,
        params: &ImportProductsParams,
    ) -> OzonResult<ImportProductsResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v3/product/import", Some(params))
            .await
    }

    /// Lists products, one page per call.
    ///
    /// # Errors
    ///
    /// Returns `OzonError::InvalidParameters` without sending anything if
    /// both `offer_id` and `product_id` filters are set.
    pub async fn list(&self, params: &ProductListParams) -> OzonResult<ProductListResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v3/product/list", Some(params))
            .await
    }

    /// Streams every page of [`Products::list`] starting from `params`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &ozon_seller_client::OzonClient) -> Result<(), ozon_seller_client::OzonError> {
    /// use futures::TryStreamExt;
    /// use ozon_seller_client::ProductListParams;
    ///
    /// let params = ProductListParams {
    ///     limit: Some(100),
    ///     ..Default::default()
    /// };
    ///
    /// let pages: Vec<_> = client.products().list_pages(params).try_collect().await?;
    /// let total: usize = pages.iter().map(|page| page.result.items.len()).sum();
    /// println!("{total} products");
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_pages(
        &self,
        params: ProductListParams,
    ) -> impl Stream<Item = OzonResult<ProductListResponse>> + 'a {
        let this = *self;
        pagination::pages::<ProductListResponse, _, _>(params, move |p| async move {
            this.list(&p).await
        })
    }

    /// Returns the content rating of products and how to improve it.
    pub async fn rating_by_sku(
        &self,
        params: &RatingBySkuParams,
    ) -> OzonResult<RatingBySkuResponse> {
        self.client
            .request(Method::POST, "/v1/product/rating-by-sku", Some(params))
            .await
    }

    /// Returns the state of a product import task.
    pub async fn import_status(
        &self,
        params: &ImportStatusParams,
    ) -> OzonResult<ImportStatusResponse> {
        self.client
            .request(Method::POST, "/v1/product/import/info", Some(params))
            .await
    }

    /// Creates products by copying existing product cards by SKU.
    pub async fn import_by_sku(
        &self,
        params: &ImportBySkuParams,
    ) -> OzonResult<ImportBySkuResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/import-by-sku", Some(params))
            .await
    }

    /// Replaces the images of a product.
    ///
    /// Every call must carry the full image set; images left out are removed.
    pub async fn update_images(
        &self,
        params: &UpdateImagesParams,
    ) -> OzonResult<UpdateImagesResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/pictures/import", Some(params))
            .await
    }

    pub async fn images_status(
        &self,
        params: &ImagesStatusParams,
    ) -> OzonResult<ImagesStatusResponse> {
        self.client
            .request(Method::POST, "/v2/product/pictures/info", Some(params))
            .await
    }

    /// Returns product cards by identifiers of a single kind.
    pub async fn list_by_ids(&self, params: &ListByIdsParams) -> OzonResult<ListByIdsResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v3/product/info/list", Some(params))
            .await
    }

    /// Returns product characteristics filtered by offer or product id.
    pub async fn attributes(&self, params: &AttributesParams) -> OzonResult<AttributesResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v4/product/info/attributes", Some(params))
            .await
    }

    pub fn attributes_pages(
        &self,
        params: AttributesParams,
    ) -> impl Stream<Item = OzonResult<AttributesResponse>> + 'a {
        let this = *self;
        pagination::pages::<AttributesResponse, _, _>(params, move |p| async move {
            this.attributes(&p).await
        })
    }

    /// Returns product characteristics filtered by SKU, offer or product id.
    ///
    /// Same endpoint as [`Products::attributes`] with string identifiers and
    /// a reduced result shape.
    pub async fn attributes_by_sku(
        &self,
        params: &AttributesBySkuParams,
    ) -> OzonResult<AttributesBySkuResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v4/product/info/attributes", Some(params))
            .await
    }

    pub fn attributes_by_sku_pages(
        &self,
        params: AttributesBySkuParams,
    ) -> impl Stream<Item = OzonResult<AttributesBySkuResponse>> + 'a {
        let this = *self;
        pagination::pages::<AttributesBySkuResponse, _, _>(params, move |p| async move {
            this.attributes_by_sku(&p).await
        })
    }

    pub async fn description(&self, params: &DescriptionParams) -> OzonResult<DescriptionResponse> {
        self.client
            .request(Method::POST, "/v1/product/info/description", Some(params))
            .await
    }

    /// Returns the product range limit and the daily creation and update
    /// quotas.
    pub async fn range_limit(&self) -> OzonResult<RangeLimitResponse> {
        self.client
            .request(Method::POST, "/v4/product/info/limit", None::<&()>)
            .await
    }

    /// Changes `offer_id` values of products.
    pub async fn change_offer_ids(
        &self,
        params: &ChangeOfferIdsParams,
    ) -> OzonResult<ChangeOfferIdsResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/update/offer-id", Some(params))
            .await
    }

    pub async fn archive(&self, params: &ArchiveParams) -> OzonResult<BoolResultResponse> {
        self.client
            .request(Method::POST, "/v1/product/archive", Some(params))
            .await
    }

    pub async fn unarchive(&self, params: &ArchiveParams) -> OzonResult<BoolResultResponse> {
        self.client
            .request(Method::POST, "/v1/product/unarchive", Some(params))
            .await
    }

    /// Deletes archived products that have no SKU. Up to 500 per request.
    pub async fn delete_without_sku(
        &self,
        params: &DeleteWithoutSkuParams,
    ) -> OzonResult<DeleteWithoutSkuResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v2/products/delete", Some(params))
            .await
    }

    /// Uploads activation codes of a digital product or service.
    pub async fn upload_digital_codes(
        &self,
        params: &UploadDigitalCodesParams,
    ) -> OzonResult<UploadDigitalCodesResponse> {
        self.client
            .request(Method::POST, "/v1/product/upload_digital_codes", Some(params))
            .await
    }

    pub async fn digital_codes_status(
        &self,
        params: &DigitalCodesStatusParams,
    ) -> OzonResult<DigitalCodesStatusResponse> {
        self.client
            .request(
                Method::POST,
                "/v1/product/upload_digital_codes/info",
                Some(params),
            )
            .await
    }

    /// Returns prices, commissions and price indexes, one page per call.
    pub async fn prices_info(&self, params: &PricesInfoParams) -> OzonResult<PricesInfoResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v5/product/info/prices", Some(params))
            .await
    }

    pub fn prices_info_pages(
        &self,
        params: PricesInfoParams,
    ) -> impl Stream<Item = OzonResult<PricesInfoResponse>> + 'a {
        let this = *self;
        pagination::pages::<PricesInfoResponse, _, _>(params, move |p| async move {
            this.prices_info(&p).await
        })
    }

    /// Returns the condition and defects of markdown products.
    pub async fn markdown_info(
        &self,
        params: &MarkdownInfoParams,
    ) -> OzonResult<MarkdownInfoResponse> {
        self.client
            .request(Method::POST, "/v1/product/info/discounted", Some(params))
            .await
    }

    /// Sets the discount of a markdown product sold under FBS, 3 to 99 percent.
    pub async fn set_markdown_discount(
        &self,
        params: &SetMarkdownDiscountParams,
    ) -> OzonResult<SetMarkdownDiscountResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/update/discount", Some(params))
            .await
    }

    /// Returns the number of users waiting for products to be back in stock.
    pub async fn subscription_count(
        &self,
        params: &SubscriptionCountParams,
    ) -> OzonResult<SubscriptionCountResponse> {
        self.client
            .request(Method::POST, "/v1/product/info/subscription", Some(params))
            .await
    }

    pub async fn update_attributes(
        &self,
        params: &UpdateAttributesParams,
    ) -> OzonResult<UpdateAttributesResponse> {
        self.client
            .request(Method::POST, "/v1/product/attributes/update", Some(params))
            .await
    }

    /// Returns every SKU related to the given ones, hidden or deleted SKUs
    /// included. Up to 200 SKUs per request.
    pub async fn related_skus(
        &self,
        params: &RelatedSkusParams,
    ) -> OzonResult<RelatedSkusResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/related-sku/get", Some(params))
            .await
    }

    pub async fn economy_info(
        &self,
        params: &EconomyInfoParams,
    ) -> OzonResult<EconomyInfoResponse> {
        self.client
            .request(Method::POST, "/v1/product/quant/info", Some(params))
            .await
    }

    /// Lists economy products, one page per call.
    pub async fn economy_list(
        &self,
        params: &EconomyListParams,
    ) -> OzonResult<EconomyListResponse> {
        params.validate()?;
        self.client
            .request(Method::POST, "/v1/product/quant/list", Some(params))
            .await
    }

    pub fn economy_list_pages(
        &self,
        params: EconomyListParams,
    ) -> impl Stream<Item = OzonResult<EconomyListResponse>> + 'a {
        let this = *self;
        pagination::pages::<EconomyListResponse, _, _>(params, move |p| async move {
            this.economy_list(&p).await
        })
    }

    /// Extends the relevance of the minimum prices of products by 30 days.
    pub async fn update_price_timer(&self, params: &PriceTimerParams) -> OzonResult<EmptyResponse> {
        self.client
            .request(Method::POST, "/v1/product/action/timer/update", Some(params))
            .await
    }

    pub async fn price_timer_status(
        &self,
        params: &PriceTimerParams,
    ) -> OzonResult<PriceTimerStatusResponse> {
        self.client
            .request(Method::POST, "/v1/product/action/timer/status", Some(params))
            .await
    }
}
