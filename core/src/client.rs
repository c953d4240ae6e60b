//! Typed client for the Banggood dropshipping API.
//!
//! # Design
//! `BanggoodClient` owns a `UrlBuilder` and a `Transport` and nothing else,
//! so it is safe to share across threads. Every operation follows the same
//! three steps: build the URL, run one GET through the transport with the
//! caller's `RequestContext`, decode the body. There are no retries and no
//! caching; whatever the transport or decoder reports is returned as is.
//!
//! Decoding ignores the HTTP status and the vendor's in-body `code`/`errMsg`
//! fields. Those are present on the returned values for the caller to check.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, RequestContext, Transport, UreqTransport};
use crate::types::*;
use crate::url::{PriceQuery, ProductListFilter, ShipmentQuery, UrlBuilder};

/// Decode a vendor response body into `T`.
///
/// The status code is not consulted. A body that is not valid JSON for `T`,
/// including one that is not UTF-8 at all, yields `ApiError::Decode`
/// carrying the body as lossy text.
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|source| ApiError::Decode {
        source,
        body: response.text(),
    })
}

/// Client for the vendor API. One method per endpoint.
#[derive(Debug, Clone)]
pub struct BanggoodClient<T = UreqTransport> {
    urls: UrlBuilder,
    transport: T,
}

impl BanggoodClient<UreqTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new(config.timeout))
    }

    /// Production host with default timeouts.
    pub fn with_credentials(app_id: &str, app_secret: &str) -> Self {
        Self::new(&ClientConfig::new(app_id, app_secret))
    }
}

impl<T: Transport> BanggoodClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            urls: UrlBuilder::new(config),
            transport,
        }
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send<R: DeserializeOwned>(&self, ctx: &RequestContext, request: HttpRequest) -> Result<R, ApiError> {
        debug!(
            operation = request.operation,
            endpoint = request.endpoint(),
            "sending request"
        );

        if ctx.is_expired() {
            return Err(ApiError::transport(request.endpoint(), "deadline exceeded"));
        }

        let response = self.transport.execute(ctx, &request)?;
        if !response.is_success() {
            warn!(
                operation = request.operation,
                status = response.status,
                "vendor returned non-success status"
            );
        }

        parse_response(&response)
    }

    pub fn translate(
        &self,
        ctx: &RequestContext,
        token: &str,
        query: &PriceQuery<'_>,
    ) -> Result<TranslateResponse, ApiError> {
        self.send(ctx, self.urls.build_translate(token, query))
    }

    pub fn get_product_price(
        &self,
        ctx: &RequestContext,
        token: &str,
        query: &PriceQuery<'_>,
    ) -> Result<GetProductPriceResponse, ApiError> {
        self.send(ctx, self.urls.build_get_product_price(token, query))
    }

    /// Exchange the configured app id and secret for an access token.
    pub fn get_access_token(&self, ctx: &RequestContext) -> Result<GetAccessTokenResponse, ApiError> {
        self.send(ctx, self.urls.build_get_access_token())
    }

    pub fn get_category_list(
        &self,
        ctx: &RequestContext,
        token: &str,
        page: Option<u32>,
    ) -> Result<GetCategoryListResponse, ApiError> {
        self.send(ctx, self.urls.build_get_category_list(token, page))
    }

    pub fn get_product_list(
        &self,
        ctx: &RequestContext,
        token: &str,
        category_id: &str,
        filter: &ProductListFilter,
        page: Option<u32>,
    ) -> Result<GetProductListResponse, ApiError> {
        self.send(
            ctx,
            self.urls.build_get_product_list(token, category_id, filter, page),
        )
    }

    pub fn get_product_info(
        &self,
        ctx: &RequestContext,
        token: &str,
        product_id: &str,
        currency: Option<&str>,
    ) -> Result<GetProductInfoResponse, ApiError> {
        self.send(ctx, self.urls.build_get_product_info(token, product_id, currency))
    }

    pub fn get_shipments(
        &self,
        ctx: &RequestContext,
        token: &str,
        query: &ShipmentQuery<'_>,
    ) -> Result<GetShipmentsResponse, ApiError> {
        self.send(ctx, self.urls.build_get_shipments(token, query))
    }

    /// Order import has no send path. Always fails without touching the
    /// network.
    pub fn import_order(
        &self,
        _ctx: &RequestContext,
        _request: &ImportOrderRequest,
    ) -> Result<ImportOrderResponse, ApiError> {
        Err(ApiError::NotImplemented {
            operation: "importOrder",
        })
    }

    pub fn get_order_info(
        &self,
        ctx: &RequestContext,
        token: &str,
        sale_record_id: &str,
    ) -> Result<GetOrderInfoResponse, ApiError> {
        self.send(ctx, self.urls.build_get_order_info(token, sale_record_id))
    }

    pub fn get_track_info(
        &self,
        ctx: &RequestContext,
        token: &str,
        order_id: &str,
    ) -> Result<GetTrackInfoResponse, ApiError> {
        self.send(ctx, self.urls.build_get_track_info(token, order_id))
    }

    pub fn get_order_history(
        &self,
        ctx: &RequestContext,
        token: &str,
        sale_record_id: &str,
        order_id: &str,
    ) -> Result<GetOrderHistoryResponse, ApiError> {
        self.send(
            ctx,
            self.urls.build_get_order_history(token, sale_record_id, order_id),
        )
    }

    pub fn get_countries(&self, ctx: &RequestContext, token: &str) -> Result<GetCountriesResponse, ApiError> {
        self.send(ctx, self.urls.build_get_countries(token))
    }

    pub fn get_stock(
        &self,
        ctx: &RequestContext,
        token: &str,
        product_id: &str,
    ) -> Result<GetStockResponse, ApiError> {
        self.send(ctx, self.urls.build_get_stock(token, product_id))
    }

    pub fn get_product_update_list(
        &self,
        ctx: &RequestContext,
        token: &str,
        minutes: u32,
        page: u32,
    ) -> Result<GetProductUpdateListResponse, ApiError> {
        self.send(ctx, self.urls.build_get_product_update_list(token, minutes, page))
    }

    pub fn get_limit_price_brand(
        &self,
        ctx: &RequestContext,
        token: &str,
        page: u32,
    ) -> Result<GetLimitPriceBrandResponse, ApiError> {
        self.send(ctx, self.urls.build_get_limit_price_brand(token, page))
    }

    pub fn get_brand_limit_price_list(
        &self,
        ctx: &RequestContext,
        token: &str,
        brand_id: &str,
        page: u32,
    ) -> Result<GetBrandLimitPriceListResponse, ApiError> {
        self.send(
            ctx,
            self.urls.build_get_brand_limit_price_list(token, brand_id, page),
        )
    }
}
