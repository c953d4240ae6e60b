//! Query-string URL builder for every vendor endpoint.
//!
//! # Design
//! Each `build_*` method formats one fixed path and a flat query string and
//! returns it as an `HttpRequest`. Building cannot fail.
//!
//! - Required parameters are always present. Optional parameters contribute a
//!   `key=value&` fragment when set and nothing at all when unset.
//! - Some vendor templates end in a bare `&`; that trailing separator is part
//!   of the wire format and is kept.
//! - Values are percent-encoded with the RFC 3986 unreserved set. Ordinary
//!   ids and tokens pass through unchanged, while values with `&`, `=` or a
//!   space cannot break the query apart.
//! - Language is always English.

use chrono::NaiveDateTime;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ClientConfig;
use crate::http::HttpRequest;

const LANG: &str = "en";

/// Vendor timestamp layout, `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn escape(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn optional_int(key: &str, value: Option<u32>) -> String {
    value.map(|v| format!("{key}={v}&")).unwrap_or_default()
}

fn optional_time(key: &str, value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| format!("{key}={}&", escape(&v.format(TIMESTAMP_FORMAT).to_string())))
        .unwrap_or_default()
}

fn optional_str(key: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!("{key}={}&", escape(v)))
        .unwrap_or_default()
}

/// Product and option selector shared by `Translate` and `GetProductPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery<'a> {
    pub product_id: &'a str,
    pub poa_id: &'a str,
    pub warehouse: &'a str,
    pub currency: &'a str,
}

/// Parameters for `getShipments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipmentQuery<'a> {
    pub product_id: &'a str,
    pub warehouse: &'a str,
    pub country: &'a str,
    pub poa_id: &'a str,
    pub currency: &'a str,
    pub quantity: u32,
}

/// Optional date-range filters for `getProductList`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductListFilter {
    pub add_date_start: Option<NaiveDateTime>,
    pub add_date_end: Option<NaiveDateTime>,
    pub modify_date_start: Option<NaiveDateTime>,
    pub modify_date_end: Option<NaiveDateTime>,
}

/// Formats vendor URLs for one set of credentials and one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    app_id: String,
    app_secret: String,
    api_test: bool,
}

impl UrlBuilder {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            api_test: config.api_test(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, operation: &'static str, url: String) -> HttpRequest {
        let url = match (self.api_test, url.ends_with('&')) {
            (false, _) => url,
            (true, true) => format!("{url}apiTest=1"),
            (true, false) => format!("{url}&apiTest=1"),
        };
        HttpRequest { operation, url }
    }

    pub fn build_translate(&self, token: &str, query: &PriceQuery<'_>) -> HttpRequest {
        self.request(
            "Translate",
            format!(
                "{}/product/Translate?access_token={}&lang={LANG}&product_id={}&poa_id={}&warehouse={}&currency={}",
                self.base_url,
                escape(token),
                escape(query.product_id),
                escape(query.poa_id),
                escape(query.warehouse),
                escape(query.currency),
            ),
        )
    }

    pub fn build_get_product_price(&self, token: &str, query: &PriceQuery<'_>) -> HttpRequest {
        self.request(
            "GetProductPrice",
            format!(
                "{}/product/GetProductPrice?access_token={}&lang={LANG}&product_id={}&poa_id={}&warehouse={}&currency={}",
                self.base_url,
                escape(token),
                escape(query.product_id),
                escape(query.poa_id),
                escape(query.warehouse),
                escape(query.currency),
            ),
        )
    }

    pub fn build_get_access_token(&self) -> HttpRequest {
        self.request(
            "getAccessToken",
            format!(
                "{}/getAccessToken?app_id={}&app_secret={}",
                self.base_url,
                escape(&self.app_id),
                escape(&self.app_secret),
            ),
        )
    }

    pub fn build_get_category_list(&self, token: &str, page: Option<u32>) -> HttpRequest {
        self.request(
            "getCategoryList",
            format!(
                "{}/category/getCategoryList?access_token={}&lang={LANG}&{}",
                self.base_url,
                escape(token),
                optional_int("page", page),
            ),
        )
    }

    pub fn build_get_product_list(
        &self,
        token: &str,
        category_id: &str,
        filter: &ProductListFilter,
        page: Option<u32>,
    ) -> HttpRequest {
        self.request(
            "getProductList",
            format!(
                "{}/product/getProductList?access_token={}&lang={LANG}&cat_id={}&{}{}{}{}{}",
                self.base_url,
                escape(token),
                escape(category_id),
                optional_time("add_date_start", filter.add_date_start),
                optional_time("add_date_end", filter.add_date_end),
                optional_time("modify_date_start", filter.modify_date_start),
                optional_time("modify_date_end", filter.modify_date_end),
                optional_int("page", page),
            ),
        )
    }

    pub fn build_get_product_info(&self, token: &str, product_id: &str, currency: Option<&str>) -> HttpRequest {
        self.request(
            "getProductInfo",
            format!(
                "{}/product/getProductInfo?access_token={}&lang={LANG}&product_id={}&{}",
                self.base_url,
                escape(token),
                escape(product_id),
                optional_str("currency", currency),
            ),
        )
    }

    pub fn build_get_shipments(&self, token: &str, query: &ShipmentQuery<'_>) -> HttpRequest {
        self.request(
            "getShipments",
            format!(
                "{}/product/getShipments?access_token={}&lang={LANG}&product_id={}&warehouse={}&country={}&poa_id={}&quantity={}&currency={}",
                self.base_url,
                escape(token),
                escape(query.product_id),
                escape(query.warehouse),
                escape(query.country),
                escape(query.poa_id),
                query.quantity,
                escape(query.currency),
            ),
        )
    }

    pub fn build_get_order_info(&self, token: &str, sale_record_id: &str) -> HttpRequest {
        self.request(
            "getOrderInfo",
            format!(
                "{}/order/getOrderInfo?access_token={}&lang={LANG}&sale_record_id={}&",
                self.base_url,
                escape(token),
                escape(sale_record_id),
            ),
        )
    }

    pub fn build_get_track_info(&self, token: &str, order_id: &str) -> HttpRequest {
        self.request(
            "getTrackInfo",
            format!(
                "{}/getTrackInfo?access_token={}&lang={LANG}&order_id={}",
                self.base_url,
                escape(token),
                escape(order_id),
            ),
        )
    }

    pub fn build_get_order_history(&self, token: &str, sale_record_id: &str, order_id: &str) -> HttpRequest {
        self.request(
            "getOrderHistory",
            format!(
                "{}/getOrderHistory?access_token={}&lang={LANG}&sale_record_id={}&order_id={}",
                self.base_url,
                escape(token),
                escape(sale_record_id),
                escape(order_id),
            ),
        )
    }

    pub fn build_get_countries(&self, token: &str) -> HttpRequest {
        self.request(
            "getCountries",
            format!(
                "{}/common/getCountries?access_token={}&lang={LANG}&",
                self.base_url,
                escape(token),
            ),
        )
    }

    pub fn build_get_stock(&self, token: &str, product_id: &str) -> HttpRequest {
        self.request(
            "getStocks",
            format!(
                "{}/product/getStocks?access_token={}&lang={LANG}&product_id={}",
                self.base_url,
                escape(token),
                escape(product_id),
            ),
        )
    }

    pub fn build_get_product_update_list(&self, token: &str, minutes: u32, page: u32) -> HttpRequest {
        self.request(
            "getProductUpdateList",
            format!(
                "{}/product/getProductUpdateList?access_token={}&lang={LANG}&minutes={minutes}&page={page}",
                self.base_url,
                escape(token),
            ),
        )
    }

    pub fn build_get_limit_price_brand(&self, token: &str, page: u32) -> HttpRequest {
        self.request(
            "getLimitPriceBrand",
            format!(
                "{}/product/getLimitPriceBrand?access_token={}&page={page}",
                self.base_url,
                escape(token),
            ),
        )
    }

    pub fn build_get_brand_limit_price_list(&self, token: &str, brand_id: &str, page: u32) -> HttpRequest {
        self.request(
            "getBrandLimitPriceList",
            format!(
                "{}/product/getBrandLimitPriceList?access_token={}&page={page}&brand_id={}",
                self.base_url,
                escape(token),
                escape(brand_id),
            ),
        )
    }
}
