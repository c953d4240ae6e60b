//! Vendor payloads for the Banggood dropshipping API.
//!
//! # Design
//! One response type per endpoint, with field names mapped to the vendor's
//! snake_case keys. Every struct is `#[serde(default)]`: a key the vendor
//! omits decodes to its zero value and keys we do not model are ignored.
//! Paginated responses embed [`Page`] through `#[serde(flatten)]`.
//!
//! Numeric types follow what the vendor actually sends, which is not always
//! consistent (`code` is a number on some endpoints and a string on others).

use serde::{Deserialize, Serialize};

/// Page envelope shared by every paginated listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(rename = "page")]
    pub page_number: u32,
    pub page_total: u32,
    pub page_size: u32,
}

impl Page {
    /// True once the reported page has reached the reported total.
    pub fn is_last(&self) -> bool {
        self.page_number >= self.page_total
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProductPriceResponse {
    #[serde(rename = "TranslatedText")]
    pub translated_text: String,
    pub error: i64,
    #[serde(rename = "errMsg")]
    pub error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAccessTokenResponse {
    pub code: i64,
    pub access_token: String,
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(rename = "cat_id")]
    pub category_id: String,
    #[serde(rename = "cat_name")]
    pub category_name: String,
    pub parent_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCategoryListResponse {
    #[serde(flatten)]
    pub page: Page,
    pub code: i64,
    #[serde(rename = "cat_total")]
    pub category_total: i64,
    #[serde(rename = "lang")]
    pub language: String,
    #[serde(rename = "cat_list")]
    pub category_list: Vec<Category>,
}

/// A catalog entry. `add_date` / `modify_date` are kept as the vendor's
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub product_id: String,
    // numeric here, unlike `Category::category_id`
    #[serde(rename = "cat_id")]
    pub category_id: i64,
    pub product_name: String,
    #[serde(rename = "img")]
    pub image: String,
    #[serde(rename = "meta_desc")]
    pub meta_description: String,
    pub add_date: String,
    pub modify_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProductListResponse {
    #[serde(flatten)]
    pub page: Page,
    pub code: i64,
    pub product_total: i64,
    #[serde(rename = "lang")]
    pub language: String,
    pub product_list: Vec<Product>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoaValue {
    pub poa_id: String,
    pub poa_name: String,
    pub poa: String,
    pub poa_price: f64,
    pub small_image: String,
    pub view_image: String,
    pub large_image: String,
    pub list_grid_image: String,
}

/// A product option (size, color, ...) and its selectable values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoaOption {
    pub option_id: String,
    pub option_name: String,
    pub option_values: Vec<PoaValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehousePrice {
    pub warehouse: String,
    pub warehouse_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductImage {
    pub home: String,
    pub list_grid: String,
    pub grid: String,
    pub gallery: String,
    pub view: String,
    pub other_items: String,
    pub large: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProductInfoResponse {
    pub poa_list: Vec<PoaOption>,
    pub warehouse_list: Vec<WarehousePrice>,
    pub image_list: Vec<ProductImage>,
    pub description: String,
    pub code: i64,
    #[serde(rename = "lang")]
    pub language: String,
    pub weight: i64,
    pub product_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetShipmentsResponse {
    pub code: i64,
    pub currency: String,
    #[serde(rename = "shipmethodcode")]
    pub ship_method_code: String,
    #[serde(rename = "shipmethodname")]
    pub ship_method_name: String,
    #[serde(rename = "shipday")]
    pub ship_day: String,
    #[serde(rename = "shipfee")]
    pub ship_fee: String,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOrderProduct {
    pub product_id: String,
    pub poa_id: String,
    pub quantity: String,
    #[serde(rename = "shipmethod_code")]
    pub ship_method_code: String,
}

/// Order payload for `importOrder`. Declared for completeness; the client
/// has no send path for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOrderRequest {
    pub access_token: String,
    pub sale_record_id: String,
    pub delivery_name: String,
    pub delivery_country: String,
    pub delivery_state: String,
    pub delivery_city: String,
    pub delivery_street_address: String,
    pub delivery_street_address2: String,
    pub delivery_postcode: String,
    pub delivery_telephone: String,
    pub product_total: i64,
    pub product_list: Vec<ImportOrderProduct>,
    #[serde(rename = "lang")]
    pub language: String,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOrderFailure {
    pub product_id: String,
    pub poa_id: String,
    pub warehouse: String,
    pub quantity: String,
    #[serde(rename = "shipmethod_code")]
    pub ship_method_code: String,
    #[serde(rename = "error_desc")]
    pub error_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOrderResponse {
    pub sale_record_id: String,
    pub product_total: String,
    pub success_total: String,
    pub failure_total: String,
    pub failure_list: Vec<ImportOrderFailure>,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderProduct {
    pub product_id: String,
    pub warehouse: Vec<String>,
    pub quantity: i64,
    pub poa_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_id: String,
    pub status: String,
    pub total_amount: f64,
    pub currency: String,
    #[serde(rename = "shipment_method")]
    pub ship_method_code: String,
    pub sub_amount: f64,
    #[serde(rename = "ds_discount")]
    pub drop_ship_discount: f64,
    #[serde(rename = "shipfee")]
    pub ship_fee: f64,
    pub ship_insurance: f64,
    pub tariff_insurance: f64,
    pub product_list: Vec<OrderProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryInfo {
    pub delivery_name: String,
    pub delivery_country: String,
    pub delivery_state: String,
    pub delivery_city: String,
    pub delivery_street_address: String,
    // the vendor misspells this key
    #[serde(rename = "delivery_steet_address2")]
    pub delivery_street_address2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleRecord {
    pub sale_record_id: String,
    pub order_list: Vec<Order>,
    pub user_info: Vec<DeliveryInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOrderInfoResponse {
    pub code: i64,
    pub sale_record_id_list: Vec<SaleRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackEvent {
    pub event: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTrackInfoResponse {
    pub track_info: Vec<TrackEvent>,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatusEntry {
    pub status: String,
    pub date_add: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOrderHistoryResponse {
    pub order_history: Vec<OrderStatusEntry>,
    pub track_number: String,
    pub code: String,
}

// ---------------------------------------------------------------------------
// Reference data and stock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub country_id: i64,
    pub country_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCountriesResponse {
    pub countries: Vec<Country>,
    pub code: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoaStock {
    pub poa_id: i64,
    pub poa: String,
    pub stock: String,
    #[serde(rename = "stocks_msg")]
    pub stocks_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseStock {
    pub warehouse: String,
    pub stocks_list: Vec<PoaStock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetStockResponse {
    pub stocks: Vec<WarehouseStock>,
    pub code: String,
    #[serde(rename = "lang")]
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatedProduct {
    pub product_id: String,
    pub state: i64,
    pub modify_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProductUpdateListResponse {
    #[serde(flatten)]
    pub page: Page,
    pub code: i64,
    pub product_total: i64,
    #[serde(rename = "lang")]
    pub language: String,
    pub update_product_list: Vec<UpdatedProduct>,
}

// ---------------------------------------------------------------------------
// Brand price limits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub brand_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetLimitPriceBrandResponse {
    #[serde(flatten)]
    pub page: Page,
    pub code: i64,
    pub brand_total: i64,
    #[serde(rename = "lang")]
    pub language: String,
    pub brand_list: Vec<Brand>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandProduct {
    pub product_id: String,
    pub sku: String,
    pub poa: String,
    pub limit_price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBrandLimitPriceListResponse {
    #[serde(flatten)]
    pub page: Page,
    pub code: i64,
    pub product_total: i64,
    #[serde(rename = "lang")]
    pub language: String,
    pub product_list: Vec<BrandProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_is_flattened() {
        let body = r#"{"page":2,"page_total":5,"page_size":20,"code":0,"cat_total":97,"lang":"en","cat_list":[]}"#;
        let parsed: GetCategoryListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.page,
            Page {
                page_number: 2,
                page_total: 5,
                page_size: 20
            }
        );
        assert_eq!(parsed.category_total, 97);
    }

    #[test]
    fn missing_keys_decode_to_zero_values() {
        let parsed: GetProductListResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, GetProductListResponse::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let parsed: GetTrackInfoResponse =
            serde_json::from_str(r#"{"code":"0","track_info":[],"carrier":"DHL"}"#).unwrap();
        assert_eq!(parsed.code, "0");
    }

    #[test]
    fn last_page_detection() {
        let page = |n, t| Page {
            page_number: n,
            page_total: t,
            page_size: 0,
        };
        assert!(!page(1, 3).is_last());
        assert!(page(3, 3).is_last());
        assert!(page(4, 3).is_last());
        assert!(page(1, 0).is_last());
    }

    #[test]
    fn delivery_info_reads_misspelled_key() {
        let parsed: DeliveryInfo =
            serde_json::from_str(r#"{"delivery_steet_address2":"Apt 4"}"#).unwrap();
        assert_eq!(parsed.delivery_street_address2, "Apt 4");
    }

    #[test]
    fn product_price_uses_vendor_casing() {
        let parsed: GetProductPriceResponse =
            serde_json::from_str(r#"{"TranslatedText":"hola","error":1,"errMsg":"bad poa"}"#).unwrap();
        assert_eq!(parsed.translated_text, "hola");
        assert_eq!(parsed.error, 1);
        assert_eq!(parsed.error_message, "bad poa");
    }

    #[test]
    fn import_order_request_serializes_vendor_keys() {
        let request = ImportOrderRequest {
            sale_record_id: "SR-1".to_string(),
            product_list: vec![ImportOrderProduct {
                product_id: "123".to_string(),
                ship_method_code: "air".to_string(),
                ..Default::default()
            }],
            language: "en".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sale_record_id"], "SR-1");
        assert_eq!(json["lang"], "en");
        assert_eq!(json["product_list"][0]["shipmethod_code"], "air");
    }
}
