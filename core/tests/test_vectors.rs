//! Verify URL building and body decoding against JSON test vectors stored in
//! `test-vectors/`.
//!
//! `urls.json` maps endpoint inputs to the exact URL the builder must produce.
//! `decode.json` maps canned vendor bodies to the decoded value, compared as
//! re-serialized JSON so field order does not matter.

use banggood_core::{
    parse_response, ApiError, ClientConfig, GetAccessTokenResponse, GetBrandLimitPriceListResponse,
    GetCategoryListResponse, GetCountriesResponse, GetLimitPriceBrandResponse,
    GetOrderHistoryResponse, GetProductListResponse, GetProductPriceResponse,
    GetProductUpdateListResponse, GetShipmentsResponse, GetStockResponse, GetTrackInfoResponse,
    HttpRequest, HttpResponse, ImportOrderResponse, PriceQuery, ProductListFilter, ShipmentQuery,
    TranslateResponse, UrlBuilder,
};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

fn str_field<'a>(input: &'a Value, key: &str) -> &'a str {
    input[key].as_str().unwrap_or_else(|| panic!("missing string field {key}"))
}

fn u32_field(input: &Value, key: &str) -> u32 {
    input[key].as_u64().unwrap_or_else(|| panic!("missing integer field {key}")) as u32
}

fn opt_page(input: &Value) -> Option<u32> {
    input.get("page").and_then(Value::as_u64).map(|p| p as u32)
}

fn opt_time(input: &Value, key: &str) -> Option<NaiveDateTime> {
    input
        .get(key)
        .and_then(Value::as_str)
        .map(|s| NaiveDateTime::parse_from_str(s, banggood_core::url::TIMESTAMP_FORMAT).unwrap())
}

fn price_query(input: &Value) -> PriceQuery<'_> {
    PriceQuery {
        product_id: str_field(input, "product_id"),
        poa_id: str_field(input, "poa_id"),
        warehouse: str_field(input, "warehouse"),
        currency: str_field(input, "currency"),
    }
}

fn build(urls: &UrlBuilder, operation: &str, input: &Value) -> HttpRequest {
    let token = input.get("token").and_then(Value::as_str).unwrap_or_default();
    match operation {
        "get_access_token" => urls.build_get_access_token(),
        "translate" => urls.build_translate(token, &price_query(input)),
        "get_product_price" => urls.build_get_product_price(token, &price_query(input)),
        "get_category_list" => urls.build_get_category_list(token, opt_page(input)),
        "get_product_list" => {
            let filter = ProductListFilter {
                add_date_start: opt_time(input, "add_date_start"),
                add_date_end: opt_time(input, "add_date_end"),
                modify_date_start: opt_time(input, "modify_date_start"),
                modify_date_end: opt_time(input, "modify_date_end"),
            };
            urls.build_get_product_list(token, str_field(input, "category_id"), &filter, opt_page(input))
        }
        "get_product_info" => urls.build_get_product_info(
            token,
            str_field(input, "product_id"),
            input.get("currency").and_then(Value::as_str),
        ),
        "get_shipments" => urls.build_get_shipments(
            token,
            &ShipmentQuery {
                product_id: str_field(input, "product_id"),
                warehouse: str_field(input, "warehouse"),
                country: str_field(input, "country"),
                poa_id: str_field(input, "poa_id"),
                currency: str_field(input, "currency"),
                quantity: u32_field(input, "quantity"),
            },
        ),
        "get_order_info" => urls.build_get_order_info(token, str_field(input, "sale_record_id")),
        "get_track_info" => urls.build_get_track_info(token, str_field(input, "order_id")),
        "get_order_history" => urls.build_get_order_history(
            token,
            str_field(input, "sale_record_id"),
            str_field(input, "order_id"),
        ),
        "get_countries" => urls.build_get_countries(token),
        "get_stock" => urls.build_get_stock(token, str_field(input, "product_id")),
        "get_product_update_list" => {
            urls.build_get_product_update_list(token, u32_field(input, "minutes"), u32_field(input, "page"))
        }
        "get_limit_price_brand" => urls.build_get_limit_price_brand(token, u32_field(input, "page")),
        "get_brand_limit_price_list" => urls.build_get_brand_limit_price_list(
            token,
            str_field(input, "brand_id"),
            u32_field(input, "page"),
        ),
        other => panic!("unknown operation: {other}"),
    }
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/urls.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let base_url = str_field(&vectors, "base_url");
    let config = ClientConfig::new(str_field(&vectors, "app_id"), str_field(&vectors, "app_secret"))
        .with_base_url(base_url);
    let urls = UrlBuilder::new(&config);

    for case in vectors["cases"].as_array().unwrap() {
        let name = str_field(case, "name");
        let req = build(&urls, str_field(case, "operation"), &case["input"]);
        assert_eq!(
            req.url,
            format!("{base_url}{}", str_field(case, "expected_url")),
            "{name}: url"
        );
        assert!(!req.url.contains("=&&"), "{name}: empty optional fragment");
    }
}

#[test]
fn every_operation_has_a_url_vector() {
    let raw = include_str!("../../test-vectors/urls.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let covered: Vec<&str> = vectors["cases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|case| str_field(case, "operation"))
        .collect();

    for operation in [
        "get_access_token",
        "translate",
        "get_product_price",
        "get_category_list",
        "get_product_list",
        "get_product_info",
        "get_shipments",
        "get_order_info",
        "get_track_info",
        "get_order_history",
        "get_countries",
        "get_stock",
        "get_product_update_list",
        "get_limit_price_brand",
        "get_brand_limit_price_list",
    ] {
        assert!(covered.contains(&operation), "no vector for {operation}");
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn decode_as<T: DeserializeOwned + Serialize>(response: &HttpResponse) -> Result<Value, ApiError> {
    parse_response::<T>(response).map(|decoded| serde_json::to_value(decoded).unwrap())
}

#[test]
fn decode_test_vectors() {
    let raw = include_str!("../../test-vectors/decode.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = str_field(case, "name");
        let response = HttpResponse::new(200, str_field(case, "body"));

        let result = match str_field(case, "type") {
            "GetCategoryListResponse" => decode_as::<GetCategoryListResponse>(&response),
            "GetProductListResponse" => decode_as::<GetProductListResponse>(&response),
            "GetAccessTokenResponse" => decode_as::<GetAccessTokenResponse>(&response),
            "GetStockResponse" => decode_as::<GetStockResponse>(&response),
            "GetOrderHistoryResponse" => decode_as::<GetOrderHistoryResponse>(&response),
            "GetCountriesResponse" => decode_as::<GetCountriesResponse>(&response),
            "GetProductUpdateListResponse" => decode_as::<GetProductUpdateListResponse>(&response),
            "GetLimitPriceBrandResponse" => decode_as::<GetLimitPriceBrandResponse>(&response),
            "GetBrandLimitPriceListResponse" => decode_as::<GetBrandLimitPriceListResponse>(&response),
            "ImportOrderResponse" => decode_as::<ImportOrderResponse>(&response),
            "GetShipmentsResponse" => decode_as::<GetShipmentsResponse>(&response),
            "GetTrackInfoResponse" => decode_as::<GetTrackInfoResponse>(&response),
            "GetProductPriceResponse" => decode_as::<GetProductPriceResponse>(&response),
            "TranslateResponse" => decode_as::<TranslateResponse>(&response),
            other => panic!("{name}: unknown type {other}"),
        };

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Decode" => assert!(matches!(err, ApiError::Decode { .. }), "{name}: expected Decode"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert_eq!(result.unwrap(), case["expected"], "{name}: decoded value");
        }
    }
}

#[test]
fn decode_error_keeps_non_utf8_body_as_text() {
    let response = HttpResponse::new(502, b"\xff\xfe<html>\xc0\xc1 maintenance</html>".to_vec());
    match parse_response::<GetCountriesResponse>(&response) {
        Err(ApiError::Decode { body, .. }) => {
            assert!(body.contains("<html>"));
            assert!(body.contains("maintenance"));
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}
