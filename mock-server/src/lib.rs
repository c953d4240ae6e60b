//! In-process imitation of the Banggood dropshipping API.
//!
//! Serves canned payloads on the vendor's paths. Category and product
//! listings are paginated so page walking can be exercised end to end. A few
//! magic inputs trigger failure modes: the access token `garbage` makes every
//! endpoint answer with a non-JSON body, and app secret `wrong` is rejected
//! with an in-body vendor error.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;
use uuid::Uuid;

pub const CATEGORY_PAGE_SIZE: usize = 2;
pub const PRODUCT_PAGE_SIZE: usize = 3;

type Params = Query<HashMap<String, String>>;

pub fn app() -> Router {
    Router::new()
        .route("/getAccessToken", get(access_token))
        .route("/product/Translate", get(translate))
        .route("/product/GetProductPrice", get(product_price))
        .route("/category/getCategoryList", get(category_list))
        .route("/product/getProductList", get(product_list))
        .route("/product/getProductInfo", get(product_info))
        .route("/product/getShipments", get(shipments))
        .route("/order/getOrderInfo", get(order_info))
        .route("/getTrackInfo", get(track_info))
        .route("/getOrderHistory", get(order_history))
        .route("/common/getCountries", get(countries))
        .route("/product/getStocks", get(stocks))
        .route("/product/getProductUpdateList", get(product_update_list))
        .route("/product/getLimitPriceBrand", get(limit_price_brand))
        .route("/product/getBrandLimitPriceList", get(brand_limit_price_list))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Category fixtures as `(cat_id, cat_name, parent_id)`.
pub fn categories() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("1", "Electronics", "0"),
        ("2", "Phones", "1"),
        ("3", "Tablets", "1"),
        ("4", "Home and Garden", "0"),
        ("5", "Lighting", "4"),
    ]
}

/// Product ids listed under any category.
pub fn product_ids() -> Vec<String> {
    (1..=7).map(|n| format!("P{n:03}")).collect()
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or_default()
}

fn page_param(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|p| p.parse().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

fn page_total(len: usize, size: usize) -> usize {
    len.div_ceil(size)
}

/// Respond with `body`, unless the caller used the `garbage` token.
fn reply(params: &HashMap<String, String>, body: Value) -> Response {
    if param(params, "access_token") == "garbage" {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    Json(body).into_response()
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub app_id: String,
    pub app_secret: String,
}

async fn access_token(Query(credentials): Query<Credentials>) -> Json<Value> {
    if credentials.app_secret == "wrong" {
        return Json(json!({ "code": 11020, "msg": "app_secret is invalid" }));
    }
    debug!(app_id = %credentials.app_id, "issuing access token");
    Json(json!({
        "code": 0,
        "access_token": Uuid::new_v4().simple().to_string(),
        "expires_in": 7200,
    }))
}

async fn translate(Query(params): Params) -> Response {
    reply(&params, json!({}))
}

async fn product_price(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "TranslatedText": format!("price for {}", param(&params, "product_id")),
            "error": 0,
            "errMsg": "",
        }),
    )
}

async fn category_list(Query(params): Params) -> Response {
    let all = categories();
    let page = page_param(&params);
    debug!(page, "category list");
    let list: Vec<Value> = all
        .iter()
        .skip((page - 1).saturating_mul(CATEGORY_PAGE_SIZE))
        .take(CATEGORY_PAGE_SIZE)
        .map(|(id, name, parent)| json!({ "cat_id": id, "cat_name": name, "parent_id": parent }))
        .collect();
    reply(
        &params,
        json!({
            "code": 0,
            "cat_total": all.len(),
            "lang": param(&params, "lang"),
            "page": page,
            "page_total": page_total(all.len(), CATEGORY_PAGE_SIZE),
            "page_size": CATEGORY_PAGE_SIZE,
            "cat_list": list,
        }),
    )
}

async fn product_list(Query(params): Params) -> Response {
    let all = product_ids();
    let page = page_param(&params);
    let cat_id: i64 = param(&params, "cat_id").parse().unwrap_or(0);
    let list: Vec<Value> = all
        .iter()
        .skip((page - 1).saturating_mul(PRODUCT_PAGE_SIZE))
        .take(PRODUCT_PAGE_SIZE)
        .map(|id| {
            json!({
                "product_id": id,
                "cat_id": cat_id,
                "product_name": format!("Product {id}"),
                "img": format!("https://img.example/{id}.jpg"),
                "meta_desc": "",
                "add_date": "2020-01-01 00:00:00",
                "modify_date": param(&params, "modify_date_start"),
            })
        })
        .collect();
    reply(
        &params,
        json!({
            "code": 0,
            "product_total": all.len(),
            "lang": param(&params, "lang"),
            "page": page,
            "page_total": page_total(all.len(), PRODUCT_PAGE_SIZE),
            "page_size": PRODUCT_PAGE_SIZE,
            "product_list": list,
        }),
    )
}

async fn product_info(Query(params): Params) -> Response {
    let currency = params.get("currency").map(String::as_str).unwrap_or("USD");
    reply(
        &params,
        json!({
            "code": 0,
            "lang": "en",
            "product_name": format!("Product {}", param(&params, "product_id")),
            "description": format!("priced in {currency}"),
            "weight": 320,
            "poa_list": [{
                "option_id": "10",
                "option_name": "Color",
                "option_values": [
                    { "poa_id": "1001", "poa_name": "Red", "poa": "Red", "poa_price": 0.0 },
                    { "poa_id": "1002", "poa_name": "Blue", "poa": "Blue", "poa_price": 1.5 },
                ],
            }],
            "warehouse_list": [{ "warehouse": "CN", "warehouse_price": 12.99 }],
            "image_list": [{ "home": "home.jpg", "large": "large.jpg" }],
        }),
    )
}

async fn shipments(Query(params): Params) -> Response {
    let quantity: u32 = param(&params, "quantity").parse().unwrap_or(0);
    reply(
        &params,
        json!({
            "code": 0,
            "currency": param(&params, "currency"),
            "shipmethodcode": "airmail_airmail",
            "shipmethodname": "Air Parcel Register",
            "shipday": "10-25",
            "shipfee": format!("{:.2}", 1.1 * f64::from(quantity)),
        }),
    )
}

async fn order_info(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": 0,
            "sale_record_id_list": [{
                "sale_record_id": param(&params, "sale_record_id"),
                "order_list": [{
                    "order_id": "88001",
                    "status": "Processing",
                    "total_amount": 21.4,
                    "currency": "USD",
                    "shipment_method": "airmail_airmail",
                    "sub_amount": 20.0,
                    "ds_discount": 0.5,
                    "shipfee": 1.9,
                    "product_list": [{ "product_id": "P001", "warehouse": ["CN"], "quantity": 2, "poa_id": "1001" }],
                }],
                "user_info": [{ "delivery_name": "Test Buyer", "delivery_country": "DE" }],
            }],
        }),
    )
}

async fn track_info(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": "0",
            "track_info": [
                { "event": "Accepted", "time": "2020-03-01 10:00:00" },
                { "event": format!("Departed for order {}", param(&params, "order_id")), "time": "2020-03-02 08:30:00" },
            ],
        }),
    )
}

async fn order_history(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": "0",
            "track_number": format!("TN-{}", param(&params, "order_id")),
            "order_history": [
                { "status": "Pending", "date_add": "2020-03-01 09:00:00" },
                { "status": "Shipped", "date_add": "2020-03-02 08:30:00" },
            ],
        }),
    )
}

async fn countries(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": 0,
            "countries": [
                { "country_id": 81, "country_name": "Germany" },
                { "country_id": 223, "country_name": "United States" },
            ],
        }),
    )
}

async fn stocks(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": "0",
            "lang": param(&params, "lang"),
            "stocks": [{
                "warehouse": "CN",
                "stocks_list": [{ "poa_id": 1001, "poa": "Red", "stock": "35", "stocks_msg": "In stock" }],
            }],
        }),
    )
}

async fn product_update_list(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": 0,
            "lang": param(&params, "lang"),
            "product_total": 1,
            "page": page_param(&params),
            "page_total": 1,
            "page_size": 20,
            "update_product_list": [
                { "product_id": "P002", "state": 1, "modify_date": "2020-03-01 12:00:00" },
            ],
        }),
    )
}

async fn limit_price_brand(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": 0,
            "brand_total": 1,
            "page": page_param(&params),
            "page_total": 1,
            "page_size": 20,
            "brand_list": [{ "brand_id": "B1", "name": "Acme" }],
        }),
    )
}

async fn brand_limit_price_list(Query(params): Params) -> Response {
    reply(
        &params,
        json!({
            "code": 0,
            "product_total": 1,
            "page": page_param(&params),
            "page_total": 1,
            "page_size": 20,
            "product_list": [{
                "product_id": format!("{}-P1", param(&params, "brand_id")),
                "sku": "SKU1",
                "poa": "",
                "limit_price": "9.99",
            }],
        }),
    )
}
