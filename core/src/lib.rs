//! Typed blocking client for the Banggood dropshipping API.
//!
//! # Overview
//! One method per vendor endpoint: authentication, category and product
//! catalog, pricing, shipments, orders and tracking, stock, and brand price
//! limits. Each method builds a query-string URL, performs one GET and decodes
//! the JSON body into a typed response.
//!
//! # Design
//! - `UrlBuilder` is pure: it turns typed parameters into an `HttpRequest`.
//! - `Transport` is the only place that does I/O. `UreqTransport` is the
//!   default; tests substitute their own.
//! - `BanggoodClient` holds no mutable state and can be shared across threads.
//!   Each call takes the caller's `RequestContext` for its deadline.
//! - `get_all_categories` / `get_all_products` walk every page of a listing.
//! - Vendor status fields (`code`, `errMsg`) are decoded, never interpreted.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pagination;
pub mod types;
pub mod url;

pub use crate::client::{parse_response, BanggoodClient};
pub use crate::config::{ClientConfig, Environment};
pub use crate::error::ApiError;
pub use crate::http::{HttpRequest, HttpResponse, RequestContext, Transport, UreqTransport};
pub use crate::types::*;
pub use crate::url::{PriceQuery, ProductListFilter, ShipmentQuery, UrlBuilder};
