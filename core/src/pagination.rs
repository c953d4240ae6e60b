//! Exhaustive listing over the vendor's paged endpoints.
//!
//! # Design
//! The aggregators request pages 1, 2, ... and concatenate the items in page
//! order. They stop once the response reports `page >= page_total`. A page
//! number that does not move forward is treated as a broken listing and
//! fails with `ApiError::PaginationStalled`, so a misbehaving vendor cannot
//! keep the loop running forever.
//!
//! The first error ends the run and discards everything collected so far.
//! Aggregators run under a detached `RequestContext::background()`; only the
//! transport timeout bounds each page.

use tracing::debug;

use crate::client::BanggoodClient;
use crate::error::ApiError;
use crate::http::{RequestContext, Transport};
use crate::types::{Category, Page, Product};
use crate::url::ProductListFilter;

const FIRST_PAGE: u32 = 1;

fn collect_pages<R, I>(
    operation: &'static str,
    mut fetch: impl FnMut(u32) -> Result<R, ApiError>,
    split: impl Fn(R) -> (Page, Vec<I>),
) -> Result<Vec<I>, ApiError> {
    let mut items = Vec::new();
    let mut requested = FIRST_PAGE;
    let mut previous = 0;

    loop {
        let (page, batch) = split(fetch(requested)?);
        debug!(
            operation,
            requested,
            page = page.page_number,
            page_total = page.page_total,
            items = batch.len(),
            "fetched page"
        );
        items.extend(batch);

        if page.is_last() {
            return Ok(items);
        }
        if page.page_number <= previous {
            return Err(ApiError::PaginationStalled {
                operation,
                page: page.page_number,
                page_total: page.page_total,
            });
        }
        previous = page.page_number;
        requested += 1;
    }
}

impl<T: Transport> BanggoodClient<T> {
    /// Every category, across all pages.
    pub fn get_all_categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        let ctx = RequestContext::background();
        collect_pages(
            "getCategoryList",
            |page| self.get_category_list(&ctx, token, Some(page)),
            |response| (response.page, response.category_list),
        )
    }

    /// Every product of `category_id` matching `filter`, across all pages.
    pub fn get_all_products(
        &self,
        token: &str,
        category_id: &str,
        filter: &ProductListFilter,
    ) -> Result<Vec<Product>, ApiError> {
        let ctx = RequestContext::background();
        collect_pages(
            "getProductList",
            |page| self.get_product_list(&ctx, token, category_id, filter, Some(page)),
            |response| (response.page, response.product_list),
        )
    }
}
