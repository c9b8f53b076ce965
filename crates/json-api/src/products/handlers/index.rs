//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::products::models::{ProductFilter, ProductSort};

use crate::{
    extensions::*, products::errors::into_status_error, products::get::ProductResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns the live catalog, filtered and sorted.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("user_header" = []))
)]
#[expect(
    clippy::too_many_arguments,
    reason = "each catalog filter arrives as its own query parameter"
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    category: QueryParam<Uuid, false>,
    featured: QueryParam<bool, false>,
    sort: QueryParam<String, false>,
    limit: QueryParam<u32, false>,
    offset: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sort = match sort.into_inner() {
        Some(value) => value
            .parse::<ProductSort>()
            .map_err(|_ignored| StatusError::bad_request().brief("Unrecognized sort"))?,
        None => ProductSort::default(),
    };

    let filter = ProductFilter {
        search: search.into_inner(),
        category_uuid: category.into_inner().map(Into::into),
        featured_only: featured.into_inner().unwrap_or(false),
        sort,
        limit: limit.into_inner(),
        offset: offset.into_inner(),
    };

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
