//! Get Product Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::products::models::Product;

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// The category the product belongs to
    pub category_uuid: Option<Uuid>,

    /// The product title
    pub title: String,

    /// The product description
    pub description: String,

    /// The stock keeping unit
    pub sku: String,

    /// The base price in minor units
    pub price: u64,

    /// Whether the sale price is active
    pub on_sale: bool,

    /// The sale price in minor units, when one is set
    pub sale_price: Option<u64>,

    /// The price a buyer pays right now
    pub effective_price: u64,

    /// Units in stock
    pub stock_quantity: u32,

    /// Whether the product is featured on the storefront
    pub is_featured: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let effective_price = product.effective_price();

        ProductResponse {
            uuid: product.uuid.into(),
            category_uuid: product.category_uuid.map(Into::into),
            title: product.title,
            description: product.description,
            sku: product.sku,
            price: product.price,
            on_sale: product.on_sale,
            sale_price: product.sale_price,
            effective_price,
            stock_quantity: product.stock_quantity,
            is_featured: product.is_featured,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("user_header" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
