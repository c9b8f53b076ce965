//! Update Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*, products::errors::into_status_error, products::get::ProductResponse,
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub category_uuid: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub sku: String,
    pub price: u64,
    #[serde(default)]
    pub on_sale: bool,
    pub sale_price: Option<u64>,
    pub stock_quantity: u32,
    #[serde(default)]
    pub is_featured: bool,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            category_uuid: request.category_uuid.map(Into::into),
            title: request.title,
            description: request.description,
            sku: request.sku,
            price: request.price,
            on_sale: request.on_sale,
            sale_price: request.sale_price,
            stock_quantity: request.stock_quantity,
            is_featured: request.is_featured,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("user_header" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Sale price not below base price"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();

    let updated = state
        .app
        .products
        .update_product(product.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    Ok(Json(updated.into()))
}
