//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakeshop_app::domain::products::models::Category;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// The category name
    pub name: String,

    /// The date and time the category was created
    pub created_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            created_at: category.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// The list of categories
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns all categories.
#[endpoint(
    tags("categories"),
    summary = "List Categories",
    security(("user_header" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .products
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bakeshop_app::domain::products::{
        MockProductsService,
        models::{Category, CategoryUuid},
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_categories().once().return_once(move || {
            Ok(vec![Category {
                uuid,
                name: "Sweet".to_string(),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            }])
        });

        let response: CategoriesResponse = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.categories.len(), 1, "expected one category");
        assert_eq!(response.categories[0].name, "Sweet");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let response: CategoriesResponse = TestClient::get("http://example.com/categories")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.categories.is_empty());

        Ok(())
    }
}
