//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{
            Category, NewCategory, NewProduct, Product, ProductFilter, ProductUpdate, ProductUuid,
        },
        repositories::{PgCategoriesRepository, PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    products_repository: PgProductsRepository,
    categories_repository: PgCategoriesRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products_repository: PgProductsRepository::new(),
            categories_repository: PgCategoriesRepository::new(),
        }
    }
}

/// Normalize the sale fields of an incoming product.
///
/// A sale price below the base price switches the product on sale even when
/// the caller forgot the flag. A sale price at or above the base price, or
/// an on-sale product without one, is rejected outright.
fn normalize_sale_pricing(
    price: u64,
    on_sale: bool,
    sale_price: Option<u64>,
) -> Result<(bool, Option<u64>), ProductsServiceError> {
    match sale_price {
        None if on_sale => Err(ProductsServiceError::InvalidSalePrice),
        None => Ok((false, None)),
        Some(sale_price) if sale_price >= price => Err(ProductsServiceError::InvalidSalePrice),
        Some(sale_price) => Ok((true, Some(sale_price))),
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.products_repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.products_repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_uuid = %product.uuid),
        err
    )]
    async fn create_product(
        &self,
        mut product: NewProduct,
    ) -> Result<Product, ProductsServiceError> {
        (product.on_sale, product.sale_price) =
            normalize_sale_pricing(product.price, product.on_sale, product.sale_price)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .products_repository
            .create_product(&mut tx, &product)
            .await?;

        tx.commit().await?;

        info!(product_uuid = %created.uuid, sku = %created.sku, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(product_uuid = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductUuid,
        mut update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        (update.on_sale, update.sale_price) =
            normalize_sale_pricing(update.price, update.on_sale, update.sale_price)?;

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .products_repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .products_repository
            .delete_product(&mut tx, product)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.categories_repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .categories_repository
            .create_category(&mut tx, &category)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves the live catalog, filtered and sorted.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single live product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new product, normalizing its sale fields.
    async fn create_product(&self, product: NewProduct)
    -> Result<Product, ProductsServiceError>;

    /// Updates a product, normalizing its sale fields.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Withdraws a product from the catalog.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Retrieves all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, ProductsServiceError>;

    /// Creates a new category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, ProductsServiceError>;
}
