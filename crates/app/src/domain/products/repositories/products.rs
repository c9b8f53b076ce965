//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::products::models::{
    CategoryUuid, NewProduct, Product, ProductFilter, ProductUpdate, ProductUuid,
};

const LIST_PRODUCTS_SQL: &str = include_str!("../sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("../sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("../sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("../sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("../sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(filter.search.as_deref())
            .bind(filter.category_uuid.map(CategoryUuid::into_uuid))
            .bind(filter.featured_only)
            .bind(filter.sort.as_str())
            .bind(filter.limit.map(i64::from))
            .bind(filter.offset.map(i64::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.category_uuid.map(CategoryUuid::into_uuid))
            .bind(&product.title)
            .bind(&product.description)
            .bind(&product.sku)
            .bind(try_into_db_amount(product.price)?)
            .bind(product.on_sale)
            .bind(product.sale_price.map(try_into_db_amount).transpose()?)
            .bind(i64::from(product.stock_quantity))
            .bind(product.is_featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.category_uuid.map(CategoryUuid::into_uuid))
            .bind(&update.title)
            .bind(&update.description)
            .bind(&update.sku)
            .bind(try_into_db_amount(update.price)?)
            .bind(update.on_sale)
            .bind(update.sale_price.map(try_into_db_amount).transpose()?)
            .bind(i64::from(update.stock_quantity))
            .bind(update.is_featured)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn try_into_db_amount(amount: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = try_get_db_amount(row, "price")?;

        let sale_price = row
            .try_get::<Option<i64>, _>("sale_price")?
            .map(|value| {
                u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "sale_price".to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        let stock_i64: i64 = row.try_get::<i32, _>("stock_quantity")?.into();

        let stock_quantity =
            u32::try_from(stock_i64).map_err(|e| sqlx::Error::ColumnDecode {
                index: "stock_quantity".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: row
                .try_get::<Option<Uuid>, _>("category_uuid")?
                .map(CategoryUuid::from_uuid),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            sku: row.try_get("sku")?,
            price,
            on_sale: row.try_get("on_sale")?,
            sale_price,
            stock_quantity,
            is_featured: row.try_get("is_featured")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

fn try_get_db_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
