//! Checkouts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::orders::models::{Checkout, CheckoutUuid, OrderUuid, PaymentStatus};

use super::orders::{try_get_db_amount, try_into_db_amount};

const CREATE_CHECKOUT_SQL: &str = include_str!("../sql/create_checkout.sql");
const GET_CHECKOUT_FOR_ORDER_SQL: &str = include_str!("../sql/get_checkout_for_order.sql");
const MARK_CHECKOUT_PAID_SQL: &str = include_str!("../sql/mark_checkout_paid.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckoutsRepository;

impl PgCheckoutsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_checkout(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkout: CheckoutUuid,
        order: OrderUuid,
        total: u64,
    ) -> Result<Checkout, sqlx::Error> {
        query_as::<Postgres, Checkout>(CREATE_CHECKOUT_SQL)
            .bind(checkout.into_uuid())
            .bind(order.into_uuid())
            .bind(try_into_db_amount(total)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_checkout_for_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Checkout, sqlx::Error> {
        query_as::<Postgres, Checkout>(GET_CHECKOUT_FOR_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn mark_checkout_paid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        method: &str,
        transaction_id: &str,
    ) -> Result<Checkout, sqlx::Error> {
        query_as::<Postgres, Checkout>(MARK_CHECKOUT_PAID_SQL)
            .bind(order.into_uuid())
            .bind(method)
            .bind(transaction_id)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Checkout {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let payment_status: String = row.try_get("payment_status")?;
        let payment_status =
            payment_status
                .parse::<PaymentStatus>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "payment_status".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            uuid: CheckoutUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            payment_status,
            payment_method: row.try_get("payment_method")?,
            transaction_id: row.try_get("transaction_id")?,
            total: try_get_db_amount(row, "total")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
