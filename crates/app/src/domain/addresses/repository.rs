//! Addresses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    addresses::models::{Address, AddressUpdate, AddressUuid, NewAddress},
    users::models::UserUuid,
};

const FIND_ADDRESS_FOR_USER_SQL: &str = include_str!("sql/find_address_for_user.sql");
const CREATE_ADDRESS_SQL: &str = include_str!("sql/create_address.sql");
const UPDATE_ADDRESS_SQL: &str = include_str!("sql/update_address.sql");
const DELETE_ADDRESS_SQL: &str = include_str!("sql/delete_address.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAddressesRepository;

impl PgAddressesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// The user's first-entered address, if any.
    pub(crate) async fn find_address_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<Address>, sqlx::Error> {
        query_as::<Postgres, Address>(FIND_ADDRESS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        address: &NewAddress,
    ) -> Result<Address, sqlx::Error> {
        query_as::<Postgres, Address>(CREATE_ADDRESS_SQL)
            .bind(address.uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(&address.country)
            .bind(&address.first_name)
            .bind(&address.last_name)
            .bind(&address.company)
            .bind(&address.street_address)
            .bind(&address.apartment)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.postcode)
            .bind(&address.email)
            .bind(&address.phone)
            .bind(&address.order_notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: AddressUuid,
        user: UserUuid,
        update: &AddressUpdate,
    ) -> Result<Option<Address>, sqlx::Error> {
        query_as::<Postgres, Address>(UPDATE_ADDRESS_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(&update.country)
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(&update.company)
            .bind(&update.street_address)
            .bind(&update.apartment)
            .bind(&update.city)
            .bind(&update.state)
            .bind(&update.postcode)
            .bind(&update.email)
            .bind(&update.phone)
            .bind(&update.order_notes)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: AddressUuid,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ADDRESS_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Address {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AddressUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            country: row.try_get("country")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            company: row.try_get("company")?,
            street_address: row.try_get("street_address")?,
            apartment: row.try_get("apartment")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            postcode: row.try_get("postcode")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            order_notes: row.try_get("order_notes")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
