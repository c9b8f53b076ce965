//! Addresses service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        addresses::{
            errors::AddressesServiceError,
            models::{Address, AddressUpdate, AddressUuid, NewAddress},
            repository::PgAddressesRepository,
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgAddressesService {
    db: Db,
    addresses_repository: PgAddressesRepository,
}

impl PgAddressesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            addresses_repository: PgAddressesRepository::new(),
        }
    }
}

#[async_trait]
impl AddressesService for PgAddressesService {
    async fn address_for_user(&self, user: UserUuid) -> Result<Address, AddressesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let address = self
            .addresses_repository
            .find_address_for_user(&mut tx, user)
            .await?;

        tx.commit().await?;

        address.ok_or(AddressesServiceError::NotFound)
    }

    async fn create_address(
        &self,
        user: UserUuid,
        address: NewAddress,
    ) -> Result<Address, AddressesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .addresses_repository
            .create_address(&mut tx, user, &address)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_address(
        &self,
        user: UserUuid,
        uuid: AddressUuid,
        update: AddressUpdate,
    ) -> Result<Address, AddressesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .addresses_repository
            .update_address(&mut tx, uuid, user, &update)
            .await?;

        let Some(updated) = updated else {
            return Err(AddressesServiceError::NotFound);
        };

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_address(
        &self,
        user: UserUuid,
        uuid: AddressUuid,
    ) -> Result<(), AddressesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .addresses_repository
            .delete_address(&mut tx, uuid, user)
            .await?;

        if rows_affected == 0 {
            return Err(AddressesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// The user's first-entered address.
    async fn address_for_user(&self, user: UserUuid) -> Result<Address, AddressesServiceError>;

    /// Stores a new address for the user.
    async fn create_address(
        &self,
        user: UserUuid,
        address: NewAddress,
    ) -> Result<Address, AddressesServiceError>;

    /// Updates an address the user owns.
    async fn update_address(
        &self,
        user: UserUuid,
        uuid: AddressUuid,
        update: AddressUpdate,
    ) -> Result<Address, AddressesServiceError>;

    /// Deletes an address the user owns.
    async fn delete_address(
        &self,
        user: UserUuid,
        uuid: AddressUuid,
    ) -> Result<(), AddressesServiceError>;
}
