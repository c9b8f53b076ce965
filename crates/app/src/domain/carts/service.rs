//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use bakeshop::PricingPolicy;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartItemUuid, CartSummary, CartUuid, subtotal_of},
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        products::models::ProductUuid,
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    pricing: Arc<dyn PricingPolicy>,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db, pricing: Arc<dyn PricingPolicy>) -> Self {
        Self {
            db,
            pricing,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }

    /// Returns the user's cart, creating one when none exists.
    ///
    /// Concurrent first requests can race to create two carts; that race is
    /// accepted, so a lookup finding several carts reports the broken
    /// invariant instead of repairing it.
    async fn get_or_create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut carts = self.carts_repository.find_carts_for_user(tx, user).await?;

        if carts.len() > 1 {
            return Err(CartsServiceError::MultipleCarts);
        }

        match carts.pop() {
            Some(cart) => Ok(cart),
            None => Ok(self
                .carts_repository
                .create_cart(tx, CartUuid::new(), user)
                .await?),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_or_create_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self.get_or_create(&mut tx, user).await?;

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_transaction().await?;

        let mut cart = self.get_or_create(&mut tx, user).await?;

        let lines = self
            .items_repository
            .find_line_uuids(&mut tx, cart.uuid, product)
            .await?;

        match lines.first() {
            // Last write wins: an existing line gets the new quantity,
            // it is never incremented.
            Some(&line) => {
                self.items_repository
                    .update_item_quantity(&mut tx, line, quantity)
                    .await?;
            }
            None => {
                let created = self
                    .items_repository
                    .create_cart_item(&mut tx, CartItemUuid::new(), cart.uuid, product, quantity)
                    .await?;

                if created.is_none() {
                    return Err(CartsServiceError::NotFound);
                }
            }
        }

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn update_item_quantity(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<u64, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_transaction().await?;

        let found = self
            .items_repository
            .find_items_for_user(&mut tx, item, user)
            .await?;

        if found.len() > 1 {
            return Err(CartsServiceError::AmbiguousItem);
        }

        let Some(&item) = found.first() else {
            return Err(CartsServiceError::ItemNotFound);
        };

        self.items_repository
            .update_item_quantity(&mut tx, item, quantity)
            .await?;

        let updated = self.items_repository.get_cart_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(updated.line_total())
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        // Removal is idempotent: a missing cart or item is not an error.
        self.items_repository
            .delete_cart_item(&mut tx, item, user)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn cart_summary(&self, user: UserUuid) -> Result<CartSummary, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut carts = self.carts_repository.find_carts_for_user(&mut tx, user).await?;

        if carts.len() > 1 {
            return Err(CartsServiceError::MultipleCarts);
        }

        let Some(mut cart) = carts.pop() else {
            return Err(CartsServiceError::NotFound);
        };

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        let quote = self.pricing.quote(subtotal_of(&cart.items))?;

        Ok(CartSummary {
            cart,
            subtotal: quote.subtotal,
            shipping: quote.shipping,
            discount: quote.discount,
            total: quote.total,
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart, creating an empty one when none exists.
    async fn get_or_create_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Put a product in the user's cart. An existing line for the product
    /// has its quantity replaced.
    async fn add_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;

    /// Set the quantity of a cart line, returning its new line total.
    async fn update_item_quantity(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<u64, CartsServiceError>;

    /// Remove a cart line. Removing an unknown line succeeds.
    async fn remove_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError>;

    /// The user's cart with its lines and quoted totals.
    async fn cart_summary(&self, user: UserUuid) -> Result<CartSummary, CartsServiceError>;
}
