//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use bakeshop::PricingPolicy;
use mockall::automock;
use tracing::{Span, info};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        addresses::PgAddressesRepository,
        carts::{
            PgCartItemsRepository, PgCartsRepository,
            models::subtotal_of,
        },
        orders::{
            errors::OrdersServiceError,
            models::{
                Checkout, CheckoutUuid, Order, OrderDetails, OrderUuid, PaymentStatus, Placement,
                PlacementOutcome,
            },
            repositories::{NewOrderRow, PgCheckoutsRepository, PgOrdersRepository},
        },
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    pricing: Arc<dyn PricingPolicy>,
    system_owner: UserUuid,
    orders_repository: PgOrdersRepository,
    checkouts_repository: PgCheckoutsRepository,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
    addresses_repository: PgAddressesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, pricing: Arc<dyn PricingPolicy>, system_owner: UserUuid) -> Self {
        Self {
            db,
            pricing,
            system_owner,
            orders_repository: PgOrdersRepository::new(),
            checkouts_repository: PgCheckoutsRepository::new(),
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
            addresses_repository: PgAddressesRepository::new(),
        }
    }
}

fn generate_transaction_id() -> String {
    format!("txn_{}", Uuid::now_v7().simple())
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.place_order",
        skip(self),
        fields(user_uuid = %user, order_uuid = tracing::field::Empty),
        err
    )]
    async fn place_order(&self, user: UserUuid) -> Result<Placement, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let address = self
            .addresses_repository
            .find_address_for_user(&mut tx, user)
            .await?;

        let Some(address) = address else {
            return Err(OrdersServiceError::MissingAddress);
        };

        // Most recent cart wins when the creation race left more than one.
        let carts = self.carts_repository.find_carts_for_user(&mut tx, user).await?;

        let Some(cart) = carts.into_iter().next() else {
            // The cart was already detached by an earlier checkout; resume
            // the pending order it produced.
            let pending = self
                .orders_repository
                .find_pending_order_for_user(&mut tx, user)
                .await?;

            tx.commit().await?;

            return pending
                .map(|order| Placement {
                    order,
                    outcome: PlacementOutcome::Resumed,
                })
                .ok_or(OrdersServiceError::NoCartAvailable);
        };

        let items = self
            .items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        if items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let quote = self.pricing.quote(subtotal_of(&items))?;

        let order = self
            .orders_repository
            .create_order(
                &mut tx,
                &NewOrderRow {
                    uuid: OrderUuid::new(),
                    user_uuid: user,
                    cart_uuid: cart.uuid,
                    address_uuid: address.uuid,
                    subtotal: quote.subtotal,
                    shipping: quote.shipping,
                    discount: quote.discount,
                    total: quote.total,
                },
            )
            .await?;

        let span = Span::current();
        span.record("order_uuid", tracing::field::display(order.uuid));

        self.checkouts_repository
            .create_checkout(&mut tx, CheckoutUuid::new(), order.uuid, order.total)
            .await?;

        // Detaching the cart and creating the order commit together or not
        // at all; a cart left behind with an order against it would allow a
        // second checkout.
        self.carts_repository
            .reassign_cart(&mut tx, cart.uuid, self.system_owner)
            .await?;

        tx.commit().await?;

        info!(order_uuid = %order.uuid, total = order.total, "placed order");

        Ok(Placement {
            order,
            outcome: PlacementOutcome::Placed,
        })
    }

    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self.orders_repository.get_order(&mut tx, order, user).await?;

        let items = self
            .items_repository
            .get_cart_items(&mut tx, order.cart_uuid)
            .await?;

        let checkout = self
            .checkouts_repository
            .get_checkout_for_order(&mut tx, order.uuid)
            .await?;

        tx.commit().await?;

        Ok(OrderDetails {
            order,
            items,
            checkout,
        })
    }

    async fn list_orders(&self, user: UserUuid) -> Result<Vec<Order>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let orders = self.orders_repository.list_orders(&mut tx, user).await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.process_payment",
        skip(self, method),
        fields(user_uuid = %user, order_uuid = %order),
        err
    )]
    async fn process_payment(
        &self,
        user: UserUuid,
        order: OrderUuid,
        method: String,
    ) -> Result<Checkout, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self.orders_repository.get_order(&mut tx, order, user).await?;

        let checkout = self
            .checkouts_repository
            .get_checkout_for_order(&mut tx, order.uuid)
            .await?;

        if checkout.payment_status == PaymentStatus::Paid {
            return Err(OrdersServiceError::AlreadyPaid);
        }

        let transaction_id = generate_transaction_id();

        let paid = self
            .checkouts_repository
            .mark_checkout_paid(&mut tx, order.uuid, &method, &transaction_id)
            .await?;

        tx.commit().await?;

        info!(order_uuid = %order.uuid, "processed payment");

        Ok(paid)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the user's cart into an order, detaching the cart.
    ///
    /// Re-running after a success resumes the pending order the detached
    /// cart produced; the outcome on the placement says which happened.
    async fn place_order(&self, user: UserUuid) -> Result<Placement, OrdersServiceError>;

    /// Retrieve one of the user's orders with its lines and payment state.
    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<OrderDetails, OrdersServiceError>;

    /// The user's order history, most recently placed first.
    async fn list_orders(&self, user: UserUuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Mark an order's checkout as paid with a synthetic transaction id.
    async fn process_payment(
        &self,
        user: UserUuid,
        order: OrderUuid,
        method: String,
    ) -> Result<Checkout, OrdersServiceError>;
}
