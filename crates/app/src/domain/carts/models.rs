//! Cart models.

use jiff::Timestamp;

use crate::{
    domain::{products::models::ProductUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

pub type CartUuid = TypedUuid<Cart>;

/// An open basket belonging to a shopper.
///
/// Carts survive checkout as order history: placing an order reassigns the
/// cart to the system owner rather than deleting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<CartItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

pub type CartItemUuid = TypedUuid<CartItem>;

/// A line in a cart, priced live from the product it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub product_uuid: ProductUuid,
    pub title: String,
    /// Minor units, the product's sale price when one is active.
    pub unit_price: u64,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// A cart and the totals a pricing policy produced for its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub cart: Cart,
    pub subtotal: u64,
    pub shipping: u64,
    pub discount: u64,
    pub total: u64,
}

impl CartSummary {
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart
            .items
            .iter()
            .fold(0, |count, item| count.saturating_add(u64::from(item.quantity)))
    }
}

/// Sums line totals without overflowing on absurd quantities.
#[must_use]
pub fn subtotal_of(items: &[CartItem]) -> u64 {
    items
        .iter()
        .fold(0, |subtotal, item| subtotal.saturating_add(item.line_total()))
}
