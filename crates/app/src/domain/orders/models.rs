//! Order models.

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{
        addresses::models::AddressUuid,
        carts::models::{CartItem, CartUuid},
        users::models::UserUuid,
    },
    uuids::TypedUuid,
};

pub type OrderUuid = TypedUuid<Order>;

#[derive(Debug, Error)]
#[error("unrecognized status {0:?}")]
pub struct ParseStatusError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// An order with the amounts frozen at the moment of checkout.
///
/// The referenced cart is the detached one that produced the order; its
/// lines remain the order's line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub cart_uuid: CartUuid,
    pub address_uuid: AddressUuid,
    pub status: OrderStatus,
    pub subtotal: u64,
    pub shipping: u64,
    pub discount: u64,
    pub total: u64,
    pub placed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

pub type CheckoutUuid = TypedUuid<Checkout>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    AwaitingPayment,
    Paid,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingPayment => "awaiting_payment",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awaiting_payment" => Ok(Self::AwaitingPayment),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// The payment leg of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub uuid: CheckoutUuid,
    pub order_uuid: OrderUuid,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub total: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An order with its line items and payment state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<CartItem>,
    pub checkout: Checkout,
}

/// How a checkout request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// A new order was created from the cart.
    Placed,
    /// The pending order from an earlier checkout was returned.
    Resumed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub order: Order,
    pub outcome: PlacementOutcome,
}
