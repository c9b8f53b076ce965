//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use bakeshop_app::{
    context::AppContext,
    domain::{
        addresses::{MockAddressesService, models::Address, models::AddressUuid},
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        newsletter::{
            MockNewsletterService,
            models::{NewsletterSubscriber, SubscriberUuid},
        },
        orders::{
            MockOrdersService,
            models::{Checkout, CheckoutUuid, Order, OrderStatus, OrderUuid, PaymentStatus},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        reviews::{
            MockReviewsService,
            models::{Review, ReviewUuid},
        },
        users::models::UserUuid,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_app() -> AppContext {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_list_categories().never();
    products.expect_create_category().never();

    let mut carts = MockCartsService::new();

    carts.expect_get_or_create_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_cart_summary().never();

    let mut addresses = MockAddressesService::new();

    addresses.expect_address_for_user().never();
    addresses.expect_create_address().never();
    addresses.expect_update_address().never();
    addresses.expect_delete_address().never();

    let mut orders = MockOrdersService::new();

    orders.expect_place_order().never();
    orders.expect_get_order().never();
    orders.expect_list_orders().never();
    orders.expect_process_payment().never();

    let mut reviews = MockReviewsService::new();

    reviews.expect_create_review().never();
    reviews.expect_list_reviews().never();
    reviews.expect_rating_summary().never();

    let mut newsletter = MockNewsletterService::new();

    newsletter.expect_subscribe().never();
    newsletter.expect_unsubscribe().never();

    AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        addresses: Arc::new(addresses),
        orders: Arc::new(orders),
        reviews: Arc::new(reviews),
        newsletter: Arc::new(newsletter),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    let mut app = strict_app();
    app.products = Arc::new(products);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    let mut app = strict_app();
    app.carts = Arc::new(carts);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_addresses(addresses: MockAddressesService) -> Arc<State> {
    let mut app = strict_app();
    app.addresses = Arc::new(addresses);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    let mut app = strict_app();
    app.orders = Arc::new(orders);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_reviews(reviews: MockReviewsService) -> Arc<State> {
    let mut app = strict_app();
    app.reviews = Arc::new(reviews);

    Arc::new(State::new(app))
}

pub(crate) fn state_with_newsletter(newsletter: MockNewsletterService) -> Arc<State> {
    let mut app = strict_app();
    app.newsletter = Arc::new(newsletter);

    Arc::new(State::new(app))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn addresses_service(addresses: MockAddressesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_addresses(addresses)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_reviews(reviews)))
            .hoop(inject_user)
            .push(route),
    )
}

/// Newsletter routes sit outside the identity middleware, so no principal
/// is injected.
pub(crate) fn newsletter_service(newsletter: MockNewsletterService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_newsletter(newsletter)))
            .push(route),
    )
}

pub(crate) fn make_product(uuid: ProductUuid, price: u64) -> Product {
    Product {
        uuid,
        category_uuid: None,
        title: "Chocolate Cupcake".to_string(),
        description: "Chocolate cupcake with ganache frosting.".to_string(),
        sku: "784571".to_string(),
        price,
        on_sale: false,
        sale_price: None,
        stock_quantity: 20,
        is_featured: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, user: UserUuid) -> Cart {
    Cart {
        uuid,
        user_uuid: user,
        items: vec![],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(cart: CartUuid, product: ProductUuid, quantity: u32) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        cart_uuid: cart,
        product_uuid: product,
        title: "Chocolate Cupcake".to_string(),
        unit_price: 12_00,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, user: UserUuid) -> Order {
    Order {
        uuid,
        user_uuid: user,
        cart_uuid: CartUuid::new(),
        address_uuid: AddressUuid::new(),
        status: OrderStatus::Pending,
        subtotal: 24_00,
        shipping: 5_00,
        discount: 0,
        total: 29_00,
        placed_at: Timestamp::UNIX_EPOCH,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_checkout(order: OrderUuid) -> Checkout {
    Checkout {
        uuid: CheckoutUuid::new(),
        order_uuid: order,
        payment_status: PaymentStatus::AwaitingPayment,
        payment_method: None,
        transaction_id: None,
        total: 29_00,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_address(uuid: AddressUuid, user: UserUuid) -> Address {
    Address {
        uuid,
        user_uuid: user,
        country: "Portugal".to_string(),
        first_name: "Maria".to_string(),
        last_name: "Silva".to_string(),
        company: None,
        street_address: "Rua das Flores 1".to_string(),
        apartment: None,
        city: "Lisbon".to_string(),
        state: "Lisboa".to_string(),
        postcode: "1100-001".to_string(),
        email: "maria@example.com".to_string(),
        phone: "+351 912 345 678".to_string(),
        order_notes: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_review(product: ProductUuid, user: UserUuid, rating: u8) -> Review {
    Review {
        uuid: ReviewUuid::new(),
        product_uuid: product,
        user_uuid: user,
        rating,
        comment: "Delicious.".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_subscriber(email: &str, is_active: bool) -> NewsletterSubscriber {
    NewsletterSubscriber {
        uuid: SubscriberUuid::new(),
        email: email.to_string(),
        is_active,
        subscribed_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
