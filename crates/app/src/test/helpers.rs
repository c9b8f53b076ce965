//! Test Helpers

use uuid::Uuid;

use crate::{
    domain::{
        addresses::{
            AddressesService, AddressesServiceError,
            models::{Address, AddressUpdate, AddressUuid, NewAddress},
        },
        products::{
            ProductsService, ProductsServiceError,
            models::{NewProduct, ProductUpdate, ProductUuid},
        },
        users::models::UserUuid,
    },
    test::TestContext,
};

pub(crate) fn new_product(uuid: ProductUuid, title: &str, price: u64) -> NewProduct {
    NewProduct {
        uuid,
        category_uuid: None,
        title: title.to_string(),
        description: String::new(),
        // SKUs are unique per catalog; derive one from the uuid.
        sku: uuid.into_uuid().simple().to_string(),
        price,
        on_sale: false,
        sale_price: None,
        stock_quantity: 20,
        is_featured: false,
    }
}

pub(crate) fn product_update(title: &str, price: u64) -> ProductUpdate {
    ProductUpdate {
        category_uuid: None,
        title: title.to_string(),
        description: String::new(),
        sku: Uuid::now_v7().simple().to_string(),
        price,
        on_sale: false,
        sale_price: None,
        stock_quantity: 20,
        is_featured: false,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    title: &str,
    price: u64,
) -> Result<ProductUuid, ProductsServiceError> {
    let uuid = ProductUuid::new();

    ctx.products
        .create_product(new_product(uuid, title, price))
        .await?;

    Ok(uuid)
}

pub(crate) async fn create_sale_product(
    ctx: &TestContext,
    title: &str,
    price: u64,
    sale_price: u64,
) -> Result<ProductUuid, ProductsServiceError> {
    let uuid = ProductUuid::new();

    let mut new = new_product(uuid, title, price);
    new.sale_price = Some(sale_price);

    ctx.products.create_product(new).await?;

    Ok(uuid)
}

pub(crate) fn new_address() -> NewAddress {
    NewAddress {
        uuid: AddressUuid::new(),
        country: "Portugal".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        company: None,
        street_address: "Rua das Flores 1".to_string(),
        apartment: None,
        city: "Lisbon".to_string(),
        state: "Lisboa".to_string(),
        postcode: "1100-001".to_string(),
        email: "ana@example.com".to_string(),
        phone: "+351 900 000 000".to_string(),
        order_notes: None,
    }
}

pub(crate) fn address_update() -> AddressUpdate {
    AddressUpdate {
        country: "Portugal".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        company: None,
        street_address: "Rua das Flores 1".to_string(),
        apartment: None,
        city: "Lisbon".to_string(),
        state: "Lisboa".to_string(),
        postcode: "1100-001".to_string(),
        email: "ana@example.com".to_string(),
        phone: "+351 900 000 000".to_string(),
        order_notes: None,
    }
}

pub(crate) async fn create_address(ctx: &TestContext) -> Result<Address, AddressesServiceError> {
    ctx.addresses
        .create_address(ctx.user_uuid, new_address())
        .await
}

/// Insert a cart row directly, bypassing get-or-create. Simulates the
/// accepted race where two first requests each create a cart.
pub(crate) async fn insert_raw_cart(ctx: &TestContext, user: UserUuid) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO carts (uuid, user_uuid) VALUES ($1, $2)")
        .bind(Uuid::now_v7())
        .bind(user.into_uuid())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}
