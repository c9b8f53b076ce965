//! App Router

use salvo::Router;

use crate::{addresses, carts, categories, identity, orders, products, reviews};

/// Routes that require an authenticated shopper.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(identity::middleware::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("reviews")
                                .get(reviews::index::handler)
                                .post(reviews::create::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler),
        )
        .push(
            Router::with_path("cart").get(carts::get::handler).push(
                Router::with_path("items")
                    .post(carts::items::create::handler)
                    .push(
                        Router::with_path("{item}")
                            .put(carts::items::update::handler)
                            .delete(carts::items::delete::handler),
                    ),
            ),
        )
        .push(Router::with_path("checkout").post(orders::checkout::handler))
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .push(Router::with_path("payment").post(orders::payment::handler)),
                ),
        )
        .push(
            Router::with_path("address")
                .get(addresses::get::handler)
                .post(addresses::create::handler),
        )
        .push(
            Router::with_path("addresses/{address}")
                .put(addresses::update::handler)
                .delete(addresses::delete::handler),
        )
}
