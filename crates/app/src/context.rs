//! App Context

use std::sync::Arc;

use bakeshop::PricingPolicy;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        addresses::{AddressesService, PgAddressesService},
        carts::{CartsService, PgCartsService},
        newsletter::{NewsletterService, PgNewsletterService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
        users::models::UserUuid,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub addresses: Arc<dyn AddressesService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub newsletter: Arc<dyn NewsletterService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        pricing: Arc<dyn PricingPolicy>,
        system_owner: UserUuid,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone(), Arc::clone(&pricing))),
            addresses: Arc::new(PgAddressesService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone(), pricing, system_owner)),
            reviews: Arc::new(PgReviewsService::new(db.clone())),
            newsletter: Arc::new(PgNewsletterService::new(db)),
        })
    }
}
