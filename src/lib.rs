pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod owner;
pub mod payment;
pub mod session;
pub mod storage;
pub mod ticket;
pub mod wishlist;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use api::auth::{AuthClient, AuthSuccess};
use api::bookings::BookingsClient;
use api::catalog::CatalogClient;
use api::tmdb::TmdbClient;
use api::wishlist::WishlistClient;
use owner::{SchedulerClient, VenuesClient};
use payment::Checkout;
use session::SessionContext;
use storage::LocalStore;

// Shared state for the whole storefront client.
pub struct Storefront {
    pub config: config::Config,
    pub tmdb: TmdbClient,
    pub auth: AuthClient,
    pub catalog: CatalogClient,
    pub bookings: BookingsClient,
    pub wishlist: WishlistClient,
    pub venues: VenuesClient,
    pub scheduler: SchedulerClient,
    session: RwLock<SessionContext>,
}

impl Storefront {
    pub fn new(config: config::Config) -> error::Result<Arc<Self>> {
        let store = LocalStore::open(&config.storage.path)?;
        let session = SessionContext::hydrate(store);

        let http = api::http_client(config.backend.timeout_seconds);
        let base = config.backend.base_url.clone();

        let state = Arc::new(Self {
            tmdb: TmdbClient::from_config(&config.tmdb, http.clone()),
            auth: AuthClient::new(base.clone(), http.clone()),
            catalog: CatalogClient::new(base.clone(), http.clone()),
            bookings: BookingsClient::new(base.clone(), http.clone()),
            wishlist: WishlistClient::new(base.clone(), http.clone()),
            venues: VenuesClient::new(base.clone(), http.clone()),
            scheduler: SchedulerClient::new(base, http),
            session: RwLock::new(session),
            config,
        });

        Ok(state)
    }

    pub fn checkout(&self) -> Checkout {
        Checkout::new(
            self.bookings.clone(),
            Duration::from_millis(self.config.payment.processing_delay_ms),
        )
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .read()
            .unwrap()
            .token()
            .map(str::to_string)
    }

    pub fn current_user(&self) -> Option<models::User> {
        self.session.read().unwrap().user().cloned()
    }

    pub fn apply_login(&self, success: AuthSuccess) -> error::Result<()> {
        self.session
            .write()
            .unwrap()
            .login(success.token, success.user)
    }

    pub fn logout(&self) -> error::Result<()> {
        self.session.write().unwrap().logout()
    }

    pub fn record_search(&self, movie_id: i64) -> error::Result<()> {
        self.session.write().unwrap().push_search(movie_id)
    }

    pub fn search_history(&self) -> Vec<i64> {
        self.session.read().unwrap().search_history().to_vec()
    }
}
