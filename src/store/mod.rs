pub mod bookings;
pub mod games;
pub mod seed;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use bookings::BookingStore;
pub use games::GameStore;

use crate::config::Config;
use crate::models::PricingTable;

/// Shared service state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    games: RwLock<GameStore>,
    bookings: RwLock<BookingStore>,
    pricing: RwLock<PricingTable>,
}

impl AppState {
    pub fn new(games: GameStore, bookings: BookingStore, pricing: PricingTable) -> Self {
        Self {
            inner: Arc::new(Inner {
                games: RwLock::new(games),
                bookings: RwLock::new(bookings),
                pricing: RwLock::new(pricing),
            }),
        }
    }

    /// State as configured at startup: default pricing, seeded catalog if enabled
    pub fn from_config(config: &Config) -> Self {
        let games = if config.seed_catalog {
            GameStore::with_games(seed::seed_games())
        } else {
            GameStore::new()
        };

        Self::new(games, BookingStore::new(), seed::default_pricing())
    }

    pub fn games(&self) -> &RwLock<GameStore> {
        &self.inner.games
    }

    pub fn bookings(&self) -> &RwLock<BookingStore> {
        &self.inner.bookings
    }

    pub fn pricing(&self) -> &RwLock<PricingTable> {
        &self.inner.pricing
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
