pub mod common;
pub mod health;
pub mod items;
pub mod wishlists;

use crate::db::DbPool;
use crate::services::{ItemService, WishlistService};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub wishlists: Arc<WishlistService>,
    pub items: Arc<ItemService>,
}

impl AppServices {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            wishlists: Arc::new(WishlistService::new(db.clone())),
            items: Arc::new(ItemService::new(db)),
        }
    }
}
