pub mod items;
pub mod wishlists;

pub use items::ItemService;
pub use wishlists::{WishlistFilter, WishlistService, WishlistWithItems};
