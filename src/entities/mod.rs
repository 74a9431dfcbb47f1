pub mod item;
pub mod wishlist;

pub use item::Entity as Item;
pub use item::ItemStatus;
pub use wishlist::Entity as Wishlist;
