use crate::{
    dto::NewItem,
    entities::{item, Item, ItemStatus, Wishlist},
    errors::ServiceError,
    services::wishlists::{items_of, wishlist_not_found},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Item CRUD plus the purchase action, scoped to an owning wishlist.
#[derive(Clone)]
pub struct ItemService {
    db: Arc<DatabaseConnection>,
}

impl ItemService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn list(&self, wishlist_id: i32) -> Result<Vec<item::Model>, ServiceError> {
        ensure_wishlist(&*self.db, wishlist_id).await?;
        items_of(&*self.db, wishlist_id).await
    }

    /// Creates an item in the wishlist. Item names are unique within their
    /// wishlist; the check is a read inside the insert transaction, not a
    /// storage constraint.
    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        wishlist_id: i32,
        input: NewItem,
    ) -> Result<item::Model, ServiceError> {
        let txn = self.db.begin().await?;
        ensure_wishlist(&txn, wishlist_id).await?;

        if let Some(existing) = find_by_name(&txn, wishlist_id, &input.name).await? {
            return Err(duplicate_name(wishlist_id, &existing.name));
        }

        let item = item::ActiveModel {
            wishlist_id: Set(wishlist_id),
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            status: Set(input.status),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!("Added item {} to wishlist {}", item.id, wishlist_id);
        Ok(item)
    }

    pub async fn get(&self, wishlist_id: i32, item_id: i32) -> Result<item::Model, ServiceError> {
        ensure_wishlist(&*self.db, wishlist_id).await?;
        find_in_wishlist(&*self.db, wishlist_id, item_id).await
    }

    /// Updates an item's name, description and price. Status is owned by the
    /// purchase action. A rename that collides with a different item in the
    /// same wishlist is a conflict.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        wishlist_id: i32,
        item_id: i32,
        input: NewItem,
    ) -> Result<item::Model, ServiceError> {
        let txn = self.db.begin().await?;
        ensure_wishlist(&txn, wishlist_id).await?;
        let item = find_in_wishlist(&txn, wishlist_id, item_id).await?;

        if let Some(other) = find_by_name(&txn, wishlist_id, &input.name).await? {
            if other.id != item.id {
                return Err(duplicate_name(wishlist_id, &input.name));
            }
        }

        let mut model: item::ActiveModel = item.into();
        model.name = Set(input.name);
        model.description = Set(input.description);
        model.price = Set(input.price);
        let item = model.update(&txn).await?;

        txn.commit().await?;

        info!("Updated item {} in wishlist {}", item_id, wishlist_id);
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, wishlist_id: i32, item_id: i32) -> Result<(), ServiceError> {
        ensure_wishlist(&*self.db, wishlist_id).await?;
        let item = find_in_wishlist(&*self.db, wishlist_id, item_id).await?;
        item.delete(&*self.db).await?;

        info!("Deleted item {} from wishlist {}", item_id, wishlist_id);
        Ok(())
    }

    /// Marks the item purchased and persists it. The item is preserved so the
    /// caller sees the final state.
    #[instrument(skip(self))]
    pub async fn purchase(
        &self,
        wishlist_id: i32,
        item_id: i32,
    ) -> Result<item::Model, ServiceError> {
        ensure_wishlist(&*self.db, wishlist_id).await?;
        let item = find_in_wishlist(&*self.db, wishlist_id, item_id).await?;

        let mut model: item::ActiveModel = item.into();
        model.status = Set(ItemStatus::Purchased);
        let item = model.update(&*self.db).await?;

        info!("Purchased item {} from wishlist {}", item_id, wishlist_id);
        Ok(item)
    }
}

async fn ensure_wishlist<C: ConnectionTrait>(
    conn: &C,
    wishlist_id: i32,
) -> Result<(), ServiceError> {
    Wishlist::find_by_id(wishlist_id)
        .one(conn)
        .await?
        .map(|_| ())
        .ok_or_else(|| wishlist_not_found(wishlist_id))
}

async fn find_in_wishlist<C: ConnectionTrait>(
    conn: &C,
    wishlist_id: i32,
    item_id: i32,
) -> Result<item::Model, ServiceError> {
    Item::find_by_id(item_id)
        .filter(item::Column::WishlistId.eq(wishlist_id))
        .one(conn)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "Item with id '{item_id}' not found in wishlist '{wishlist_id}'"
            ))
        })
}

async fn find_by_name<C: ConnectionTrait>(
    conn: &C,
    wishlist_id: i32,
    name: &str,
) -> Result<Option<item::Model>, ServiceError> {
    Ok(Item::find()
        .filter(item::Column::WishlistId.eq(wishlist_id))
        .filter(item::Column::Name.eq(name))
        .one(conn)
        .await?)
}

fn duplicate_name(wishlist_id: i32, name: &str) -> ServiceError {
    ServiceError::Conflict(format!(
        "Item with name '{name}' already exists in wishlist '{wishlist_id}'"
    ))
}
