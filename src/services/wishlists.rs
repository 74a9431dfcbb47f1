use crate::{
    dto::NewWishlist,
    entities::{item, wishlist, Item, Wishlist},
    errors::ServiceError,
};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// A wishlist together with its items, in wire shape.
#[derive(Debug, Serialize)]
pub struct WishlistWithItems {
    #[serde(flatten)]
    pub wishlist: wishlist::Model,
    pub items: Vec<item::Model>,
}

impl WishlistWithItems {
    pub fn id(&self) -> i32 {
        self.wishlist.id
    }
}

/// Query filters for listing wishlists. Callers resolve the query-string
/// precedence; exactly one variant applies per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistFilter {
    All,
    Name(String),
    Userid(String),
    CreatedOn(NaiveDate),
    CreatedSince(NaiveDate),
}

/// Wishlist CRUD built on an explicitly passed database handle.
#[derive(Clone)]
pub struct WishlistService {
    db: Arc<DatabaseConnection>,
}

impl WishlistService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Persists a wishlist and any nested items in one transaction.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewWishlist) -> Result<WishlistWithItems, ServiceError> {
        let txn = self.db.begin().await?;

        let wishlist = wishlist::ActiveModel {
            name: Set(input.name),
            userid: Set(input.userid),
            date_created: Set(input.date_created),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(input.items.len());
        for item in input.items {
            let row = item::ActiveModel {
                wishlist_id: Set(wishlist.id),
                name: Set(item.name),
                description: Set(item.description),
                price: Set(item.price),
                status: Set(item.status),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(row);
        }

        txn.commit().await?;

        info!("Created wishlist {}", wishlist.id);
        Ok(WishlistWithItems { wishlist, items })
    }

    pub async fn get(&self, id: i32) -> Result<WishlistWithItems, ServiceError> {
        let wishlist = Wishlist::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| wishlist_not_found(id))?;
        let items = items_of(&*self.db, id).await?;
        Ok(WishlistWithItems { wishlist, items })
    }

    /// Lists wishlists matching the filter, each with its items, ordered by id.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: WishlistFilter,
    ) -> Result<Vec<WishlistWithItems>, ServiceError> {
        let mut query = Wishlist::find().order_by_asc(wishlist::Column::Id);
        query = match filter {
            WishlistFilter::All => query,
            WishlistFilter::Name(name) => query.filter(wishlist::Column::Name.eq(name)),
            WishlistFilter::Userid(userid) => query.filter(wishlist::Column::Userid.eq(userid)),
            WishlistFilter::CreatedOn(date) => {
                query.filter(wishlist::Column::DateCreated.eq(date))
            }
            WishlistFilter::CreatedSince(date) => {
                query.filter(wishlist::Column::DateCreated.gte(date))
            }
        };

        let rows = query.find_with_related(Item).all(&*self.db).await?;
        Ok(rows
            .into_iter()
            .map(|(wishlist, items)| WishlistWithItems { wishlist, items })
            .collect())
    }

    /// Replaces the wishlist's fields, preserving its id. Item membership is
    /// managed through the item endpoints, never through wishlist update.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: NewWishlist,
    ) -> Result<WishlistWithItems, ServiceError> {
        let existing = Wishlist::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| wishlist_not_found(id))?;

        let mut model: wishlist::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.userid = Set(input.userid);
        model.date_created = Set(input.date_created);
        let wishlist = model.update(&*self.db).await?;

        info!("Updated wishlist {}", id);
        let items = items_of(&*self.db, id).await?;
        Ok(WishlistWithItems { wishlist, items })
    }

    /// Deletes the wishlist and its items. Idempotent: deleting an absent
    /// wishlist is a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        Item::delete_many()
            .filter(item::Column::WishlistId.eq(id))
            .exec(&txn)
            .await?;
        let result = Wishlist::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        if result.rows_affected > 0 {
            info!("Deleted wishlist {}", id);
        }
        Ok(())
    }
}

pub(crate) async fn items_of<C: ConnectionTrait>(
    conn: &C,
    wishlist_id: i32,
) -> Result<Vec<item::Model>, ServiceError> {
    Ok(Item::find()
        .filter(item::Column::WishlistId.eq(wishlist_id))
        .order_by_asc(item::Column::Id)
        .all(conn)
        .await?)
}

pub(crate) fn wishlist_not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Wishlist with id '{id}' not found"))
}
