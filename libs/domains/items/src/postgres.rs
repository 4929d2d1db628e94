use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{CreateItem, Item, ItemId, UpdateItem},
    repository::ItemRepository,
};

/// PostgreSQL-backed item store.
///
/// Update and delete lock the row (`SELECT ... FOR UPDATE`) inside a
/// transaction; an early return drops the transaction and rolls it back.
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn row_id(id: ItemId) -> Option<Uuid> {
    match id {
        ItemId::Uuid(uuid) => Some(uuid),
        ItemId::Sequence(_) => None,
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let Some(uuid) = row_id(id) else {
            return Ok(None);
        };

        let model = entity::Entity::find_by_id(uuid).one(&self.db).await?;
        Ok(model.map(Item::from))
    }

    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let model = entity::ActiveModel::from(input).insert(&self.db).await?;

        tracing::info!(item_id = %model.id, "Created item");
        Ok(model.into())
    }

    async fn update(&self, id: ItemId, input: UpdateItem) -> ItemResult<Item> {
        let uuid = row_id(id).ok_or(ItemError::NotFound(id))?;
        let txn = self.db.begin().await?;

        let model = entity::Entity::find_by_id(uuid)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        let mut item = Item::from(model);
        item.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(uuid),
            name: Set(item.name),
            description: Set(item.description),
            price: Set(item.price),
            quantity: Set(item.quantity),
        };
        let updated = active_model.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = %uuid, "Updated item");
        Ok(updated.into())
    }

    async fn delete(&self, id: ItemId) -> ItemResult<Item> {
        let uuid = row_id(id).ok_or(ItemError::NotFound(id))?;
        let txn = self.db.begin().await?;

        let model = entity::Entity::find_by_id(uuid)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        entity::Entity::delete_by_id(uuid).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = %uuid, "Deleted item");
        Ok(model.into())
    }
}
