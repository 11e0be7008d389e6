use super::entity::{self, Entity as ProductEntity};
use super::model::{Product, ProductId, ProductPayload};
use super::repository::ProductRepository;
use crate::error::Result;
use crate::lifecycle::{
    LifecycleError, OnApplicationBootstrap, OnApplicationShutdown, OnModuleDestroy, OnModuleInit,
};
use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};
use tokio::sync::Mutex;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (\
    id BIGINT PRIMARY KEY, \
    name TEXT NOT NULL, \
    price DOUBLE PRECISION NOT NULL)";

/// Product store backed by a single relational table
///
/// Inserts are serialized through `insert_lock`: a read-committed transaction
/// alone lets two writers read the same max id. The lock covers writers in
/// this process only; one service instance owns the table.
pub struct SeaOrmProductRepository {
    conn: DatabaseConnection,
    insert_lock: Mutex<()>,
}

impl SeaOrmProductRepository {
    pub async fn connect(url: &str) -> Result<Self> {
        let conn = Database::connect(url).await?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            insert_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let model = ProductEntity::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(Product::from))
    }

    async fn insert(&self, payload: ProductPayload) -> Result<Product> {
        let _guard = self.insert_lock.lock().await;
        let txn = self.conn.begin().await?;
        let max_id = ProductEntity::find()
            .order_by_desc(entity::Column::Id)
            .one(&txn)
            .await?
            .map(|m| m.id)
            .unwrap_or(0);

        let model = entity::ActiveModel {
            id: Set(max_id + 1),
            name: Set(payload.name),
            price: Set(payload.price),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        tracing::debug!(id = model.id, "Inserted product row");
        Ok(model.into())
    }

    async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<Option<Product>> {
        let Some(model) = ProductEntity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = model.into();
        active.name = Set(payload.name);
        active.price = Set(payload.price);
        let updated = active.update(&self.conn).await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool> {
        let result = ProductEntity::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl OnModuleInit for SeaOrmProductRepository {
    async fn on_module_init(&self) -> std::result::Result<(), LifecycleError> {
        tracing::info!("Ensuring products table exists");
        self.conn
            .execute_unprepared(CREATE_TABLE_SQL)
            .await
            .map_err(|e| LifecycleError::init_failed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl OnApplicationBootstrap for SeaOrmProductRepository {
    async fn on_application_bootstrap(&self) -> std::result::Result<(), LifecycleError> {
        let rows = ProductEntity::find()
            .count(&self.conn)
            .await
            .map_err(|e| LifecycleError::init_failed(e.to_string()))?;
        tracing::info!(products = rows, "Serving products from database");
        Ok(())
    }
}

#[async_trait]
impl OnApplicationShutdown for SeaOrmProductRepository {
    async fn on_application_shutdown(&self) -> std::result::Result<(), LifecycleError> {
        // Wait for an insert that is still inside its transaction.
        let _guard = self.insert_lock.lock().await;
        tracing::info!("No product inserts in flight");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for SeaOrmProductRepository {
    async fn on_module_destroy(&self) -> std::result::Result<(), LifecycleError> {
        tracing::info!("Closing database connection pool");
        self.conn
            .clone()
            .close()
            .await
            .map_err(|e| LifecycleError::shutdown_failed(e.to_string()))
    }
}
