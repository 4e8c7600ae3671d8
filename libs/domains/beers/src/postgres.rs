use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entity,
    error::{BeerError, BeerResult},
    models::{Beer, StockChange},
    repository::BeerRepository,
};

/// PostgreSQL implementation of BeerRepository
#[derive(Clone)]
pub struct PgBeerRepository {
    db: DatabaseConnection,
}

impl PgBeerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Unique-index violations on `name` surface as `DuplicateName`.
fn map_write_error(err: DbErr, name: &str) -> BeerError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => BeerError::DuplicateName(name.to_string()),
        _ => BeerError::Database(err),
    }
}

#[async_trait]
impl BeerRepository for PgBeerRepository {
    #[instrument(skip(self, beer), fields(beer_id = %beer.id))]
    async fn save(&self, beer: Beer) -> BeerResult<Beer> {
        let exists = entity::Entity::find_by_id(beer.id)
            .one(&self.db)
            .await?
            .is_some();

        let name = beer.name.clone();
        let active_model: entity::ActiveModel = beer.into();

        let model = if exists {
            active_model.update(&self.db).await
        } else {
            active_model.insert(&self.db).await
        }
        .map_err(|e| map_write_error(e, &name))?;

        Ok(model.into())
    }

    async fn find_by_name(&self, name: &str) -> BeerResult<Option<Beer>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(model.map(Beer::from))
    }

    async fn find_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Beer::from))
    }

    async fn find_all(&self) -> BeerResult<Vec<Beer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Beer::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> BeerResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Locks the row with `SELECT ... FOR UPDATE` so concurrent moves on the
    /// same beer queue up instead of overwriting each other.
    #[instrument(skip(self))]
    async fn update_quantity(
        &self,
        id: Uuid,
        change: StockChange,
        amount: i32,
    ) -> BeerResult<Beer> {
        let txn = self.db.begin().await?;

        let beer: Beer = entity::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(BeerError::NotFound(id))?
            .into();

        // Dropping the transaction on a bound failure rolls it back
        let new_quantity = beer.quantity_after(change, amount)?;

        let updated = entity::Entity::update_many()
            .col_expr(entity::Column::Quantity, Expr::value(new_quantity))
            .filter(entity::Column::Id.eq(id))
            .exec_with_returning(&txn)
            .await?
            .pop()
            .ok_or(BeerError::NotFound(id))?;

        txn.commit().await?;
        Ok(updated.into())
    }
}
