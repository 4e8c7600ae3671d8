//! Beer Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{BeerError, BeerResult};
use crate::models::{Beer, CreateBeer, NewBeer, QuantityUpdate, StockChange};
use crate::repository::BeerRepository;

/// Beer service providing the inventory operations
pub struct BeerService<R: BeerRepository> {
    repository: Arc<R>,
}

impl<R: BeerRepository> Clone for BeerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new beer. Names are unique.
    #[instrument(skip(self, input), fields(beer_name = ?input.name))]
    pub async fn create(&self, input: CreateBeer) -> BeerResult<Beer> {
        let new_beer = NewBeer::try_from(input)?;

        if self
            .repository
            .find_by_name(&new_beer.name)
            .await?
            .is_some()
        {
            return Err(BeerError::DuplicateName(new_beer.name));
        }

        let beer = self.repository.save(Beer::new(new_beer)).await?;
        info!(beer_id = %beer.id, "Created beer");
        Ok(beer)
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> BeerResult<Beer> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| BeerError::NotFoundByName(name.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: Uuid) -> BeerResult<Beer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BeerError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> BeerResult<Vec<Beer>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> BeerResult<()> {
        self.find_by_id(id).await?;

        // Removed by someone else in between
        if !self.repository.delete_by_id(id).await? {
            return Err(BeerError::NotFound(id));
        }

        info!(beer_id = %id, "Deleted beer");
        Ok(())
    }

    /// Add stock, never going above `max`.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: Uuid, input: QuantityUpdate) -> BeerResult<Beer> {
        self.change_stock(id, StockChange::Increment, input).await
    }

    /// Remove stock, never going below zero.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: Uuid, input: QuantityUpdate) -> BeerResult<Beer> {
        self.change_stock(id, StockChange::Decrement, input).await
    }

    async fn change_stock(
        &self,
        id: Uuid,
        change: StockChange,
        input: QuantityUpdate,
    ) -> BeerResult<Beer> {
        let amount = input.amount()?;

        let updated = self.repository.update_quantity(id, change, amount).await?;

        info!(
            beer_id = %id,
            %change,
            amount,
            quantity = updated.quantity,
            "Stock updated"
        );
        Ok(updated)
    }
}
