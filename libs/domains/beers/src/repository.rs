use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{BeerError, BeerResult};
use crate::models::{Beer, StockChange};

/// Persistence for beers, keyed by id with a secondary lookup by name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Insert, or overwrite the beer with the same id.
    ///
    /// Fails with `DuplicateName` when another beer already holds the name.
    async fn save(&self, beer: Beer) -> BeerResult<Beer>;

    async fn find_by_name(&self, name: &str) -> BeerResult<Option<Beer>>;

    async fn find_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>>;

    /// All beers ordered by name
    async fn find_all(&self) -> BeerResult<Vec<Beer>>;

    /// Returns `false` when no beer had that id
    async fn delete_by_id(&self, id: Uuid) -> BeerResult<bool>;

    /// Move `amount` units of stock in one atomic step.
    ///
    /// The bound check and the write see the same quantity, so concurrent
    /// moves on one beer are serialized and never lost. Fails with
    /// `NotFound`, `StockExceeded` or `NegativeStock` without writing.
    async fn update_quantity(
        &self,
        id: Uuid,
        change: StockChange,
        amount: i32,
    ) -> BeerResult<Beer>;
}

/// In-memory implementation of BeerRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryBeerRepository {
    beers: Arc<RwLock<HashMap<Uuid, Beer>>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn save(&self, beer: Beer) -> BeerResult<Beer> {
        let mut beers = self.beers.write().await;

        if beers
            .values()
            .any(|existing| existing.id != beer.id && existing.name == beer.name)
        {
            return Err(BeerError::DuplicateName(beer.name));
        }

        beers.insert(beer.id, beer.clone());
        Ok(beer)
    }

    async fn find_by_name(&self, name: &str) -> BeerResult<Option<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.values().find(|beer| beer.name == name).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.get(&id).cloned())
    }

    async fn find_all(&self) -> BeerResult<Vec<Beer>> {
        let beers = self.beers.read().await;
        let mut result: Vec<Beer> = beers.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn delete_by_id(&self, id: Uuid) -> BeerResult<bool> {
        let mut beers = self.beers.write().await;
        Ok(beers.remove(&id).is_some())
    }

    async fn update_quantity(
        &self,
        id: Uuid,
        change: StockChange,
        amount: i32,
    ) -> BeerResult<Beer> {
        let mut beers = self.beers.write().await;

        let beer = beers.get_mut(&id).ok_or(BeerError::NotFound(id))?;
        beer.quantity = beer.quantity_after(change, amount)?;
        Ok(beer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BeerType;

    fn beer(name: &str, quantity: i32) -> Beer {
        Beer {
            id: Uuid::now_v7(),
            name: name.to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity,
            beer_type: BeerType::Lager,
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryBeerRepository::new();
        let saved = repo.save(beer("Brahma", 10)).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.find_by_name("Brahma").await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_name("Skol").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let repo = InMemoryBeerRepository::new();
        let mut saved = repo.save(beer("Brahma", 10)).await.unwrap();

        saved.quantity = 30;
        repo.save(saved.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id).await.unwrap().unwrap().quantity, 30);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejects_name_held_by_other_id() {
        let repo = InMemoryBeerRepository::new();
        repo.save(beer("Brahma", 10)).await.unwrap();

        let err = repo.save(beer("Brahma", 5)).await.unwrap_err();
        assert!(matches!(err, BeerError::DuplicateName(name) if name == "Brahma"));
    }

    #[tokio::test]
    async fn test_find_all_is_sorted_by_name() {
        let repo = InMemoryBeerRepository::new();
        repo.save(beer("Skol", 1)).await.unwrap();
        repo.save(beer("Antarctica", 2)).await.unwrap();
        repo.save(beer("Brahma", 3)).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Antarctica", "Brahma", "Skol"]);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryBeerRepository::new();
        let saved = repo.save(beer("Brahma", 10)).await.unwrap();

        assert!(repo.delete_by_id(saved.id).await.unwrap());
        assert!(!repo.delete_by_id(saved.id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_quantity_applies_change() {
        let repo = InMemoryBeerRepository::new();
        let saved = repo.save(beer("Brahma", 10)).await.unwrap();

        let updated = repo
            .update_quantity(saved.id, StockChange::Increment, 10)
            .await
            .unwrap();
        assert_eq!(updated.quantity, 20);

        let updated = repo
            .update_quantity(saved.id, StockChange::Decrement, 5)
            .await
            .unwrap();
        assert_eq!(updated.quantity, 15);
        assert_eq!(repo.find_by_id(saved.id).await.unwrap().unwrap().quantity, 15);
    }

    #[tokio::test]
    async fn test_update_quantity_out_of_bounds_leaves_stock() {
        let repo = InMemoryBeerRepository::new();
        let saved = repo.save(beer("Brahma", 10)).await.unwrap();

        let err = repo
            .update_quantity(saved.id, StockChange::Increment, 41)
            .await
            .unwrap_err();
        assert!(matches!(err, BeerError::StockExceeded { max: 50, .. }));

        let err = repo
            .update_quantity(saved.id, StockChange::Decrement, 11)
            .await
            .unwrap_err();
        assert!(matches!(err, BeerError::NegativeStock { quantity: 10, .. }));

        assert_eq!(repo.find_by_id(saved.id).await.unwrap().unwrap().quantity, 10);
    }

    #[tokio::test]
    async fn test_update_quantity_missing_beer() {
        let repo = InMemoryBeerRepository::new();
        let id = Uuid::now_v7();

        let err = repo
            .update_quantity(id, StockChange::Increment, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, BeerError::NotFound(missing) if missing == id));
    }
}
