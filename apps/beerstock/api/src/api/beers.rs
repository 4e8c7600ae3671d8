use axum::Router;
use domain_beers::{BeerService, InMemoryBeerRepository, PgBeerRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(BeerService::new(PgBeerRepository::new(db.clone()))),
        None => handlers::router(BeerService::new(InMemoryBeerRepository::new())),
    }
}
