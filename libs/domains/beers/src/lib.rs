//! Beers Domain
//!
//! Stock-keeping for beers: registration, lookup, removal and bounded
//! stock movements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Uniqueness, existence, stock bounds
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Beer, request DTOs, BeerType
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_beers::{handlers, repository::InMemoryBeerRepository, service::BeerService};
//!
//! let service = BeerService::new(InMemoryBeerRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BeerError, BeerResult};
pub use models::{Beer, BeerType, CreateBeer, NewBeer, QuantityUpdate, StockChange};
pub use postgres::PgBeerRepository;
pub use repository::{BeerRepository, InMemoryBeerRepository};
pub use service::BeerService;
