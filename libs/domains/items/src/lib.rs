//! Items Domain
//!
//! CRUD over a single "item" resource with two interchangeable stores:
//! an in-memory map and PostgreSQL via Sea-ORM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and PostgreSQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let service = ItemService::new(InMemoryItemRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```
//!
//! With PostgreSQL:
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, PgItemRepository};
//!
//! # async fn example() -> Result<(), sea_orm::DbErr> {
//! let db = sea_orm::Database::connect("postgres://localhost/items").await?;
//! let router: axum::Router = handlers::router(ItemService::new(PgItemRepository::new(db)));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{InvalidItemId, ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreateItem, DeleteItemResponse, Item, ItemId, UpdateItem};
pub use postgres::PgItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
