//! Items Domain
//!
//! The storage/identity core of the item catalog: durable item persistence
//! with stable identifiers, content-addressed image naming, and the service
//! layer that orchestrates both.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, image naming, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + JSON file / SQLite backends)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{JsonFileItemRepository, ItemService, handlers};
//!
//! let repository = JsonFileItemRepository::new("items.json");
//! let service = ItemService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod naming;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use models::{CreateItem, Item, ItemPage, NewItem};
pub use naming::stored_image_name;
pub use repository::{ItemRepository, JsonFileItemRepository};
pub use service::ItemService;
pub use sqlite::SqliteItemRepository;
