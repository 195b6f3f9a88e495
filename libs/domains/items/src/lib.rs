//! Items Domain
//!
//! A small record store: items with a name and a dd-mm-yyyy date, numbered
//! from a monotonically increasing counter that never reuses an id.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Tracing and outcome logs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and JSON-file implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Collection, id counter, validation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{JsonFileItemRepository, ItemService, handlers};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = JsonFileItemRepository::open("data.json").await?;
//! let service = ItemService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod json_file;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::{StoreBackend, StoreConfig};
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use json_file::JsonFileItemRepository;
pub use memory::InMemoryItemRepository;
pub use models::{Item, ItemInput};
pub use repository::ItemRepository;
pub use service::ItemService;
pub use store::ItemStore;
