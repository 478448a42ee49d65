//! Records Domain
//!
//! One generic CRUD controller over schemaless JSON records, instantiated
//! once per resource kind (earthquake alerts, raw sensor readings). The two
//! resources are structurally identical; only the table and the display
//! strings differ, so everything here is parameterized over a [`Resource`]
//! descriptor and a repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, content-type gate, envelope shaping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← lookup-then-act, merge updates, not-found messages
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + Postgres/in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Record, pagination query, resource descriptor
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_records::{
//!     handlers,
//!     models::Resource,
//!     repository::InMemoryRecordRepository,
//!     service::RecordService,
//! };
//!
//! let repository = InMemoryRecordRepository::new();
//! let service = RecordService::new(repository, Resource::ALERTS);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{RecordError, RecordResult};
pub use models::{FieldMap, PageQuery, Record, Resource, SortOrder};
pub use postgres::PgRecordRepository;
pub use repository::{InMemoryRecordRepository, RecordRepository};
pub use service::RecordService;
