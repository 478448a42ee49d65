//! Database library providing the PostgreSQL connector and repository
//! primitives used by the domain crates.
//!
//! # Examples
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "seismic_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
