pub mod config;
pub mod connector;
pub mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::check_connection;

// Re-export so downstream crates don't need a direct sea-orm dependency for
// the connection handle type.
pub use sea_orm::DatabaseConnection;
