//! Data-access layer for the `album` table of a recording catalogue.
//!
//! [`AlbumRepository`] owns one store (PostgreSQL or SQLite) and exposes the
//! CRUD operations; the binary wires configuration and output around it.
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::DatabaseConfig;

/// Repository plus the drivers it can sit on.
pub use db::{open_store, AlbumRepository, AlbumStore, PostgresStore, SqliteStore, StoreSettings};

pub use error::{DriverError, RepositoryError, Result};

pub use models::{Album, NewAlbum};
