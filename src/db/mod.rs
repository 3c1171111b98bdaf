//! Persistence module split across the repository, the store trait and one
//! driver per database.

mod albums;
mod connection;
mod postgres_store;
mod sqlite_store;
mod store;

pub use albums::AlbumRepository;
pub use connection::{default_sqlite_path, open_store, StoreSettings};
pub use postgres_store::PostgresStore;
pub use sqlite_store::{SqliteStore, IN_MEMORY};
pub use store::AlbumStore;
