use std::path::PathBuf;

use directories::BaseDirs;
use tracing::info;

use super::postgres_store::PostgresStore;
use super::sqlite_store::SqliteStore;
use super::store::AlbumStore;
use crate::config::DatabaseConfig;
use crate::error::{RepositoryError, Result};

/// Folder name used beneath the user's home directory for the local database.
const DATA_DIR_NAME: &str = ".recording";
/// SQLite file name stored inside the data directory.
const DB_FILE_NAME: &str = "recording.sqlite";

/// Which driver backs the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreSettings {
    Postgres(DatabaseConfig),
    Sqlite(PathBuf),
}

impl StoreSettings {
    fn target(&self) -> String {
        match self {
            Self::Postgres(config) => config.target(),
            Self::Sqlite(path) => format!("sqlite:{}", path.display()),
        }
    }
}

/// Open the configured store. Only the connection is established here; the
/// repository pings it before running any statement.
pub fn open_store(settings: &StoreSettings) -> Result<Box<dyn AlbumStore>> {
    info!(store = %settings.target(), "opening album store");

    let store: Box<dyn AlbumStore> = match settings {
        StoreSettings::Postgres(config) => Box::new(
            PostgresStore::connect(config)
                .map_err(|err| RepositoryError::connection(config.target(), err))?,
        ),
        StoreSettings::Sqlite(path) => Box::new(
            SqliteStore::open(path)
                .map_err(|err| RepositoryError::connection(settings.target(), err))?,
        ),
    };

    Ok(store)
}

/// Resolve the default SQLite location inside the user's home directory.
pub fn default_sqlite_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite_store::IN_MEMORY;

    #[test]
    fn opens_in_memory_sqlite() {
        let mut store = open_store(&StoreSettings::Sqlite(PathBuf::from(IN_MEMORY))).unwrap();
        store.ping().unwrap();
        assert_eq!(store.target(), "sqlite::memory:");
    }

    #[test]
    fn default_path_lives_under_data_dir() {
        if let Some(path) = default_sqlite_path() {
            assert!(path.ends_with(".recording/recording.sqlite"));
        }
    }
}
