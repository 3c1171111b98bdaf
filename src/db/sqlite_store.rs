use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::store::AlbumStore;
use crate::error::DriverError;
use crate::models::{Album, NewAlbum};

/// Path value that selects an in-memory database instead of a file.
pub const IN_MEMORY: &str = ":memory:";

/// Embedded SQLite store. Backs the local CLI mode and every test.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Open (or create) a database file, creating its parent directory first.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DriverError> {
        let path = path.as_ref();
        if path == Path::new(IN_MEMORY) {
            return Self::open_in_memory();
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open a private database that disappears when the store is dropped.
    pub fn open_in_memory() -> Result<Self, DriverError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn,
            path: PathBuf::from(IN_MEMORY),
        })
    }

    /// File backing this store, or `:memory:`.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlbumStore for SqliteStore {
    fn target(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    fn ping(&mut self) -> Result<(), DriverError> {
        // Reads the file header, so an unreadable path fails here rather than
        // on the first real statement.
        self.conn
            .query_row("PRAGMA schema_version", [], |_| Ok(()))?;
        Ok(())
    }

    fn create_table(&mut self) -> Result<(), DriverError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS album (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                price REAL NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn select_by_artist(&mut self, artist: &str) -> Result<Vec<Album>, DriverError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, artist, price FROM album WHERE artist = ?1 ORDER BY id",
        )?;

        let albums = stmt
            .query_map([artist], album_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(albums)
    }

    fn select_by_id(&mut self, id: i64) -> Result<Option<Album>, DriverError> {
        let album = self
            .conn
            .query_row(
                "SELECT id, title, artist, price FROM album WHERE id = ?1",
                [id],
                album_from_row,
            )
            .optional()?;

        Ok(album)
    }

    fn insert(&mut self, album: &NewAlbum) -> Result<i64, DriverError> {
        self.conn.execute(
            "INSERT INTO album (title, artist, price) VALUES (?1, ?2, ?3)",
            params![album.title, album.artist, album.price],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&mut self, id: i64, album: &NewAlbum) -> Result<u64, DriverError> {
        let updated = self.conn.execute(
            "UPDATE album SET title = ?1, artist = ?2, price = ?3 WHERE id = ?4",
            params![album.title, album.artist, album.price, id],
        )?;

        Ok(updated as u64)
    }

    fn delete(&mut self, id: i64) -> Result<u64, DriverError> {
        let deleted = self
            .conn
            .execute("DELETE FROM album WHERE id = ?1", params![id])?;

        Ok(deleted as u64)
    }

    fn select_all(&mut self) -> Result<Vec<Album>, DriverError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, artist, price FROM album ORDER BY id")?;

        let albums = stmt
            .query_map([], album_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(albums)
    }
}

fn album_from_row(row: &Row<'_>) -> rusqlite::Result<Album> {
    Ok(Album {
        id: row.get(0)?,
        title: row.get(1)?,
        artist: row.get(2)?,
        price: row.get(3)?,
    })
}
