use tracing::{debug, info};

use super::store::AlbumStore;
use crate::error::{RepositoryError, Result};
use crate::models::{Album, NewAlbum};

/// CRUD access to the `album` table. Owns its store; the connection closes
/// when the repository is dropped.
pub struct AlbumRepository<S> {
    store: S,
}

impl<S: AlbumStore> AlbumRepository<S> {
    /// Wrap an opened store after confirming it answers.
    pub fn connect(mut store: S) -> Result<Self> {
        store
            .ping()
            .map_err(|err| RepositoryError::connection(store.target(), err))?;
        info!(store = %store.target(), "connected");
        Ok(Self { store })
    }

    /// Ping the underlying store again.
    pub fn ping(&mut self) -> Result<()> {
        self.store
            .ping()
            .map_err(|err| RepositoryError::connection(self.store.target(), err))
    }

    /// Create the `album` table if it is missing.
    pub fn ensure_schema(&mut self) -> Result<()> {
        debug!("ensuring album table");
        self.store
            .create_table()
            .map_err(|err| RepositoryError::query("ensure_schema", "album", err))
    }

    /// Albums whose artist matches `name` exactly, ordered by id. No match is
    /// an empty list rather than an error.
    pub fn list_by_artist(&mut self, name: &str) -> Result<Vec<Album>> {
        debug!(artist = name, "list_by_artist");
        self.store
            .select_by_artist(name)
            .map_err(|err| RepositoryError::query("list_by_artist", name, err))
    }

    /// Fetch one album. Zero matching rows is `NotFound`, never an empty
    /// placeholder record.
    pub fn get_by_id(&mut self, id: i64) -> Result<Album> {
        debug!(id, "get_by_id");
        self.store
            .select_by_id(id)
            .map_err(|err| RepositoryError::query("get_by_id", id, err))?
            .ok_or_else(|| RepositoryError::not_found("get_by_id", id))
    }

    /// Insert a row and echo it back with the id the store generated.
    pub fn insert(&mut self, album: &NewAlbum) -> Result<Album> {
        let id = self
            .store
            .insert(album)
            .map_err(|err| RepositoryError::query("insert", album, err))?;

        info!(id, title = %album.title, artist = %album.artist, "album inserted");
        Ok(album.clone().with_id(id))
    }

    /// Replace every mutable field of row `id` and return the row as stored.
    pub fn update_by_id(&mut self, id: i64, album: &NewAlbum) -> Result<Album> {
        let updated = self
            .store
            .update(id, album)
            .map_err(|err| RepositoryError::query("update_by_id", id, err))?;

        if updated == 0 {
            return Err(RepositoryError::not_found("update_by_id", id));
        }

        info!(id, "album updated");
        self.get_by_id(id)
    }

    /// Remove row `id`, returning a confirmation that names it.
    pub fn delete_by_id(&mut self, id: i64) -> Result<String> {
        let deleted = self
            .store
            .delete(id)
            .map_err(|err| RepositoryError::query("delete_by_id", id, err))?;

        if deleted == 0 {
            return Err(RepositoryError::not_found("delete_by_id", id));
        }

        info!(id, "album deleted");
        Ok(format!("album {id} deleted"))
    }

    /// Every album in the table, ordered by id. An empty table gives an empty
    /// list.
    pub fn list_all(&mut self) -> Result<Vec<Album>> {
        debug!("list_all");
        self.store
            .select_all()
            .map_err(|err| RepositoryError::query("list_all", "*", err))
    }

    /// Borrow the store, e.g. to read its path or target label.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen it under a different repository.
    pub fn into_inner(self) -> S {
        self.store
    }
}
