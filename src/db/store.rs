use crate::error::DriverError;
use crate::models::{Album, NewAlbum};

/// One SQL connection able to run the album statements. Implementations map
/// rows into [`Album`] and hand driver failures back untouched; the repository
/// decides what they mean.
pub trait AlbumStore {
    /// Short label for the database this store talks to, used in logs and
    /// connection errors.
    fn target(&self) -> String;

    /// Round-trip a trivial statement to confirm the server is reachable.
    fn ping(&mut self) -> Result<(), DriverError>;

    /// Create the `album` table if it does not exist yet.
    fn create_table(&mut self) -> Result<(), DriverError>;

    /// Rows whose `artist` equals `artist` exactly, ordered by id.
    fn select_by_artist(&mut self, artist: &str) -> Result<Vec<Album>, DriverError>;

    /// The row with primary key `id`, or `None` when there is no such row.
    fn select_by_id(&mut self, id: i64) -> Result<Option<Album>, DriverError>;

    /// Insert a row and return the id the database generated for it.
    fn insert(&mut self, album: &NewAlbum) -> Result<i64, DriverError>;

    /// Returns the number of rows the update touched.
    fn update(&mut self, id: i64, album: &NewAlbum) -> Result<u64, DriverError>;

    /// Returns the number of rows removed.
    fn delete(&mut self, id: i64) -> Result<u64, DriverError>;

    /// Every row, ordered by id.
    fn select_all(&mut self) -> Result<Vec<Album>, DriverError>;
}

impl<S: AlbumStore + ?Sized> AlbumStore for Box<S> {
    fn target(&self) -> String {
        (**self).target()
    }

    fn ping(&mut self) -> Result<(), DriverError> {
        (**self).ping()
    }

    fn create_table(&mut self) -> Result<(), DriverError> {
        (**self).create_table()
    }

    fn select_by_artist(&mut self, artist: &str) -> Result<Vec<Album>, DriverError> {
        (**self).select_by_artist(artist)
    }

    fn select_by_id(&mut self, id: i64) -> Result<Option<Album>, DriverError> {
        (**self).select_by_id(id)
    }

    fn insert(&mut self, album: &NewAlbum) -> Result<i64, DriverError> {
        (**self).insert(album)
    }

    fn update(&mut self, id: i64, album: &NewAlbum) -> Result<u64, DriverError> {
        (**self).update(id, album)
    }

    fn delete(&mut self, id: i64) -> Result<u64, DriverError> {
        (**self).delete(id)
    }

    fn select_all(&mut self) -> Result<Vec<Album>, DriverError> {
        (**self).select_all()
    }
}
