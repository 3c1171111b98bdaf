//! PostgreSQL driver.
//!
//! Works against any `album` table whose `id` is an integer type, `title` and
//! `artist` are text-like, and `price` is numeric, real or double precision.
//! The driver does not widen types on its own, so every statement casts
//! columns to `int8`/`text`/`float8` on the way out and pins parameter types
//! on the way in.

use postgres::{Client, NoTls, Row};

use super::store::AlbumStore;
use crate::config::DatabaseConfig;
use crate::error::DriverError;
use crate::models::{Album, NewAlbum};

const SELECT_BY_ARTIST: &str = "SELECT id::int8, title::text, artist::text, price::float8 \
     FROM album WHERE artist = $1::text ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id::int8, title::text, artist::text, price::float8 \
     FROM album WHERE id = $1::int8";
const SELECT_ALL: &str =
    "SELECT id::int8, title::text, artist::text, price::float8 FROM album ORDER BY id";
const INSERT: &str = "INSERT INTO album (title, artist, price) \
     VALUES ($1::text, $2::text, $3::float8) RETURNING id::int8";
const UPDATE: &str = "UPDATE album SET title = $1::text, artist = $2::text, price = $3::float8 \
     WHERE id = $4::int8";
const DELETE: &str = "DELETE FROM album WHERE id = $1::int8";

/// PostgreSQL store reached over a plain (non-TLS) connection.
pub struct PostgresStore {
    client: Client,
    target: String,
}

impl PostgresStore {
    /// Open a client from the libpq-style connection string built out of
    /// `config`. The caller pings before use.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, DriverError> {
        let client = Client::connect(&config.connection_string(), NoTls)?;
        Ok(Self {
            client,
            target: config.target(),
        })
    }
}

impl AlbumStore for PostgresStore {
    fn target(&self) -> String {
        self.target.clone()
    }

    fn ping(&mut self) -> Result<(), DriverError> {
        self.client.simple_query("SELECT 1")?;
        Ok(())
    }

    fn create_table(&mut self) -> Result<(), DriverError> {
        self.client.batch_execute(
            "CREATE TABLE IF NOT EXISTS album (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL
            )",
        )?;
        Ok(())
    }

    fn select_by_artist(&mut self, artist: &str) -> Result<Vec<Album>, DriverError> {
        let rows = self.client.query(SELECT_BY_ARTIST, &[&artist])?;

        let albums = rows
            .iter()
            .map(album_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(albums)
    }

    fn select_by_id(&mut self, id: i64) -> Result<Option<Album>, DriverError> {
        let row = self.client.query_opt(SELECT_BY_ID, &[&id])?;

        match row {
            Some(row) => Ok(Some(album_from_row(&row)?)),
            None => Ok(None),
        }
    }

    fn insert(&mut self, album: &NewAlbum) -> Result<i64, DriverError> {
        let row = self.client.query_one(
            INSERT,
            &[&album.title, &album.artist, &album.price],
        )?;

        Ok(row.try_get(0)?)
    }

    fn update(&mut self, id: i64, album: &NewAlbum) -> Result<u64, DriverError> {
        let updated = self.client.execute(
            UPDATE,
            &[&album.title, &album.artist, &album.price, &id],
        )?;

        Ok(updated)
    }

    fn delete(&mut self, id: i64) -> Result<u64, DriverError> {
        let deleted = self.client.execute(DELETE, &[&id])?;

        Ok(deleted)
    }

    fn select_all(&mut self) -> Result<Vec<Album>, DriverError> {
        let rows = self.client.query(SELECT_ALL, &[])?;

        let albums = rows
            .iter()
            .map(album_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(albums)
    }
}

fn album_from_row(row: &Row) -> Result<Album, postgres::Error> {
    Ok(Album {
        id: row.try_get(0)?,
        title: row.try_get(1)?,
        artist: row.try_get(2)?,
        price: row.try_get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &str = "id::int8, title::text, artist::text, price::float8";
    const READS: [&str; 3] = [SELECT_BY_ARTIST, SELECT_BY_ID, SELECT_ALL];

    #[test]
    fn reads_cast_every_column() {
        for sql in READS {
            assert!(sql.starts_with(&format!("SELECT {COLUMNS} FROM album")), "{sql}");
        }
        assert!(INSERT.ends_with("RETURNING id::int8"));
    }

    #[test]
    fn every_parameter_has_an_explicit_type() {
        for sql in READS.into_iter().chain([INSERT, UPDATE, DELETE]) {
            let mut rest = sql;
            while let Some(pos) = rest.find('$') {
                rest = &rest[pos + 1..];
                let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
                assert!(rest[digits..].starts_with("::"), "untyped parameter in {sql}");
            }
        }
    }

    #[test]
    fn id_parameters_bind_as_int8() {
        assert!(SELECT_BY_ID.contains("id = $1::int8"));
        assert!(UPDATE.contains("id = $4::int8"));
        assert!(DELETE.contains("id = $1::int8"));
    }
}
