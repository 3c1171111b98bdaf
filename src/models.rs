//! Record types that mirror the `album` table. They stay plain data holders so
//! the persistence layer owns every decision about how rows are read and
//! written.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// A stored album row. Values of this type only come back from the store, so
/// `id` is always the key the store assigned.
pub struct Album {
    /// Surrogate primary key generated on insert. Never reassigned.
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    /// Strip the identifier, leaving the fields an update can replace.
    pub fn fields(&self) -> NewAlbum {
        NewAlbum {
            title: self.title.clone(),
            artist: self.artist.clone(),
            price: self.price,
        }
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} by {} (${:.2})",
            self.id, self.title, self.artist, self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The mutable half of an album: everything except `id`. Used as input for
/// inserts and updates.
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

impl fmt::Display for NewAlbum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (${:.2})", self.title, self.artist, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_display_formats_price_with_cents() {
        let album = NewAlbum::new("Blue Train", "John Coltrane", 56.99).with_id(1);
        assert_eq!(album.to_string(), "#1 Blue Train by John Coltrane ($56.99)");
    }

    #[test]
    fn fields_round_trip_through_with_id() {
        let album = NewAlbum::new("Giant Steps", "John Coltrane", 63.99).with_id(2);
        let fields = album.fields();
        assert_eq!(fields, NewAlbum::new("Giant Steps", "John Coltrane", 63.99));
        assert_eq!(fields.with_id(2), album);
    }
}
