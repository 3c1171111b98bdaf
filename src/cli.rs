use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use recording::config::{DEFAULT_DB_NAME, DEFAULT_HOST, DEFAULT_PORT, PASSWORD_ENV, USER_ENV};
use recording::NewAlbum;

#[derive(Parser, Debug)]
#[command(name = "recording", version, about = "Manage the album table of a recording catalogue")]
pub struct Cli {
    /// Database driver to use
    #[arg(long, value_enum, default_value_t = Backend::Postgres)]
    pub backend: Backend,

    /// SQLite database file (`:memory:` for a throwaway database)
    #[arg(long, value_name = "PATH")]
    pub sqlite_path: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_DB_NAME)]
    pub dbname: String,

    /// Database user
    #[arg(long, env = USER_ENV, default_value = "", hide_env_values = true)]
    pub user: String,

    /// Database password
    #[arg(long, env = PASSWORD_ENV, default_value = "", hide_env_values = true)]
    pub password: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up albums by John Coltrane and album 1
    Demo,
    /// Create the album table if it does not exist
    Init,
    /// List every album
    List,
    /// List albums by one artist
    ByArtist { name: String },
    /// Show one album
    Get { id: i64 },
    /// Insert a new album
    Add(AlbumArgs),
    /// Replace the fields of an existing album
    Update {
        id: i64,
        #[command(flatten)]
        album: AlbumArgs,
    },
    /// Delete an album
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct AlbumArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub artist: String,
    #[arg(long)]
    pub price: f64,
}

impl From<AlbumArgs> for NewAlbum {
    fn from(args: AlbumArgs) -> Self {
        NewAlbum::new(args.title, args.artist, args.price)
    }
}
