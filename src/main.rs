//! Binary entry point: read configuration, open the store, run one command and
//! print the result. Any error is fatal and ends the process with a non-zero
//! status.
mod cli;
mod tracing_setup;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::error;

use cli::{Backend, Cli, Command};
use recording::db::{default_sqlite_path, open_store, AlbumRepository, AlbumStore, StoreSettings};
use recording::{Album, DatabaseConfig};

/// Artist and id looked up by the `demo` command.
const DEMO_ARTIST: &str = "John Coltrane";
const DEMO_ALBUM_ID: i64 = 1;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = tracing_setup::init_tracing(cli.debug) {
        eprintln!("failed to initialize logging: {err}");
    }

    if let Err(err) = run(cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = store_settings(&cli)?;
    let store = open_store(&settings)?;
    let mut repo = AlbumRepository::connect(store)?;
    println!("Connected!");

    execute(&mut repo, cli.command.unwrap_or(Command::Demo))
}

fn store_settings(cli: &Cli) -> Result<StoreSettings> {
    match cli.backend {
        Backend::Postgres => Ok(StoreSettings::Postgres(DatabaseConfig {
            host: cli.host.clone(),
            port: cli.port,
            dbname: cli.dbname.clone(),
            user: cli.user.clone(),
            password: cli.password.clone(),
        })),
        Backend::Sqlite => {
            let path = match &cli.sqlite_path {
                Some(path) => path.clone(),
                None => default_sqlite_path()
                    .ok_or_else(|| anyhow!("could not locate home directory"))?,
            };
            Ok(StoreSettings::Sqlite(path))
        }
    }
}

/// Run one command. The demo only reads, so it works for a user without DDL
/// rights; `init` is the one command that touches the schema.
fn execute<S: AlbumStore>(repo: &mut AlbumRepository<S>, command: Command) -> Result<()> {
    match command {
        Command::Demo => {
            let albums = repo
                .list_by_artist(DEMO_ARTIST)
                .context("failed to list albums by artist")?;
            println!("Albums found: {}", albums.len());
            print_albums(&albums);

            let album = repo
                .get_by_id(DEMO_ALBUM_ID)
                .context("failed to get album")?;
            println!("Album found: {album}");
        }
        Command::Init => {
            repo.ensure_schema()
                .context("failed to create album table")?;
            println!("album table ready");
        }
        Command::List => {
            let albums = repo.list_all().context("failed to list albums")?;
            print_albums(&albums);
        }
        Command::ByArtist { name } => {
            let albums = repo
                .list_by_artist(&name)
                .context("failed to list albums by artist")?;
            print_albums(&albums);
        }
        Command::Get { id } => {
            let album = repo.get_by_id(id).context("failed to get album")?;
            println!("{album}");
        }
        Command::Add(args) => {
            let album = repo
                .insert(&args.into())
                .context("failed to add album")?;
            println!("Added {album}");
        }
        Command::Update { id, album } => {
            let album = repo
                .update_by_id(id, &album.into())
                .context("failed to update album")?;
            println!("Updated {album}");
        }
        Command::Delete { id } => {
            let message = repo.delete_by_id(id).context("failed to delete album")?;
            println!("{message}");
        }
    }

    Ok(())
}

fn print_albums(albums: &[Album]) {
    for album in albums {
        println!("{album}");
    }
}
