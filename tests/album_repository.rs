use recording::{AlbumRepository, NewAlbum, RepositoryError, SqliteStore};
use tempfile::TempDir;

fn repository() -> AlbumRepository<SqliteStore> {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut repo = AlbumRepository::connect(store).unwrap();
    repo.ensure_schema().unwrap();
    repo
}

fn seed(repo: &mut AlbumRepository<SqliteStore>) {
    for album in [
        NewAlbum::new("Blue Train", "John Coltrane", 56.99),
        NewAlbum::new("Giant Steps", "John Coltrane", 63.99),
        NewAlbum::new("Jeru", "Gerry Mulligan", 17.99),
        NewAlbum::new("Sarah Vaughan", "Sarah Vaughan", 34.98),
    ] {
        repo.insert(&album).unwrap();
    }
}

#[test]
fn inserted_album_reads_back_by_id() {
    let mut repo = repository();
    let album = NewAlbum::new("Dumes", "Denny Chacknan", 55.65);

    let stored = repo.insert(&album).unwrap();
    let fetched = repo.get_by_id(stored.id).unwrap();

    assert_eq!(fetched, stored);
    assert_eq!(fetched.fields(), album);
}

#[test]
fn list_by_artist_returns_only_matching_albums() {
    let mut repo = repository();
    seed(&mut repo);

    let albums = repo.list_by_artist("John Coltrane").unwrap();
    let titles: Vec<_> = albums.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Blue Train", "Giant Steps"]);
    assert!(albums.iter().all(|a| a.artist == "John Coltrane"));
}

#[test]
fn list_by_artist_is_exact_match() {
    let mut repo = repository();
    seed(&mut repo);

    assert!(repo.list_by_artist("john coltrane").unwrap().is_empty());
    assert!(repo.list_by_artist("Coltrane").unwrap().is_empty());
}

#[test]
fn list_by_artist_without_matches_is_empty() {
    let mut repo = repository();
    seed(&mut repo);

    assert_eq!(repo.list_by_artist("Nobody").unwrap(), Vec::new());
}

#[test]
fn inserted_album_is_listed_under_its_artist() {
    let mut repo = repository();
    seed(&mut repo);

    let album = NewAlbum::new("Dumes", "Denny Chacknan", 55.65);
    repo.insert(&album).unwrap();

    let albums = repo.list_by_artist("Denny Chacknan").unwrap();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].fields(), album);
}

#[test]
fn missing_id_is_not_found() {
    let mut repo = repository();

    let err = repo.get_by_id(999999).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        RepositoryError::NotFound { operation: "get_by_id", id: 999999 }
    ));
}

#[test]
fn update_replaces_every_field() {
    let mut repo = repository();
    let stored = repo
        .insert(&NewAlbum::new("Blue Train", "John Coltrane", 56.99))
        .unwrap();

    let changes = NewAlbum::new("Kind of Blue", "Miles Davis", 42.5);
    let updated = repo.update_by_id(stored.id, &changes).unwrap();

    assert_eq!(updated, changes.clone().with_id(stored.id));
    assert_eq!(repo.get_by_id(stored.id).unwrap().fields(), changes);
    assert!(repo.list_by_artist("John Coltrane").unwrap().is_empty());
}

#[test]
fn update_of_missing_id_is_not_found() {
    let mut repo = repository();
    seed(&mut repo);
    let before = repo.list_all().unwrap();

    let err = repo
        .update_by_id(999999, &NewAlbum::new("Ghost", "Nobody", 1.0))
        .unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::NotFound { operation: "update_by_id", id: 999999 }
    ));
    assert_eq!(repo.list_all().unwrap(), before);
}

#[test]
fn delete_removes_album() {
    let mut repo = repository();
    let stored = repo
        .insert(&NewAlbum::new("Jeru", "Gerry Mulligan", 17.99))
        .unwrap();

    let message = repo.delete_by_id(stored.id).unwrap();
    assert!(message.contains(&stored.id.to_string()));
    assert!(repo.get_by_id(stored.id).unwrap_err().is_not_found());
}

#[test]
fn delete_of_missing_id_is_not_found() {
    let mut repo = repository();

    let err = repo.delete_by_id(42).unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::NotFound { operation: "delete_by_id", id: 42 }
    ));
}

#[test]
fn list_all_returns_every_album_in_id_order() {
    let mut repo = repository();
    assert!(repo.list_all().unwrap().is_empty());

    seed(&mut repo);
    let albums = repo.list_all().unwrap();

    assert_eq!(albums.len(), 4);
    assert!(albums.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut repo = repository();
    let first = repo
        .insert(&NewAlbum::new("Blue Train", "John Coltrane", 56.99))
        .unwrap();
    repo.delete_by_id(first.id).unwrap();

    let second = repo
        .insert(&NewAlbum::new("Giant Steps", "John Coltrane", 63.99))
        .unwrap();
    assert!(second.id > first.id);
}

#[test]
fn query_before_schema_is_a_query_error() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut repo = AlbumRepository::connect(store).unwrap();

    let err = repo.list_all().unwrap_err();
    assert!(matches!(err, RepositoryError::Query { operation: "list_all", .. }));
}

#[test]
fn file_backed_store_persists_between_connections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("recording.sqlite");

    let stored = {
        let mut repo = AlbumRepository::connect(SqliteStore::open(&path).unwrap()).unwrap();
        repo.ensure_schema().unwrap();
        assert_eq!(repo.store().path(), path.as_path());
        repo.insert(&NewAlbum::new("Dumes", "Denny Chacknan", 55.65))
            .unwrap()
    };

    let store = SqliteStore::open(&path).unwrap();
    let mut repo = AlbumRepository::connect(store).unwrap();
    repo.ensure_schema().unwrap();
    assert_eq!(repo.get_by_id(stored.id).unwrap(), stored);

    let store = repo.into_inner();
    assert_eq!(store.path(), path.as_path());
}
