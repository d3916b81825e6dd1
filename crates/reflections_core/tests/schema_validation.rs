use reflections_core::{SqliteReflectionStore, StoreError};
use rusqlite::Connection;

#[test]
fn opening_a_missing_file_is_a_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.db");

    let result = SqliteReflectionStore::open(&path);
    assert!(matches!(result, Err(StoreError::Db(_))));
}

#[test]
fn opening_a_store_without_the_reflections_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE unrelated (id INTEGER PRIMARY KEY);")
        .unwrap();

    let result = SqliteReflectionStore::open(&path);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("reflections"))
    ));
}

#[test]
fn opening_a_store_missing_a_consumed_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch(
            "CREATE TABLE reflections (
                date TEXT NOT NULL,
                language TEXT NOT NULL,
                title TEXT NOT NULL,
                quote TEXT NOT NULL,
                text TEXT NOT NULL
            );",
        )
        .unwrap();

    let result = SqliteReflectionStore::open(&path);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "reflections",
            column: "content"
        })
    ));
}

#[test]
fn extra_columns_beyond_the_consumed_set_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extended.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch(
            "CREATE TABLE reflections (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                language TEXT NOT NULL,
                title TEXT NOT NULL,
                quote TEXT NOT NULL,
                text TEXT NOT NULL,
                content TEXT NOT NULL,
                revision INTEGER NOT NULL DEFAULT 1
            );",
        )
        .unwrap();

    assert!(SqliteReflectionStore::open(&path).is_ok());
}
