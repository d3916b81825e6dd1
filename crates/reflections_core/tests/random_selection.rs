use reflections_core::{ReflectionStore, SqliteReflectionStore, StoreError};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_store(rows: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reflections.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE reflections (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            language TEXT NOT NULL,
            title TEXT NOT NULL,
            quote TEXT NOT NULL,
            text TEXT NOT NULL,
            content TEXT NOT NULL,
            UNIQUE(date, language)
        );",
    )
    .unwrap();
    for (date, language) in rows {
        conn.execute(
            "INSERT INTO reflections (date, language, title, quote, text, content)
             VALUES (?1, ?2, 'title', 'quote', 'text', 'reference');",
            params![date, language],
        )
        .unwrap();
    }
    (dir, path)
}

#[test]
fn random_reflection_matches_the_requested_language() {
    let (_dir, path) = fixture_store(&[
        ("2025-01-01", "english"),
        ("2025-01-02", "english"),
        ("2025-01-01", "pt-BR"),
    ]);
    let store = SqliteReflectionStore::open_seeded(&path, 1).unwrap();

    for _ in 0..20 {
        let reflection = store.get_random("pt-BR").unwrap();
        assert_eq!(reflection.language.as_str(), "pt-BR");
    }
}

#[test]
fn random_with_blank_language_draws_from_english() {
    let (_dir, path) = fixture_store(&[
        ("2025-01-01", "english"),
        ("2025-01-01", "spanish"),
    ]);
    let store = SqliteReflectionStore::open_seeded(&path, 2).unwrap();

    for _ in 0..10 {
        assert_eq!(store.get_random("").unwrap().language.as_str(), "english");
    }
}

#[test]
fn random_on_a_language_without_rows_is_a_no_data_error() {
    let (_dir, path) = fixture_store(&[("2025-01-01", "english")]);
    let store = SqliteReflectionStore::open(&path).unwrap();

    let err = store.get_random("french").unwrap_err();
    assert!(matches!(
        err,
        StoreError::NoData { language } if language.as_str() == "french"
    ));
}

#[test]
fn equal_seeds_draw_identical_sequences() {
    let (_dir, path) = fixture_store(&[
        ("2025-01-01", "english"),
        ("2025-01-02", "english"),
        ("2025-01-03", "english"),
        ("2025-01-04", "english"),
        ("2025-01-05", "english"),
    ]);
    let first = SqliteReflectionStore::open_seeded(&path, 42).unwrap();
    let second = SqliteReflectionStore::open_seeded(&path, 42).unwrap();

    for _ in 0..25 {
        assert_eq!(
            first.get_random("english").unwrap().date,
            second.get_random("english").unwrap().date
        );
    }
}

#[test]
fn draws_are_roughly_uniform_over_the_fixture() {
    let (_dir, path) = fixture_store(&[
        ("2025-01-01", "english"),
        ("2025-01-02", "english"),
        ("2025-01-03", "english"),
        ("2025-01-04", "english"),
    ]);
    let store = SqliteReflectionStore::open_seeded(&path, 7).unwrap();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..400 {
        let reflection = store.get_random("english").unwrap();
        *counts.entry(reflection.date).or_default() += 1;
    }

    assert_eq!(counts.len(), 4);
    for (date, count) in counts {
        // Expected 100 per row; generous bounds keep the seeded draw stable.
        assert!(
            (60..=140).contains(&count),
            "row {date} drawn {count} times out of 400"
        );
    }
}
