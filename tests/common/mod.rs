//! Shared fixtures: throwaway flights databases

#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used for fixture databases
pub const DB_FILE: &str = "flights.sqlite3";

// Helper: Create the flights/airlines schema with a small known dataset
//
// | ID | date       | airline | origin | dest  | delay |
// |----|------------|---------|--------|-------|-------|
// | 1  | 01/01/2015 | AA      | LAX    | JFK   | 25    |
// | 2  | 01/01/2015 | DL      | ATL    | LAX   | 5     |
// | 3  | 02/01/2015 | DL      | ATL    | SEA   | 45    |
// | 4  | 02/01/2015 | UA      | SFO    | ORD   | NULL  |
// | 5  | 02/01/2015 | UA      | LAX    | DEN   | 20    |
// | 6  | 03/01/2015 | AA      | LAX    | ORD   | 19.5  |
// | 7  | 01/10/2015 | DL      | 10397  | 13930 | 30    |
pub fn create_flights_db(db_path: &Path) {
    let conn = Connection::open(db_path).unwrap();

    conn.execute(
        "CREATE TABLE airlines (
            id TEXT PRIMARY KEY NOT NULL,
            airline TEXT NOT NULL
        )",
        [],
    )
    .unwrap();

    // Airport columns are untyped so numeric codes stay integers, as in the
    // public dataset's October rows
    conn.execute(
        "CREATE TABLE flights (
            ID INTEGER PRIMARY KEY,
            YEAR INTEGER NOT NULL,
            MONTH INTEGER NOT NULL,
            DAY INTEGER NOT NULL,
            AIRLINE TEXT NOT NULL,
            ORIGIN_AIRPORT,
            DESTINATION_AIRPORT,
            DEPARTURE_DELAY REAL
        )",
        [],
    )
    .unwrap();

    for (id, name) in [
        ("AA", "American Airlines Inc."),
        ("DL", "Delta Air Lines Inc."),
        ("UA", "United Air Lines Inc."),
    ] {
        conn.execute(
            "INSERT INTO airlines (id, airline) VALUES (?1, ?2)",
            params![id, name],
        )
        .unwrap();
    }

    let insert = "INSERT INTO flights
        (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, DESTINATION_AIRPORT, DEPARTURE_DELAY)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

    let rows: [(i64, i64, i64, &str, &str, &str, Option<f64>); 6] = [
        (1, 1, 1, "AA", "LAX", "JFK", Some(25.0)),
        (2, 1, 1, "DL", "ATL", "LAX", Some(5.0)),
        (3, 1, 2, "DL", "ATL", "SEA", Some(45.0)),
        (4, 1, 2, "UA", "SFO", "ORD", None),
        (5, 1, 2, "UA", "LAX", "DEN", Some(20.0)),
        (6, 1, 3, "AA", "LAX", "ORD", Some(19.5)),
    ];
    for (id, month, day, airline, origin, dest, delay) in rows {
        conn.execute(
            insert,
            params![id, 2015i64, month, day, airline, origin, dest, delay],
        )
        .unwrap();
    }

    conn.execute(
        insert,
        params![7i64, 2015i64, 10i64, 1i64, "DL", 10397i64, 13930i64, 30.0f64],
    )
    .unwrap();
}

// Helper: Temp directory holding a populated flights database
pub fn flights_db_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join(DB_FILE);
    create_flights_db(&db_path);
    (temp_dir, db_path)
}

// Helper: Temp directory holding a database file without any tables
pub fn empty_db_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join(DB_FILE);
    Connection::open(&db_path)
        .unwrap()
        .execute("CREATE TABLE unrelated (x INTEGER)", [])
        .unwrap();
    (temp_dir, db_path)
}
