use std::sync::Arc;

use platform_db::DbPool;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};

use crate::{config::AppConfig, http::AppState};

pub(crate) async fn sqlite_pool() -> DbPool {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    for sql in [
        "CREATE TABLE employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL
        );",
        "CREATE UNIQUE INDEX ux_employees_email ON employees (email);",
    ] {
        db.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await
            .unwrap();
    }
    db
}

pub(crate) async fn sqlite_state() -> AppState {
    AppState::new(sqlite_pool().await, Arc::new(AppConfig::default()))
}
