use std::str::FromStr;

use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::config::Config;

const SCHEMA: [&str; 3] = [
    r#"CREATE TABLE IF NOT EXISTS users (
        uid INTEGER PRIMARY KEY AUTOINCREMENT,
        uname TEXT NOT NULL,
        password TEXT NOT NULL
    );"#,
    "CREATE INDEX IF NOT EXISTS ix_users_uname ON users (uname);",
    r#"CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        uid INTEGER NOT NULL REFERENCES users (uid)
    );"#,
];

// Opens the connection pool, creating the database file first if needed.
pub async fn connect(config: &Config) -> Result<Pool<Sqlite>, sqlx::Error> {
    let url = config.database_url.as_str();

    // Check if the database exists, if not, create it
    if !Sqlite::database_exists(url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", url);
        Sqlite::create_database(url).await?;
    } else {
        tracing::debug!("Database already exists");
    }

    let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Connection to the database is successful");
    Ok(pool)
}

// Creates the `users` and `todos` tables if they are absent.
pub async fn create_schema(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Schema ready");
    Ok(())
}
