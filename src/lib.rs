pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod password;
pub mod route;
pub mod schema;

use sqlx::{Pool, Sqlite};

pub use config::Config;
pub use error::ApiError;

// Struct representing the application state
pub struct AppState {
    pub db: Pool<Sqlite>,
}
