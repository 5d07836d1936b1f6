
// Row of the `todos` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub uid: i64,
}

// Row of the `users` table. The password is stored and returned as plain text.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub uid: i64,
    pub uname: String,
    pub password: String,
}
