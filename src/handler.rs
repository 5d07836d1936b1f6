use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::{query, query_as, Sqlite, Transaction};

use crate::{
    error::ApiError,
    model::{Todo, User},
    password::validate_password,
    schema::{
        CreateTodoSchema, CreateUserSchema, LoginResponse, LoginSchema, MessageResponse,
        UpdatePasswordSchema, UpdateTodoSchema,
    },
    AppState,
};

type HandlerResult<T> = Result<T, ApiError>;

async fn find_user(tx: &mut Transaction<'_, Sqlite>, uid: i64) -> HandlerResult<Option<User>> {
    let user = query_as::<_, User>("SELECT uid, uname, password FROM users WHERE uid = ?")
        .bind(uid)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(user)
}

// Usernames are not unique in the table; the oldest account wins.
async fn find_user_by_name(
    tx: &mut Transaction<'_, Sqlite>,
    uname: &str,
) -> HandlerResult<Option<User>> {
    let user = query_as::<_, User>(
        "SELECT uid, uname, password FROM users WHERE uname = ? ORDER BY uid LIMIT 1",
    )
    .bind(uname)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(user)
}

async fn find_todo(tx: &mut Transaction<'_, Sqlite>, id: i64) -> HandlerResult<Option<Todo>> {
    let todo = query_as::<_, Todo>("SELECT id, content, uid FROM todos WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(todo)
}

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Todo Multiuser App!";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for creating a new Todo owned by an existing user
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateTodoSchema>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;

    if find_user(&mut tx, body.uid).await?.is_none() {
        tracing::debug!(uid = body.uid, "rejecting todo for unknown owner");
        return Err(ApiError::not_found("User Not Found!"));
    }

    let todo = query_as::<_, Todo>(
        "INSERT INTO todos (content, uid) VALUES (?, ?) RETURNING id, content, uid",
    )
    .bind(body.content)
    .bind(body.uid)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(id = todo.id, uid = todo.uid, "todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

// Handler for listing the todos of one owner; the owner is not required to exist
pub async fn get_todos(
    Path(uid): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    let todos =
        query_as::<_, Todo>("SELECT id, content, uid FROM todos WHERE uid = ? ORDER BY id")
            .bind(uid)
            .fetch_all(&data.db)
            .await?;

    Ok(Json(todos))
}

// Handler for partially updating a Todo by ID
pub async fn update_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
    Json(body): Json<UpdateTodoSchema>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;

    let todo = find_todo(&mut tx, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    if body.is_empty() {
        return Ok(Json(todo));
    }

    if let Some(uid) = body.uid {
        if uid != todo.uid && find_user(&mut tx, uid).await?.is_none() {
            return Err(ApiError::not_found("User Not Found!"));
        }
    }

    let content = body.content.unwrap_or(todo.content);
    let uid = body.uid.unwrap_or(todo.uid);

    let todo = query_as::<_, Todo>(
        "UPDATE todos SET content = ?, uid = ? WHERE id = ? RETURNING id, content, uid",
    )
    .bind(content)
    .bind(uid)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(id, "todo updated");

    Ok(Json(todo))
}

// Handler for deleting a Todo by ID, answering with the removed row
pub async fn delete_todo(
    Path(id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;

    let todo = find_todo(&mut tx, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(id, "todo deleted");

    Ok(Json(todo))
}

// Handler for registering a user
pub async fn create_user(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateUserSchema>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;

    if find_user_by_name(&mut tx, &body.uname).await?.is_some() {
        tracing::debug!(uname = %body.uname, "username taken");
        return Err(ApiError::conflict("This username Already exists!"));
    }

    validate_password(&body.password)?;

    let user = query_as::<_, User>(
        "INSERT INTO users (uname, password) VALUES (?, ?) RETURNING uid, uname, password",
    )
    .bind(body.uname)
    .bind(body.password)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(uid = user.uid, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_users(State(data): State<Arc<AppState>>) -> HandlerResult<impl IntoResponse> {
    let users = query_as::<_, User>("SELECT uid, uname, password FROM users ORDER BY uid")
        .fetch_all(&data.db)
        .await?;

    Ok(Json(users))
}

// Handler for changing a user's password
pub async fn update_user_password(
    Path(user_id): Path<i64>,
    State(data): State<Arc<AppState>>,
    Json(body): Json<UpdatePasswordSchema>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;

    let user = find_user(&mut tx, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if user.password == body.new_password {
        return Err(ApiError::conflict(
            "Password cannot be updated to your current password",
        ));
    }

    validate_password(&body.new_password)?;

    query("UPDATE users SET password = ? WHERE uid = ?")
        .bind(body.new_password)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(uid = user_id, "password updated");

    Ok(Json(MessageResponse::new("Password updated successfully")))
}

// Handler for deleting a user together with every todo it owns
pub async fn delete_user(
    Path(user_id): Path<i64>,
    State(data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;

    if find_user(&mut tx, user_id).await?.is_none() {
        return Err(ApiError::not_found("User not found"));
    }

    // Todos go first so the foreign key never dangles
    let removed = query("DELETE FROM todos WHERE uid = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    query("DELETE FROM users WHERE uid = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(uid = user_id, todos = removed, "user deleted");

    Ok(Json(MessageResponse::new(
        "User and associated todos deleted successfully",
    )))
}

pub async fn login(
    State(data): State<Arc<AppState>>,
    Json(body): Json<LoginSchema>,
) -> HandlerResult<impl IntoResponse> {
    let mut tx = data.db.begin().await?;
    let user = find_user_by_name(&mut tx, &body.uname).await?;
    tx.commit().await?;

    let user = user.ok_or_else(|| ApiError::not_found("Username not found"))?;

    if user.password != body.password {
        tracing::warn!(uid = user.uid, "login rejected");
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        uid: user.uid,
        username: user.uname,
    }))
}
