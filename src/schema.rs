// Struct representing the request body for creating a new Todo
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateTodoSchema {
    pub content: String,
    pub uid: i64,
}

// Partial update for a Todo; absent fields keep their stored value
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateTodoSchema {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub uid: Option<i64>,
}

impl UpdateTodoSchema {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.uid.is_none()
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateUserSchema {
    pub uname: String,
    pub password: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UpdatePasswordSchema {
    pub new_password: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LoginSchema {
    pub uname: String,
    pub password: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub uid: i64,
    pub username: String,
}
