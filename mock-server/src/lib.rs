use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u32,
}

/// Body accepted by create and update. A client-sent `id` is ignored.
#[derive(Deserialize)]
pub struct UserInput {
    pub name: String,
    pub age: u32,
}

pub type Db = Arc<RwLock<HashMap<String, User>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserInput>,
) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        age: input.age,
    };
    debug!(id = %user.id, "created user");
    db.write().await.insert(user.id.clone(), user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<User>, StatusCode> {
    let users = db.read().await;
    users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UserInput>,
) -> Result<Json<User>, StatusCode> {
    let mut users = db.write().await;
    let user = users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    user.name = input.name;
    user.age = input.age;
    debug!(id = %id, "updated user");
    Ok(Json(user.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_json() {
        let user = User {
            id: "123".to_string(),
            name: "Alice".to_string(),
            age: 30,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": "123", "name": "Alice", "age": 30}));
    }

    #[test]
    fn input_ignores_client_id() {
        let input: UserInput =
            serde_json::from_str(r#"{"id":"client-side","name":"Bob","age":25}"#).unwrap();
        assert_eq!(input.name, "Bob");
        assert_eq!(input.age, 25);
    }

    #[test]
    fn input_rejects_missing_name() {
        let result: Result<UserInput, _> = serde_json::from_str(r#"{"age":25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn input_rejects_negative_age() {
        let result: Result<UserInput, _> = serde_json::from_str(r#"{"name":"Bob","age":-1}"#);
        assert!(result.is_err());
    }
}
