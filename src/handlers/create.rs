use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, TodoPayload};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// POST /todos handler - Create a todo
///
/// A missing or empty `id` is replaced with a fresh UUID. A client-supplied
/// id is written as-is and overwrites any record already stored under it.
#[utoipa::path(
    post,
    path = routes::TODOS,
    request_body = TodoPayload,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(payload) = payload?;

    let id = payload
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let todo = Todo {
        id,
        title: payload.title,
        done: payload.done,
    };

    state.store.put_item(&todo).await?;

    tracing::info!("Created todo with id: {}", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}
