use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /todos/:id handler - Retrieve a todo
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo id")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    match state.store.get_item(&id).await? {
        Some(todo) => {
            tracing::info!("Retrieved todo with id: {}", id);
            Ok((StatusCode::OK, Json(todo)))
        }
        None => {
            tracing::info!("Todo not found with id: {}", id);
            Err(ApiError::TodoNotFound(id))
        }
    }
}
