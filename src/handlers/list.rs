use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, MAX_LIST_ITEMS};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /todos handler - List todos
///
/// Returns at most 100 records in the order the store yields them. No sort
/// is applied and there is no paging beyond the cap.
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "Up to 100 todos", body = Vec<Todo>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Todo>>), ApiError> {
    let todos = state.store.scan(MAX_LIST_ITEMS).await?;

    tracing::info!("Listed {} todos", todos.len());
    Ok((StatusCode::OK, Json(todos)))
}
