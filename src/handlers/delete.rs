use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /todos/:id handler - Remove a todo
///
/// Deleting an id that was never stored still answers 204.
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo id")
    ),
    responses(
        (status = 204, description = "Todo deleted or already absent"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_item(&id).await?;

    tracing::info!("Deleted todo with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
