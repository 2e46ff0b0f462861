use crate::error::{ApiError, ErrorResponse};
use crate::models::{Todo, TodoFields, TodoPayload};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// PUT /todos/:id handler - Set title and done on a todo
///
/// Upserts the two fields without checking that the record exists, then
/// echoes the request back instead of re-reading the store. Any `id` in the
/// body is ignored.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo id")
    ),
    request_body = TodoPayload,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(payload) = payload?;
    let fields = TodoFields::from(payload);

    state.store.update_item(&id, &fields).await?;

    tracing::info!("Updated todo with id: {}", id);
    Ok((StatusCode::OK, Json(Todo::from_fields(id, fields))))
}
