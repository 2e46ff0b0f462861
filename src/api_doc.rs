use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Todo, TodoPayload};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToDo API",
        version = "1.0.0",
        description = "CRUD over todo items stored in a DynamoDB table"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Todo,
            TodoPayload,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "todos", description = "Todo item operations")
    )
)]
pub struct ApiDoc;
