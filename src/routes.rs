// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/healthz";
pub const TODOS: &str = "/todos";
pub const TODO_ITEM: &str = "/todos/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
