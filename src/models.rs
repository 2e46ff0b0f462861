use serde::{Deserialize, Serialize};

/// Upper bound on records returned by the list endpoint
pub const MAX_LIST_ITEMS: usize = 100;

/// A persisted todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
}

/// Request body for create and update
///
/// `id` is only honoured on create; update always takes the id from the path.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// The field set written by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub done: bool,
}

impl From<TodoPayload> for TodoFields {
    fn from(payload: TodoPayload) -> Self {
        TodoFields {
            title: payload.title,
            done: payload.done,
        }
    }
}

impl Todo {
    pub fn from_fields(id: impl Into<String>, fields: TodoFields) -> Self {
        Todo {
            id: id.into(),
            title: fields.title,
            done: fields.done,
        }
    }
}
