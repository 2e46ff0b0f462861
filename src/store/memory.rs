use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};
use crate::models::{Todo, TodoFields};

/// HashMap-backed store with the same upsert and delete semantics as DynamoDB
#[derive(Default)]
pub struct InMemoryStore {
    rows: RwLock<HashMap<String, Todo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn scan(&self, limit: usize) -> Result<Vec<Todo>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.values().take(limit).cloned().collect())
    }

    async fn put_item(&self, todo: &Todo) -> Result<(), StoreError> {
        self.rows.write().await.insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn update_item(&self, id: &str, fields: &TodoFields) -> Result<(), StoreError> {
        self.rows
            .write()
            .await
            .insert(id.to_string(), Todo::from_fields(id, fields.clone()));
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        self.rows.write().await.remove(id);
        Ok(())
    }
}

/// Store whose every call fails, for exercising the 500 paths
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Backend(self.message.clone()))
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn scan(&self, _limit: usize) -> Result<Vec<Todo>, StoreError> {
        self.fail()
    }

    async fn put_item(&self, _todo: &Todo) -> Result<(), StoreError> {
        self.fail()
    }

    async fn get_item(&self, _id: &str) -> Result<Option<Todo>, StoreError> {
        self.fail()
    }

    async fn update_item(&self, _id: &str, _fields: &TodoFields) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete_item(&self, _id: &str) -> Result<(), StoreError> {
        self.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, title: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            done: false,
        }
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_id() {
        let store = InMemoryStore::new();
        store.put_item(&todo("a", "first")).await.unwrap();
        store.put_item(&todo("a", "second")).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.get_item("a").await.unwrap().unwrap();
        assert_eq!(stored.title, "second");
    }

    #[tokio::test]
    async fn test_update_creates_missing_record() {
        let store = InMemoryStore::new();
        let fields = TodoFields {
            title: "fresh".to_string(),
            done: true,
        };
        store.update_item("missing", &fields).await.unwrap();

        let stored = store.get_item("missing").await.unwrap().unwrap();
        assert_eq!(stored, Todo::from_fields("missing", fields));
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_noop() {
        let store = InMemoryStore::new();
        assert!(store.delete_item("nothing").await.is_ok());
        assert!(store.get_item("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_respects_limit() {
        let store = InMemoryStore::new();
        for i in 0..5 {
            store.put_item(&todo(&i.to_string(), "t")).await.unwrap();
        }
        assert_eq!(store.scan(3).await.unwrap().len(), 3);
        assert_eq!(store.scan(10).await.unwrap().len(), 5);
    }
}
