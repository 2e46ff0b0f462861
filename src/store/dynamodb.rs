use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use super::{RecordStore, StoreError};
use crate::config::Config;
use crate::models::{Todo, TodoFields};

const TABLE_READY_ATTEMPTS: u32 = 20;
const TABLE_READY_INTERVAL: Duration = Duration::from_millis(500);

type Item = HashMap<String, AttributeValue>;

/// Todo store backed by a single DynamoDB table keyed by `id`
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a store from configuration
    ///
    /// Credentials come from the default AWS provider chain. When
    /// `DYNAMODB_ENDPOINT` is configured the client talks to that endpoint
    /// (typically DynamoDB Local) and the table is created if it is missing.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.dynamodb_endpoint {
            tracing::info!("Connecting to DynamoDB endpoint at: {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        } else {
            tracing::info!("Connecting to DynamoDB in region {}", config.aws_region);
        }

        let sdk_config = loader.load().await;
        let store = Self::new(Client::new(&sdk_config), &config.table_name);

        if config.dynamodb_endpoint.is_some() {
            store.ensure_table_exists().await?;
        }

        Ok(store)
    }

    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create the table if it does not exist and wait until it is active
    async fn ensure_table_exists(&self) -> Result<()> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => {
                tracing::info!("Table '{}' already exists", self.table_name);
                return Ok(());
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception()) =>
            {
                tracing::info!("Table '{}' not found, creating...", self.table_name);
            }
            Err(err) => {
                return Err(anyhow::anyhow!(
                    "Failed to check table existence: {}",
                    DisplayErrorContext(err)
                ));
            }
        }

        self.client
            .create_table()
            .table_name(&self.table_name)
            .billing_mode(BillingMode::PayPerRequest)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name("id")
                    .attribute_type(ScalarAttributeType::S)
                    .build()?,
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name("id")
                    .key_type(KeyType::Hash)
                    .build()?,
            )
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create table: {}", DisplayErrorContext(e)))?;

        for _ in 0..TABLE_READY_ATTEMPTS {
            let output = self
                .client
                .describe_table()
                .table_name(&self.table_name)
                .send()
                .await
                .map_err(|e| {
                    anyhow::anyhow!("Failed to poll table status: {}", DisplayErrorContext(e))
                })?;

            if output.table().and_then(|t| t.table_status()) == Some(&TableStatus::Active) {
                tracing::info!("Table '{}' created successfully", self.table_name);
                return Ok(());
            }
            tokio::time::sleep(TABLE_READY_INTERVAL).await;
        }

        Err(anyhow::anyhow!(
            "Table '{}' did not become active in time",
            self.table_name
        ))
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn scan(&self, limit: usize) -> Result<Vec<Todo>, StoreError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(i32::try_from(limit).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(|e| StoreError::backend(DisplayErrorContext(e)))?;

        let todos = output
            .items()
            .iter()
            .map(item_to_todo)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Scanned {} items from {}", todos.len(), self.table_name);
        Ok(todos)
    }

    async fn put_item(&self, todo: &Todo) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .send()
            .await
            .map_err(|e| StoreError::backend(DisplayErrorContext(e)))?;

        tracing::debug!("Put item with id: {}", todo.id);
        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::backend(DisplayErrorContext(e)))?;

        match output.item() {
            Some(item) => {
                tracing::debug!("Read item with id: {}", id);
                item_to_todo(item).map(Some)
            }
            None => {
                tracing::debug!("Item not found with id: {}", id);
                Ok(None)
            }
        }
    }

    async fn update_item(&self, id: &str, fields: &TodoFields) -> Result<(), StoreError> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression("SET #title = :title, #done = :done")
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#done", "done")
            .expression_attribute_values(":title", AttributeValue::S(fields.title.clone()))
            .expression_attribute_values(":done", AttributeValue::Bool(fields.done))
            .send()
            .await
            .map_err(|e| StoreError::backend(DisplayErrorContext(e)))?;

        tracing::debug!("Updated item with id: {}", id);
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::backend(DisplayErrorContext(e)))?;

        tracing::debug!("Deleted item with id: {}", id);
        Ok(())
    }
}

fn todo_to_item(todo: &Todo) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(todo.id.clone())),
        ("title".to_string(), AttributeValue::S(todo.title.clone())),
        ("done".to_string(), AttributeValue::Bool(todo.done)),
    ])
}

fn item_to_todo(item: &Item) -> Result<Todo, StoreError> {
    let string_attr = |name: &str| -> Result<String, StoreError> {
        item.get(name)
            .and_then(|v| v.as_s().ok())
            .cloned()
            .ok_or_else(|| StoreError::Malformed(format!("missing string attribute '{}'", name)))
    };

    let id = string_attr("id")?;
    let title = string_attr("title")?;
    let done = item
        .get("done")
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| {
            StoreError::Malformed(format!("item '{}' has no boolean attribute 'done'", id))
        })?;

    Ok(Todo { id, title, done })
}
