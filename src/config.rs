use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_TABLE_NAME: &str = "todos-dev";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub aws_region: String,
    pub dynamodb_endpoint: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("TABLE_NAME")
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let aws_region = lookup("AWS_REGION")
            .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());

        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT").filter(|v| !v.is_empty());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            table_name,
            aws_region,
            dynamodb_endpoint,
            service_port,
            service_host,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  DynamoDB table: {}", self.table_name);
        tracing::info!("  AWS region: {}", self.aws_region);
        tracing::info!("  DynamoDB endpoint: {}",
            self.dynamodb_endpoint.as_deref().unwrap_or("default (using AWS)"));
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
