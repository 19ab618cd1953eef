//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body returned by a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedResponse {
    /// Id assigned to the new product.
    pub id: i64,
    /// Confirmation message.
    pub message: String,
}

impl ProductCreatedResponse {
    /// Creates the response for a freshly inserted product.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            message: "Product created successfully".to_string(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database status.
    pub database: String,
}
