//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{PatchProductRequest, ProductRequest};
pub use response::{HealthResponse, MessageResponse, ProductCreatedResponse};
