//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use catalog_core::error::AppError;

use crate::error::ApiError;

pub const INVALID_PRODUCT_ID: &str = "invalid product ID";

/// Parses a product id from a path segment.
pub fn parse_product_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(INVALID_PRODUCT_ID))
}

/// The `{id}` segment of a product route, parsed as a 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation(INVALID_PRODUCT_ID))?;
        Ok(Self(parse_product_id(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("42").unwrap(), 42);
        assert_eq!(parse_product_id("0").unwrap(), 0);
        assert!(parse_product_id("abc").is_err());
        assert!(parse_product_id("1.5").is_err());
        assert!(parse_product_id("").is_err());
        assert!(parse_product_id("99999999999999999999").is_err());
    }
}
