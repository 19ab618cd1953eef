//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use catalog_core::error::AppError;
use catalog_entity::product::{NewProduct, ProductPatch};

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";

/// Body of create and full-update requests.
///
/// Absent or `null` fields decode to empty/zero and are then rejected by
/// validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    /// Product name.
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Unit price.
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,
}

impl ProductRequest {
    /// Validates the request and converts it into a write model.
    ///
    /// The name rule is reported before the price rule.
    pub fn into_new_product(self) -> Result<NewProduct, AppError> {
        self.validate().map_err(|errors| first_error(&errors))?;
        Ok(NewProduct {
            name: self.name,
            price: self.price,
        })
    }
}

/// Body of a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchProductRequest {
    /// Replacement name; empty means unchanged.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement price; zero means unchanged.
    #[serde(default)]
    pub price: Option<f64>,
}

impl PatchProductRequest {
    /// Drops empty/zero fields and rejects a negative price.
    pub fn into_patch(self) -> Result<ProductPatch, AppError> {
        let name = self.name.filter(|name| !name.is_empty());
        let price = self.price.filter(|price| *price != 0.0);

        if let Some(price) = price {
            if price <= 0.0 {
                return Err(AppError::validation(PRICE_NOT_POSITIVE));
            }
        }

        Ok(ProductPatch { name, price })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Picks the message of the first failing field, in field order.
fn first_error(errors: &ValidationErrors) -> AppError {
    let fields = errors.field_errors();
    let message = ["name", "price"]
        .iter()
        .find_map(|field| {
            fields
                .get(*field)
                .and_then(|errs| errs.first())
                .and_then(|err| err.message.as_ref())
        })
        .map(|message| message.to_string())
        .unwrap_or_else(|| "Invalid input".to_string());
    AppError::validation(message)
}
