//! # catalog-entity
//!
//! Domain entity models for the product catalog. Row types derive
//! `sqlx::FromRow`; write models carry only the fields a caller may set.

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
