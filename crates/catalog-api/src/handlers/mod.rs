//! Route handlers organized by domain.

pub mod fallback;
pub mod health;
pub mod product;
