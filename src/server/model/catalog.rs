//! Pieces shared by the four catalog resources.

use crate::{
    model::catalog::{CatalogStatus, ItemKind},
    server::error::AppError,
};

/// The part of a class, program or membership an order needs.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderableItem {
    pub kind: ItemKind,
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub status: CatalogStatus,
}

pub(crate) fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    Ok(())
}

pub(crate) fn require_price(price: i64) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::BadRequest(
            "Price cannot be negative".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &str, value: i32) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}
