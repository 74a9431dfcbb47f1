use super::{FieldError, ValidationFailure};
use crate::entities::ItemStatus;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// Incoming item payload. `wishlist_id` always comes from the request path,
/// so a body value is deliberately not modeled here.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub status: Option<String>,
}

/// A fully validated item ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub status: ItemStatus,
}

impl ItemPayload {
    /// Validates the payload, collecting one error per offending field.
    pub fn validate(self) -> Result<NewItem, ValidationFailure> {
        let mut errors = Vec::new();

        let name = require_text("name", self.name, &mut errors);
        let description = require_text("description", self.description, &mut errors);
        let price = validate_price(self.price, &mut errors);

        let status = match self.status.as_deref() {
            None => Some(ItemStatus::default()),
            Some(raw) => match ItemStatus::parse(raw) {
                Some(status) => Some(status),
                None => {
                    errors.push(FieldError::new(
                        "status",
                        format!(
                            "Invalid status '{}': must be one of {}",
                            raw,
                            ItemStatus::ALLOWED.join(", ")
                        ),
                    ));
                    None
                }
            },
        };

        match (name, description, price, status) {
            (Some(name), Some(description), Some(price), Some(status)) => Ok(NewItem {
                name,
                description,
                price,
                status,
            }),
            _ => Err(ValidationFailure::new(errors)),
        }
    }
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        Some(_) => {
            errors.push(FieldError::new(
                field,
                format!("Invalid Item: '{field}' must be a non-empty string"),
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                field,
                format!("Invalid Item: missing {field}"),
            ));
            None
        }
    }
}

fn validate_price(value: Option<Value>, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    let bad_price = || FieldError::new("price", "Invalid Item: 'price' must be a positive number");

    let Some(value) = value else {
        errors.push(FieldError::new("price", "Invalid Item: missing price"));
        return None;
    };

    let Some(number) = value.as_f64() else {
        errors.push(bad_price());
        return None;
    };

    if number <= 0.0 {
        errors.push(bad_price());
        return None;
    }

    match Decimal::try_from(number) {
        Ok(price) => Some(price),
        Err(_) => {
            errors.push(bad_price());
            None
        }
    }
}
