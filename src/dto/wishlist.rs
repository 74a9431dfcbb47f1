use super::{FieldError, ItemPayload, NewItem, ValidationFailure};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

pub const DATE_FORMAT_HINT: &str = "Invalid date format. Use YYYY-MM-DD format.";

/// Incoming wishlist payload, possibly carrying nested items to create
/// together with the wishlist.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WishlistPayload {
    pub name: Option<String>,
    pub userid: Option<String>,
    pub date_created: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemPayload>,
}

/// A fully validated wishlist ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWishlist {
    pub name: String,
    pub userid: String,
    pub date_created: NaiveDate,
    pub items: Vec<NewItem>,
}

impl WishlistPayload {
    /// Validates the payload, collecting one error per offending field.
    /// `date_created` defaults to the current day when absent.
    pub fn validate(self) -> Result<NewWishlist, ValidationFailure> {
        let mut errors = Vec::new();

        let name = require_text("name", self.name, &mut errors);
        let userid = require_text("userid", self.userid, &mut errors);

        let date_created = match self.date_created.as_deref() {
            None => Some(Utc::now().date_naive()),
            Some(raw) => match parse_date(raw) {
                Ok(date) => Some(date),
                Err(message) => {
                    errors.push(FieldError::new("date_created", message));
                    None
                }
            },
        };

        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            match item.validate() {
                Ok(item) => items.push(item),
                Err(failure) => errors.extend(failure.into_errors()),
            }
        }

        match (name, userid, date_created) {
            (Some(name), Some(userid), Some(date_created)) if errors.is_empty() => {
                Ok(NewWishlist {
                    name,
                    userid,
                    date_created,
                    items,
                })
            }
            _ => Err(ValidationFailure::new(errors)),
        }
    }
}

/// Parses an ISO-8601 calendar date, with the same hint message the query
/// filters use.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DATE_FORMAT_HINT.to_string())
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
                format!("Invalid Wishlist: '{field}' must be a non-empty string"),
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                field,
                format!("Invalid Wishlist: missing {field}"),
            ));
            None
        }
    }
}
