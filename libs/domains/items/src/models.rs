use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_date_format;

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned on create and never reused
    pub id: u64,
    /// Item name
    #[schema(example = "Quarterly review")]
    pub name: String,
    /// Calendar date in dd-mm-yyyy form
    #[schema(example = "29-02-2024")]
    pub date: String,
}

/// Request body for create and update.
///
/// Both fields are optional here so an absent field surfaces as the domain's
/// "required" error instead of a JSON decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct ItemInput {
    #[validate(required, length(min = 1))]
    #[schema(example = "Quarterly review")]
    pub name: Option<String>,
    #[validate(required, length(min = 1), custom(function = "validate_date_format"))]
    #[schema(example = "29-02-2024")]
    pub date: Option<String>,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            date: Some(date.into()),
        }
    }
}

/// Name and date that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub date: String,
}

impl Item {
    pub fn new(id: u64, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            date: fields.date,
        }
    }

    /// Replace name and date, keeping the id.
    pub fn apply_update(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.date = fields.date;
    }
}
