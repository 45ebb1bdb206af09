//! Lodging record and its validated draft
//!
//! `LodgingInput` is the raw request shape (everything optional);
//! `NewLodging` is what survives validation; `Lodging` adds the
//! store-assigned id.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Description substituted when a request omits one
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// A lodging record as stored and served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Lodging {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(rename = "ownerID")]
    pub owner_id: i64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Validated lodging draft, ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewLodging {
    pub name: String,
    pub price: f64,
    pub owner_id: i64,
    pub description: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl NewLodging {
    /// Attach a store-assigned id.
    pub fn into_lodging(self, id: i64) -> Lodging {
        Lodging {
            id,
            name: self.name,
            price: self.price,
            owner_id: self.owner_id,
            description: self.description,
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
        }
    }
}

/// Raw lodging fields as they arrive in a request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LodgingInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "ownerID")]
    pub owner_id: Option<i64>,
    pub description: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl LodgingInput {
    /// Validate into a draft.
    ///
    /// # Rules
    /// - `name`, `price`, `ownerID` must all be present
    /// - `name` must be non-empty
    /// - `price` must be a positive, finite number
    /// - an absent or empty `description` becomes [`DEFAULT_DESCRIPTION`]
    pub fn validate(self) -> Result<NewLodging, ValidationError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.owner_id.is_none() {
            missing.push("ownerID");
        }

        let (Some(name), Some(price), Some(owner_id)) = (self.name, self.price, self.owner_id)
        else {
            return Err(ValidationError::MissingFields { fields: missing });
        };

        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::NotPositive { field: "price" });
        }

        Ok(NewLodging {
            name,
            price,
            owner_id,
            description: self
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
        })
    }
}
