//! Domain types for the flower shop catalog.
//!
//! Field names on the wire and in the `florerias` table are the Spanish ones
//! (`idfloreria`, `nombre`, `ubicacion`, `telefono`); the Rust side uses
//! English names and maps them with serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

pub mod validation;

pub use validation::{ShopDraft, ShopFields, ValidationError};

/// Server-assigned primary key of a shop (`idfloreria`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(i32);

impl ShopId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an id taken from a request path.
///
/// Only a whole `i32` is accepted: trailing garbage such as `12abc` is
/// rejected instead of being truncated to `12`.
impl FromStr for ShopId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(ShopId)
            .map_err(|_| ValidationError::InvalidId(s.to_string()))
    }
}

/// A persisted flower shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    as = Floreria,
    example = json!({
        "idfloreria": 1,
        "nombre": "El girasol de Benja",
        "ubicacion": "Av 125",
        "telefono": "1222345"
    })
)]
pub struct ShopRecord {
    /// Auto-incremented id of the shop.
    #[serde(rename = "idfloreria")]
    #[schema(value_type = i32)]
    pub id: ShopId,
    /// Name of the shop.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Address or free-form description of where the shop is.
    #[serde(rename = "ubicacion")]
    pub location: String,
    /// Phone number, kept as text so formatting and leading zeros survive.
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl ShopRecord {
    pub fn new(id: ShopId, fields: ShopFields) -> Self {
        Self {
            id,
            name: fields.name,
            location: fields.location,
            phone: fields.phone,
        }
    }
}
