//! Presence validation of shop payloads.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned to clients when a create payload is incomplete.
pub const MISSING_FIELDS_MESSAGE: &str = "Todos los campos son obligatorios";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of `nombre`, `ubicacion`, `telefono` is absent or empty.
    #[error("Todos los campos son obligatorios (faltan: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// The path segment is not a whole integer.
    #[error("id de floreria invalido: '{0}'")]
    InvalidId(String),
}

/// The three user-supplied fields of a shop, as they arrive in a request body.
///
/// Nothing is checked here; a draft may carry absent fields. Updates under the
/// permissive write policy hand it to the store as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    as = FloreriaInput,
    example = json!({
        "nombre": "El girasol de Benja",
        "ubicacion": "Av 125",
        "telefono": "1222345"
    })
)]
pub struct ShopDraft {
    #[serde(rename = "nombre", default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(rename = "ubicacion", default, deserialize_with = "text_or_number")]
    pub location: Option<String>,
    #[serde(rename = "telefono", default, deserialize_with = "text_or_number")]
    pub phone: Option<String>,
}

/// A field value as clients send it: usually text, sometimes a bare number
/// (phones in particular).
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts a JSON string or number; numbers are kept as their decimal text.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

impl ShopDraft {
    /// Checks that every field is present and non-empty.
    ///
    /// All missing fields are reported, in column order.
    pub fn validate(self) -> Result<ShopFields, ValidationError> {
        let mut missing = Vec::new();
        let name = take_present(self.name, "nombre", &mut missing);
        let location = take_present(self.location, "ubicacion", &mut missing);
        let phone = take_present(self.phone, "telefono", &mut missing);

        match (name, location, phone) {
            (Some(name), Some(location), Some(phone)) => Ok(ShopFields {
                name,
                location,
                phone,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

fn take_present(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// A validated triple: every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopFields {
    pub name: String,
    pub location: String,
    pub phone: String,
}

impl From<ShopFields> for ShopDraft {
    fn from(fields: ShopFields) -> Self {
        Self {
            name: Some(fields.name),
            location: Some(fields.location),
            phone: Some(fields.phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: Option<&str>, location: Option<&str>, phone: Option<&str>) -> ShopDraft {
        ShopDraft {
            name: name.map(str::to_string),
            location: location.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let fields = draft(Some("Rosa"), Some("Centro"), Some("0055"))
            .validate()
            .unwrap();
        assert_eq!(fields.name, "Rosa");
        assert_eq!(fields.location, "Centro");
        assert_eq!(fields.phone, "0055");
    }

    #[test]
    fn absent_and_empty_fields_are_both_missing() {
        let err = draft(None, Some(""), Some("0055")).validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["nombre", "ubicacion"]));

        let err = ShopDraft::default().validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["nombre", "ubicacion", "telefono"])
        );
    }

    #[test]
    fn whitespace_is_not_treated_as_empty() {
        assert!(draft(Some(" "), Some("x"), Some("y")).validate().is_ok());
    }

    #[test]
    fn draft_deserializes_with_missing_keys() {
        let draft: ShopDraft = serde_json::from_str(r#"{"nombre":"Rosa"}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Rosa"));
        assert_eq!(draft.location, None);
        assert_eq!(draft.phone, None);
    }

    #[test]
    fn numbers_are_accepted_as_text() {
        let draft: ShopDraft =
            serde_json::from_str(r#"{"nombre":"Rosa","ubicacion":125,"telefono":1222345}"#)
                .unwrap();
        assert_eq!(draft.location.as_deref(), Some("125"));
        assert_eq!(draft.phone.as_deref(), Some("1222345"));
        assert!(draft.validate().is_ok());

        let draft: ShopDraft = serde_json::from_str(r#"{"telefono":null}"#).unwrap();
        assert_eq!(draft.phone, None);

        assert!(serde_json::from_str::<ShopDraft>(r#"{"telefono":true}"#).is_err());
    }

    #[test]
    fn missing_fields_message_names_fields() {
        let err = ValidationError::MissingFields(vec!["telefono"]);
        assert_eq!(
            err.to_string(),
            "Todos los campos son obligatorios (faltan: telefono)"
        );
    }
}
