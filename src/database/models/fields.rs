//! Request-field helpers shared by every request shape.
//!
//! Request structs declare each field as `Option` so that an absent key is
//! reported as [`AppError::IncompleteData`] by `validate`, while a present key
//! with the wrong type fails deserialization and surfaces as
//! [`AppError::InvalidFormat`].

use serde::{Deserialize, Deserializer, de::Error as _};

use crate::error::AppError;

pub fn required<T>(value: Option<T>) -> Result<T, AppError> {
    value.ok_or(AppError::IncompleteData)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accepts an integer id given as a JSON number or a numeric string.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Int(value)) => Ok(Some(value)),
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
        Some(Numeric::Float(value))
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(Some(value as i64))
        }
        Some(Numeric::Float(value)) => Err(D::Error::custom(format!(
            "{} no es un identificador entero",
            value
        ))),
        Some(Numeric::Text(text)) => text.trim().parse::<i64>().map(Some).map_err(|_| {
            D::Error::custom(format!("'{}' no es un identificador entero", text))
        }),
    }
}

/// Accepts a decimal quantity given as a JSON number or a numeric string.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Int(value)) => Ok(Some(value as f64)),
        Some(Numeric::Float(value)) => Ok(Some(value)),
        Some(Numeric::Text(text)) => match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(D::Error::custom(format!("'{}' no es un número válido", text))),
        },
    }
}
