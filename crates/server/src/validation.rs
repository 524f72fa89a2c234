//! Field-level checks on request bodies before anything reaches a service.

use std::fmt;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Ordered `(field, message)` violations, rendered as `field: message; ...`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|(f, _)| *f).collect()
    }

    /// A present, non-blank string no longer than `max` characters.
    pub fn text(&mut self, field: &'static str, value: Option<String>, max: usize) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => {
                if v.chars().count() > max {
                    self.push(field, format!("{} must be at most {} characters", field, max));
                    None
                } else {
                    Some(v)
                }
            }
            _ => {
                self.push(field, format!("{} is required", field));
                None
            }
        }
    }

    pub fn required<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, format!("{} is required", field));
        }
        value
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// A request body that can be checked into a trusted shape.
pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, FieldErrors>;
}

/// Extracts JSON and runs [`Validate`]; both kinds of failure answer 400.
pub struct ValidJson<T: Validate>(pub T::Valid);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned + Send,
    T::Valid: Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload
            .validate()
            .map(ValidJson)
            .map_err(|errors| ApiError::InvalidBody(errors.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let mut errors = FieldErrors::default();
        errors.push("name", "name is required");
        errors.push("age", "age must be between 0 and 100");
        assert_eq!(errors.to_string(), "name: name is required; age: age must be between 0 and 100");
    }

    #[test]
    fn text_rejects_blank_and_long_values() {
        let mut errors = FieldErrors::default();
        assert_eq!(errors.text("breed", Some("  ".into()), 10), None);
        assert_eq!(errors.text("color", Some("x".repeat(11)), 10), None);
        assert_eq!(errors.text("diagnosis", Some("ok".into()), 10), Some("ok".into()));
        assert_eq!(errors.fields(), vec!["breed", "color"]);
        assert_eq!(errors.to_string(), "breed: breed is required; color: color must be at most 10 characters");
    }

    #[test]
    fn empty_set_renders_nothing() {
        let errors = FieldErrors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "");
    }
}
