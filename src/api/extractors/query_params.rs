//! Query string extractor with first-value semantics.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Query string extractor that rejects with the JSON error body.
///
/// A repeated key keeps its first value (`?id=a&id=b` reads `id` as `a`).
/// Every value arrives as a string, so `T` is expected to hold
/// `String` / `Option<String>` fields.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e.body_text(), "Rejected query string");
                AppError::bad_request("invalid query string")
            })?;

        Ok(QueryParams(from_pairs(pairs)?))
    }
}

fn from_pairs<T: DeserializeOwned>(pairs: Vec<(String, String)>) -> Result<T, AppError> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        tracing::warn!(error = %e, "Rejected query parameters");
        AppError::bad_request("invalid query string")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Lookup {
        id: Option<String>,
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let lookup: Lookup = from_pairs(pairs(&[("id", "a"), ("id", "b")])).unwrap();
        assert_eq!(lookup.id.as_deref(), Some("a"));
    }

    #[test]
    fn test_absent_and_unknown_keys() {
        let lookup: Lookup = from_pairs(pairs(&[("other", "x")])).unwrap();
        assert!(lookup.id.is_none());
    }
}
