pub mod introspection;
pub mod query;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
pub use introspection::{
    IntrospectionEnumValue, IntrospectionField, IntrospectionInputValue, IntrospectionQuery,
    IntrospectionSchema, IntrospectionType, RootTypeRef, TypeKind, TypeRef,
};

/// A GraphQL response envelope: `{ "data": ..., "errors": [...] }`.
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

/// Parse an introspection result from JSON.
///
/// Accepts either the bare `{"__schema": ...}` document or a full GraphQL
/// response envelope wrapping it.
pub fn from_json(input: &str) -> Result<IntrospectionQuery, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Same as [`from_json`], starting from an already parsed JSON value.
pub fn from_value(value: Value) -> Result<IntrospectionQuery, ParseError> {
    if value.get("__schema").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    if value.get("data").is_some() || value.get("errors").is_some() {
        return from_response(value);
    }
    Err(ParseError::MissingSchema)
}

/// Unwrap the introspection document from a GraphQL response envelope.
///
/// GraphQL-level errors take precedence over any partial `data`.
pub fn from_response(value: Value) -> Result<IntrospectionQuery, ParseError> {
    let response: GraphQlResponse = serde_json::from_value(value)?;

    if let Some(first) = response.errors.as_ref().and_then(|errors| errors.first()) {
        return Err(ParseError::GraphQl(first.message.clone()));
    }

    match response.data {
        Some(Value::Null) | None => Err(ParseError::MissingData),
        Some(data) if data.get("__schema").is_some() => Ok(serde_json::from_value(data)?),
        Some(_) => Err(ParseError::MissingSchema),
    }
}
