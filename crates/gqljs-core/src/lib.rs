pub mod config;
pub mod error;
pub mod parse;
pub mod schema;
pub mod transform;

pub use schema::JsonSchema;
pub use transform::{ConvertOptions, IdTypeMapping, convert};

/// Parse an introspection result from JSON and convert it in one step.
pub fn convert_json(input: &str, options: &ConvertOptions) -> Result<JsonSchema, error::ParseError> {
    let introspection = parse::from_json(input)?;
    Ok(convert(&introspection, options))
}
