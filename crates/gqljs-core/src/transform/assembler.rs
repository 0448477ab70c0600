use std::collections::HashSet;

use crate::parse::{IntrospectionQuery, IntrospectionSchema};
use crate::schema::JsonSchema;

use super::options::ConvertOptions;
use super::type_body::build_type;

const QUERY: &str = "Query";
const MUTATION: &str = "Mutation";

/// Convert an introspection result into a Draft-06 JSON Schema document.
///
/// Root operation types go under `properties.Query` / `properties.Mutation`;
/// every other named type goes under `definitions`. Never fails: anything the
/// converter cannot make sense of is left out or emitted as an empty node.
pub fn convert(introspection: &IntrospectionQuery, options: &ConvertOptions) -> JsonSchema {
    let schema = &introspection.schema;
    let mut root = JsonSchema::root();

    let roots = [
        (QUERY, schema.query_type_name()),
        (MUTATION, schema.mutation_type_name()),
    ];
    for (key, type_name) in roots {
        let Some(type_name) = type_name else {
            continue;
        };
        match schema.find_type(type_name) {
            Some(root_type) => {
                root.properties
                    .insert(key.to_string(), build_type(root_type, options));
            }
            None => log::debug!("{key} root type {type_name} not found among types"),
        }
    }

    let mut seen = HashSet::new();
    for named in &schema.types {
        if options.ignore_internals && named.is_internal() {
            continue;
        }
        if is_root_type(schema, &named.name) {
            continue;
        }
        if !seen.insert(named.name.as_str()) {
            log::warn!("duplicate type {} ignored; keeping first definition", named.name);
            continue;
        }
        root.definitions
            .insert(named.name.clone(), build_type(named, options));
    }

    log::debug!(
        "converted {} types into {} definitions",
        schema.types.len(),
        root.definitions.len()
    );

    root
}

/// Root types are emitted under `properties`, never under `definitions`.
///
/// The literal names `Query` and `Mutation` are always treated as roots, so
/// those keys cannot appear in `definitions` even when a schema declares its
/// roots under other names.
fn is_root_type(schema: &IntrospectionSchema, name: &str) -> bool {
    name == QUERY
        || name == MUTATION
        || schema.query_type_name() == Some(name)
        || schema.mutation_type_name() == Some(name)
}
