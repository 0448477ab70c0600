use crate::parse::{TypeKind, TypeRef};
use crate::schema::{JsonSchema, SchemaType};

use super::options::ConvertOptions;
use super::scalar::map_scalar;

/// Resolve a type reference chain into a JSON Schema node.
///
/// `NON_NULL` is transparent here; it only decides whether the enclosing
/// field lands in `required` (see [`is_required`]). Named non-scalar types
/// become `$ref`s into `definitions`. A chain that cannot be resolved yields
/// an empty node.
pub fn resolve_type_ref(type_ref: &TypeRef, options: &ConvertOptions) -> JsonSchema {
    match (type_ref.kind, type_ref.of_type.as_deref(), type_ref.name.as_deref()) {
        (TypeKind::NonNull, Some(inner), _) => resolve_type_ref(inner, options),
        (TypeKind::NonNull, None, _) => {
            log::debug!("NON_NULL reference without ofType");
            JsonSchema::default()
        }
        (TypeKind::List, Some(inner), _) => {
            let items = resolve_type_ref(inner, options);
            let items = if options.nullable_array_items && !is_required(inner) {
                JsonSchema {
                    any_of: vec![items, JsonSchema::typed(SchemaType::Null)],
                    ..JsonSchema::default()
                }
            } else {
                items
            };
            JsonSchema {
                items: Some(Box::new(items)),
                ..JsonSchema::typed(SchemaType::Array)
            }
        }
        (TypeKind::List, None, _) => JsonSchema::typed(SchemaType::Array),
        (TypeKind::Scalar, _, Some(name)) => map_scalar(name, options.id_type_mapping),
        (_, _, Some(name)) => JsonSchema::definition_ref(name),
        (kind, _, None) => {
            log::debug!("unnamed {} reference", kind.as_str());
            JsonSchema::default()
        }
    }
}

/// Whether a field or argument of this type must be present.
///
/// Only the outermost wrapper counts: `[String!]` is optional, `[String]!` is not.
pub fn is_required(type_ref: &TypeRef) -> bool {
    type_ref.kind == TypeKind::NonNull
}
