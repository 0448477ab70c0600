use crate::schema::{JsonSchema, SchemaType, TypeSet};

use super::options::IdTypeMapping;

const ID_DESCRIPTION: &str = "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for a cache. The ID type appears in a JSON response as a String; however, it is not intended to be human-readable. When expected as an input type, any string (such as `\"4\"`) or integer (such as `4`) input value will be accepted as an ID.";

const STRING_DESCRIPTION: &str = "The `String` scalar type represents textual data, represented as UTF-8 character sequences. The String type is most often used by GraphQL to represent free-form human-readable text.";

const BOOLEAN_DESCRIPTION: &str = "The `Boolean` scalar type represents `true` or `false`.";

/// Map a GraphQL scalar name to a JSON Schema leaf.
///
/// Custom scalars carry only their name as `title`; they have no `type`.
pub fn map_scalar(name: &str, id_type_mapping: IdTypeMapping) -> JsonSchema {
    match name {
        "ID" => {
            let schema_type = match id_type_mapping {
                IdTypeMapping::String => TypeSet::Single(SchemaType::String),
                IdTypeMapping::Number => TypeSet::Single(SchemaType::Number),
                IdTypeMapping::Both => {
                    TypeSet::Multiple(vec![SchemaType::String, SchemaType::Number])
                }
            };
            described(schema_type, ID_DESCRIPTION)
        }
        "String" => described(SchemaType::String.into(), STRING_DESCRIPTION),
        "Int" | "Float" => JsonSchema::typed(SchemaType::Number),
        "Boolean" => described(SchemaType::Boolean.into(), BOOLEAN_DESCRIPTION),
        custom => JsonSchema {
            title: Some(custom.to_string()),
            ..JsonSchema::default()
        },
    }
}

fn described(schema_type: TypeSet, description: &str) -> JsonSchema {
    JsonSchema {
        schema_type: Some(schema_type),
        description: Some(description.to_string()),
        ..JsonSchema::default()
    }
}
