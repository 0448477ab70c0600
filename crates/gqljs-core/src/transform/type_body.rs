use crate::parse::{
    IntrospectionEnumValue, IntrospectionField, IntrospectionInputValue, IntrospectionType,
    TypeKind,
};
use crate::schema::{JsonSchema, SchemaType};

use super::options::ConvertOptions;
use super::type_ref::{is_required, resolve_type_ref};

/// Build the schema body of a named type.
pub fn build_type(named: &IntrospectionType, options: &ConvertOptions) -> JsonSchema {
    let mut schema = JsonSchema {
        description: non_empty(&named.description),
        ..JsonSchema::typed(SchemaType::Object)
    };

    match named.kind {
        TypeKind::Object | TypeKind::Interface => {
            for field in &named.fields {
                schema
                    .properties
                    .insert(field.name.clone(), build_field(field, options));
            }
            schema.required = required_names(
                named
                    .fields
                    .iter()
                    .map(|f| (f.name.as_str(), is_required(&f.type_ref))),
            );
        }
        TypeKind::InputObject => {
            for input in &named.input_fields {
                schema
                    .properties
                    .insert(input.name.clone(), build_input_value(input, options));
            }
            schema.required = required_names(
                named
                    .input_fields
                    .iter()
                    .map(|f| (f.name.as_str(), is_required(&f.type_ref))),
            );
        }
        TypeKind::Enum => {
            schema.schema_type = Some(SchemaType::String.into());
            schema.any_of = named.enum_values.iter().map(enum_value_schema).collect();
        }
        TypeKind::Union => {
            schema.schema_type = None;
            schema.one_of = named
                .possible_types
                .iter()
                .filter_map(|t| t.name.as_deref())
                .map(JsonSchema::definition_ref)
                .collect();
        }
        _ => {}
    }

    schema
}

/// A field becomes `{ return, arguments }` so that callers can see both the
/// shape of the result and what must be passed to get it.
pub fn build_field(field: &IntrospectionField, options: &ConvertOptions) -> JsonSchema {
    let mut arguments = JsonSchema::typed(SchemaType::Object);
    for arg in &field.args {
        arguments
            .properties
            .insert(arg.name.clone(), build_input_value(arg, options));
    }
    arguments.required = required_names(
        field
            .args
            .iter()
            .map(|a| (a.name.as_str(), is_required(&a.type_ref))),
    );

    let mut schema = JsonSchema {
        description: non_empty(&field.description),
        ..JsonSchema::typed(SchemaType::Object)
    };
    schema
        .properties
        .insert("return".to_string(), resolve_type_ref(&field.type_ref, options));
    schema.properties.insert("arguments".to_string(), arguments);
    schema
}

/// Schema for an argument or input field.
///
/// The input's own description replaces whatever the resolved type carried.
/// `defaultValue` is attached when it parses as JSON; GraphQL-only literals
/// such as enum values or unquoted object keys are dropped.
pub fn build_input_value(input: &IntrospectionInputValue, options: &ConvertOptions) -> JsonSchema {
    let mut schema = resolve_type_ref(&input.type_ref, options);
    schema.description = non_empty(&input.description);

    if let Some(ref literal) = input.default_value {
        match serde_json::from_str::<serde_json::Value>(literal) {
            Ok(serde_json::Value::Null) => {}
            Ok(value) => schema.default_value = Some(value),
            Err(err) => log::debug!(
                "ignoring default {literal:?} for {}: {}: {err}",
                input.name,
                input.type_ref.to_type_string()
            ),
        }
    }

    schema
}

fn enum_value_schema(value: &IntrospectionEnumValue) -> JsonSchema {
    let description = non_empty(&value.description);
    JsonSchema {
        enum_values: vec![value.name.clone()],
        title: description.clone(),
        description,
        ..JsonSchema::default()
    }
}

fn required_names<'a>(members: impl Iterator<Item = (&'a str, bool)>) -> Vec<String> {
    members
        .filter(|(_, required)| *required)
        .map(|(name, _)| name.to_string())
        .collect()
}

fn non_empty(description: &Option<String>) -> Option<String> {
    description.as_ref().filter(|d| !d.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::TypeRef;
    use crate::schema::TypeSet;

    fn named_type(kind: TypeKind, name: &str) -> IntrospectionType {
        IntrospectionType {
            kind,
            name: name.to_string(),
            description: None,
            fields: vec![],
            input_fields: vec![],
            enum_values: vec![],
            possible_types: vec![],
        }
    }

    fn field(name: &str, type_ref: TypeRef) -> IntrospectionField {
        IntrospectionField {
            name: name.to_string(),
            description: None,
            args: vec![],
            type_ref,
        }
    }

    fn input(name: &str, type_ref: TypeRef, default_value: Option<&str>) -> IntrospectionInputValue {
        IntrospectionInputValue {
            name: name.to_string(),
            description: None,
            type_ref,
            default_value: default_value.map(str::to_string),
        }
    }

    fn scalar(name: &str) -> TypeRef {
        TypeRef::named(TypeKind::Scalar, name)
    }

    #[test]
    fn test_object_fields_and_required() {
        let mut user = named_type(TypeKind::Object, "User");
        user.description = Some("A user".to_string());
        user.fields = vec![
            field("id", TypeRef::non_null(scalar("ID"))),
            field("nickname", scalar("String")),
            field("tags", TypeRef::list(TypeRef::non_null(scalar("String")))),
        ];

        let schema = build_type(&user, &ConvertOptions::default());
        assert_eq!(schema.schema_type, Some(TypeSet::Single(SchemaType::Object)));
        assert_eq!(schema.description.as_deref(), Some("A user"));
        assert_eq!(
            schema.properties.keys().collect::<Vec<_>>(),
            vec!["id", "nickname", "tags"]
        );
        assert_eq!(schema.required, vec!["id"]);

        let id = &schema.properties["id"];
        assert_eq!(
            id.properties.keys().collect::<Vec<_>>(),
            vec!["return", "arguments"]
        );
        assert_eq!(
            id.properties["return"].schema_type,
            Some(TypeSet::Single(SchemaType::String))
        );
    }

    #[test]
    fn test_required_omitted_when_empty() {
        let mut obj = named_type(TypeKind::Interface, "Node");
        obj.fields = vec![field("id", scalar("ID"))];
        let schema = build_type(&obj, &ConvertOptions::default());
        assert!(schema.required.is_empty());
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("required").is_none());
    }

    #[test]
    fn test_field_arguments() {
        let mut f = field("users", TypeRef::list(TypeRef::named(TypeKind::Object, "User")));
        f.description = Some("List users".to_string());
        f.args = vec![
            input("first", TypeRef::non_null(scalar("Int")), Some("10")),
            input("after", scalar("String"), None),
        ];

        let schema = build_field(&f, &ConvertOptions::default());
        assert_eq!(schema.description.as_deref(), Some("List users"));

        let ret = &schema.properties["return"];
        assert_eq!(
            ret.items.as_deref(),
            Some(&JsonSchema::definition_ref("User"))
        );

        let args = &schema.properties["arguments"];
        assert_eq!(args.schema_type, Some(TypeSet::Single(SchemaType::Object)));
        assert_eq!(args.required, vec!["first"]);
        assert_eq!(
            args.properties["first"].default_value,
            Some(serde_json::json!(10))
        );
        // The argument has no description of its own, so the canned scalar text is cleared.
        assert_eq!(args.properties["after"].description, None);
    }

    #[test]
    fn test_field_without_arguments_still_has_arguments_node() {
        let schema = build_field(&field("ping", scalar("Boolean")), &ConvertOptions::default());
        assert_eq!(
            schema.properties["arguments"],
            JsonSchema::typed(SchemaType::Object)
        );
    }

    #[test]
    fn test_input_object() {
        let mut filter = named_type(TypeKind::InputObject, "UserFilter");
        filter.input_fields = vec![
            input("name", TypeRef::non_null(scalar("String")), None),
            input("limit", scalar("Int"), Some("25")),
        ];
        filter.input_fields[0].description = Some("Exact name".to_string());

        let schema = build_type(&filter, &ConvertOptions::default());
        assert_eq!(schema.required, vec!["name"]);
        assert_eq!(
            schema.properties["name"].description.as_deref(),
            Some("Exact name")
        );
        assert_eq!(
            schema.properties["limit"].default_value,
            Some(serde_json::json!(25))
        );
        // Input fields are plain values, not `{ return, arguments }`.
        assert!(schema.properties["name"].properties.is_empty());
    }

    #[test]
    fn test_unparsable_default_is_dropped() {
        let value = input("status", TypeRef::named(TypeKind::Enum, "Status"), Some("ACTIVE"));
        let schema = build_input_value(&value, &ConvertOptions::default());
        assert_eq!(schema.default_value, None);
        assert_eq!(schema.ref_path.as_deref(), Some("#/definitions/Status"));
    }

    #[test]
    fn test_structured_default() {
        let value = input("ids", TypeRef::list(scalar("ID")), Some(r#"["a", "b"]"#));
        let schema = build_input_value(&value, &ConvertOptions::default());
        assert_eq!(schema.default_value, Some(serde_json::json!(["a", "b"])));
    }

    #[test]
    fn test_enum() {
        let mut color = named_type(TypeKind::Enum, "Color");
        color.enum_values = vec![
            IntrospectionEnumValue {
                name: "RED".to_string(),
                description: Some("Warm".to_string()),
            },
            IntrospectionEnumValue {
                name: "BLUE".to_string(),
                description: None,
            },
        ];

        let schema = build_type(&color, &ConvertOptions::default());
        assert_eq!(schema.schema_type, Some(TypeSet::Single(SchemaType::String)));
        assert_eq!(schema.any_of.len(), 2);
        assert_eq!(schema.any_of[0].enum_values, vec!["RED"]);
        assert_eq!(schema.any_of[0].title.as_deref(), Some("Warm"));
        assert_eq!(schema.any_of[0].description.as_deref(), Some("Warm"));
        assert_eq!(schema.any_of[1].enum_values, vec!["BLUE"]);
        assert_eq!(schema.any_of[1].title, None);
        assert!(schema.properties.is_empty());
    }

    #[test]
    fn test_union_has_no_type() {
        let mut result = named_type(TypeKind::Union, "SearchResult");
        result.description = Some("Anything searchable".to_string());
        result.possible_types = vec![
            TypeRef::named(TypeKind::Object, "User"),
            TypeRef::named(TypeKind::Object, "Post"),
        ];

        let schema = build_type(&result, &ConvertOptions::default());
        assert_eq!(schema.schema_type, None);
        assert_eq!(
            schema.one_of,
            vec![
                JsonSchema::definition_ref("User"),
                JsonSchema::definition_ref("Post")
            ]
        );
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_scalar_type_body_is_bare_object() {
        let mut date = named_type(TypeKind::Scalar, "Date");
        date.description = Some(String::new());
        assert_eq!(
            build_type(&date, &ConvertOptions::default()),
            JsonSchema::typed(SchemaType::Object)
        );
    }
}
