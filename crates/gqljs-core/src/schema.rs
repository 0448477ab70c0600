use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema identifier placed on the root of every generated document.
pub const DRAFT_06: &str = "http://json-schema.org/draft-06/schema#";

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

/// The `type` field can be a single type or an array of types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(SchemaType),
    Multiple(Vec<SchemaType>),
}

impl From<SchemaType> for TypeSet {
    fn from(t: SchemaType) -> Self {
        TypeSet::Single(t)
    }
}

/// A JSON Schema (Draft-06) node.
///
/// Field order here is the key order of the serialized output. Maps keep
/// insertion order so repeated conversions serialize identically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JsonSchema {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeSet>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, JsonSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,

    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, JsonSchema>,

    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<JsonSchema>,

    #[serde(rename = "oneOf", default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<JsonSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

impl JsonSchema {
    /// An empty root document tagged with the Draft-06 identifier.
    pub fn root() -> Self {
        Self {
            schema: Some(DRAFT_06.to_string()),
            ..Self::default()
        }
    }

    /// A node with only a `type`.
    pub fn typed(t: impl Into<TypeSet>) -> Self {
        Self {
            schema_type: Some(t.into()),
            ..Self::default()
        }
    }

    /// `{"$ref": "#/definitions/<name>"}`.
    pub fn definition_ref(name: &str) -> Self {
        Self {
            ref_path: Some(definition_path(name)),
            ..Self::default()
        }
    }

    /// True when the node carries no keywords at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// JSON pointer to a named entry under `definitions`.
pub fn definition_path(name: &str) -> String {
    format!("#/definitions/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_members_are_omitted() {
        let json = serde_json::to_string(&JsonSchema::typed(SchemaType::Object)).unwrap();
        assert_eq!(json, r#"{"type":"object"}"#);
        assert_eq!(serde_json::to_string(&JsonSchema::default()).unwrap(), "{}");
    }

    #[test]
    fn test_multiple_types_serialize_as_array() {
        let node = JsonSchema::typed(TypeSet::Multiple(vec![
            SchemaType::String,
            SchemaType::Number,
        ]));
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"type":["string","number"]}"#);
    }

    #[test]
    fn test_keyword_names() {
        let mut node = JsonSchema::root();
        node.ref_path = Some(definition_path("User"));
        node.any_of.push(JsonSchema::typed(SchemaType::Null));
        node.default_value = Some(serde_json::json!(3));
        node.enum_values.push("RED".to_string());
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["$schema"], DRAFT_06);
        assert_eq!(value["$ref"], "#/definitions/User");
        assert_eq!(value["anyOf"][0]["type"], "null");
        assert_eq!(value["default"], 3);
        assert_eq!(value["enum"][0], "RED");
    }
}
