use serde::{Deserialize, Deserializer, Serialize};

/// Root of an introspection result: `{ "__schema": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionQuery {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// The `__schema` object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<RootTypeRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_type: Option<RootTypeRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<RootTypeRef>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub types: Vec<IntrospectionType>,
}

impl IntrospectionSchema {
    /// Find a named type. The first occurrence wins when names repeat.
    pub fn find_type(&self, name: &str) -> Option<&IntrospectionType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_ref().map(|t| t.name.as_str())
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(|t| t.name.as_str())
    }
}

/// `queryType { name }` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTypeRef {
    pub name: String,
}

/// The `__TypeKind` enum. Kinds this crate does not know about land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[serde(other)]
    Other,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
            TypeKind::Other => "OTHER",
        }
    }
}

/// A named type declared in the schema.
///
/// Introspection reports `null` for member lists that do not apply to the
/// kind (e.g. `fields` on an ENUM); those deserialize as empty vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: TypeKind,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub fields: Vec<IntrospectionField>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub input_fields: Vec<IntrospectionInputValue>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub enum_values: Vec<IntrospectionEnumValue>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub possible_types: Vec<TypeRef>,
}

impl IntrospectionType {
    /// Types reserved by the introspection system itself (`__Schema`, `__Type`, ...).
    pub fn is_internal(&self) -> bool {
        self.name.starts_with("__")
    }
}

/// A field on an OBJECT or INTERFACE type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionField {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub args: Vec<IntrospectionInputValue>,

    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// A field argument or an INPUT_OBJECT field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub type_ref: TypeRef,

    /// The default as printed by the server, e.g. `"10"` or `"\"abc\""`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrospectionEnumValue {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A type reference: a chain of `NON_NULL` / `LIST` wrappers ending in a named type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn named(kind: TypeKind, name: &str) -> Self {
        Self {
            kind,
            name: Some(name.to_string()),
            of_type: None,
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Render the reference in SDL notation, e.g. `[String!]!`.
    pub fn to_type_string(&self) -> String {
        match self.kind {
            TypeKind::NonNull => self
                .of_type
                .as_ref()
                .map_or_else(|| "!".to_string(), |inner| format!("{}!", inner.to_type_string())),
            TypeKind::List => self
                .of_type
                .as_ref()
                .map_or_else(|| "[]".to_string(), |inner| format!("[{}]", inner.to_type_string())),
            _ => self.name.clone().unwrap_or_default(),
        }
    }
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
