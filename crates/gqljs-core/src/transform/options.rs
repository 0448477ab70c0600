use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How the GraphQL `ID` scalar is typed in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdTypeMapping {
    #[default]
    String,
    Number,
    /// `["string", "number"]`
    Both,
}

impl IdTypeMapping {
    pub const ALL: [IdTypeMapping; 3] = [Self::String, Self::Number, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdTypeMapping::String => "string",
            IdTypeMapping::Number => "number",
            IdTypeMapping::Both => "both",
        }
    }
}

impl fmt::Display for IdTypeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdTypeMapping {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidIdTypeMapping(s.to_string()))
    }
}

/// Options controlling a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Leave `__`-prefixed introspection types out of `definitions`.
    pub ignore_internals: bool,
    /// Emit `anyOf [item, null]` for list elements that GraphQL allows to be null.
    pub nullable_array_items: bool,
    pub id_type_mapping: IdTypeMapping,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            ignore_internals: true,
            nullable_array_items: false,
            id_type_mapping: IdTypeMapping::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert!(options.ignore_internals);
        assert!(!options.nullable_array_items);
        assert_eq!(options.id_type_mapping, IdTypeMapping::String);
    }

    #[test]
    fn test_parse_id_type_mapping() {
        assert_eq!("string".parse::<IdTypeMapping>().unwrap(), IdTypeMapping::String);
        assert_eq!("number".parse::<IdTypeMapping>().unwrap(), IdTypeMapping::Number);
        assert_eq!("both".parse::<IdTypeMapping>().unwrap(), IdTypeMapping::Both);
    }

    #[test]
    fn test_reject_unknown_id_type_mapping() {
        match "uuid".parse::<IdTypeMapping>() {
            Err(ConfigError::InvalidIdTypeMapping(value)) => assert_eq!(value, "uuid"),
            other => panic!("expected InvalidIdTypeMapping, got {other:?}"),
        }
        // Matching is exact.
        assert!("String".parse::<IdTypeMapping>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mapping in IdTypeMapping::ALL {
            assert_eq!(mapping.to_string().parse::<IdTypeMapping>().unwrap(), mapping);
        }
    }
}
