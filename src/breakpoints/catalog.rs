use leptos::logging::warn;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, UtilsError};

/// A single stylesheet-declared breakpoint. Its position in the [`Catalog`]
/// is its bit index in the probe height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: String,
    pub value: String,
}

/// Ordered list of breakpoints as declared by the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<Breakpoint>,
}

impl Catalog {
    /// Builds a catalog from the raw `::before` (names) and `::after` (values)
    /// `content` strings. Both lists must have the same length.
    pub fn parse(raw_names: &str, raw_values: &str) -> Result<Self> {
        let names = split_declaration(raw_names);
        let values = split_declaration(raw_values);

        if names.len() != values.len() {
            warn!(
                "[WARN] [BREAKPOINTS] Declared {} breakpoint names but {} values",
                names.len(),
                values.len()
            );
            return Err(UtilsError::CatalogMismatch {
                names: names.len(),
                values: values.len(),
            });
        }

        let entries = names
            .into_iter()
            .zip(values)
            .map(|(name, value)| Breakpoint { name, value })
            .collect();
        Ok(Catalog { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|bp| bp.name.as_str())
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|bp| bp.name == name)
            .map(|bp| bp.value.as_str())
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Catalog {
            entries: iter
                .into_iter()
                .map(|(name, value)| Breakpoint { name, value })
                .collect(),
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for bp in &self.entries {
            map.serialize_entry(&bp.name, &bp.value)?;
        }
        map.end()
    }
}

/// Strips quotes from a computed `content` value and splits it on `|`.
/// `none`, `normal` and empty content mean nothing was declared.
fn split_declaration(raw: &str) -> Vec<String> {
    let unquoted: String = raw.chars().filter(|c| *c != '\'' && *c != '"').collect();
    let trimmed = unquoted.trim();
    if trimmed.is_empty() || trimmed == "none" || trimmed == "normal" {
        return Vec::new();
    }
    trimmed.split('|').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_pipe_lists() {
        let catalog = Catalog::parse(r#""mobile|tablet|desktop""#, r#""0px|768px|1024px""#).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["mobile", "tablet", "desktop"]);
        assert_eq!(catalog.value_of("tablet"), Some("768px"));
    }

    #[test]
    fn single_quotes_are_stripped_too() {
        let catalog = Catalog::parse("'s|l'", "'1px|2px'").unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["s", "l"]);
        assert_eq!(catalog.value_of("l"), Some("2px"));
    }

    #[test]
    fn missing_declarations_give_an_empty_catalog() {
        assert!(Catalog::parse("none", "none").unwrap().is_empty());
        assert!(Catalog::parse("", "").unwrap().is_empty());
        assert!(Catalog::parse("normal", r#""""#).unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = Catalog::parse(r#""a|b|c""#, r#""1px|2px""#).unwrap_err();
        assert_eq!(err, UtilsError::CatalogMismatch { names: 3, values: 2 });
    }

    #[test]
    fn serializes_as_ordered_object() {
        let catalog = Catalog::parse(r#""b|a""#, r#""2px|1px""#).unwrap();
        assert_eq!(serde_json::to_string(&catalog).unwrap(), r#"{"b":"2px","a":"1px"}"#);
    }
}
