use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::error::{Result, UtilsError};

/// One event name or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EventNames {
    One(String),
    Many(Vec<String>),
}

impl EventNames {
    /// Accepts a JS string or array of strings, anything else is rejected.
    pub fn from_js(value: JsValue) -> Result<Self> {
        serde_wasm_bindgen::from_value(value).map_err(|_| {
            UtilsError::InvalidArgument(
                "parameter events is not of type Array or String".to_string(),
            )
        })
    }

    fn as_slice(&self) -> &[String] {
        match self {
            EventNames::One(name) => std::slice::from_ref(name),
            EventNames::Many(names) => names,
        }
    }
}

impl From<&str> for EventNames {
    fn from(name: &str) -> Self {
        EventNames::One(name.to_string())
    }
}

impl From<String> for EventNames {
    fn from(name: String) -> Self {
        EventNames::One(name)
    }
}

impl From<&[&str]> for EventNames {
    fn from(names: &[&str]) -> Self {
        EventNames::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EventNames {
    fn from(names: [&str; N]) -> Self {
        EventNames::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<Vec<String>> for EventNames {
    fn from(names: Vec<String>) -> Self {
        EventNames::Many(names)
    }
}

fn is_plain(name: &str) -> bool {
    !name.contains([' ', '.'])
}

/// Suffixes every event with `.namespace` and joins them with a space,
/// e.g. `["open", "close"]` in `modal` becomes `"open.modal close.modal"`.
pub fn get_namespaced_events(events: impl Into<EventNames>, namespace: &str) -> Result<String> {
    let events = events.into();
    if !events.as_slice().iter().all(|e| is_plain(e)) {
        return Err(UtilsError::InvalidArgument(
            "parameter events is invalid, contains \" \" or \".\"".to_string(),
        ));
    }
    if !is_plain(namespace) {
        return Err(UtilsError::InvalidArgument(
            "parameter namespace is invalid, contains \" \" or \".\"".to_string(),
        ));
    }

    Ok(events
        .as_slice()
        .iter()
        .map(|event| format!("{event}.{namespace}"))
        .collect::<Vec<_>>()
        .join(" "))
}

/// Script-facing entry point, taking a string or an array of strings.
#[wasm_bindgen(js_name = getNamespacedEvents)]
pub fn get_namespaced_events_js(events: JsValue, namespace: JsValue) -> Result<String, JsError> {
    let events = EventNames::from_js(events)?;
    let namespace = require_namespace(namespace.as_string())?;
    Ok(get_namespaced_events(events, &namespace)?)
}

/// Non-string namespaces are rejected instead of being coerced.
fn require_namespace(namespace: Option<String>) -> Result<String> {
    namespace.ok_or_else(|| {
        UtilsError::InvalidArgument("parameter namespace is not of String".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaces_a_list() {
        assert_eq!(
            get_namespaced_events(["open", "close"], "modal").unwrap(),
            "open.modal close.modal"
        );
    }

    #[test]
    fn namespaces_a_single_event() {
        assert_eq!(get_namespaced_events("open", "modal").unwrap(), "open.modal");
    }

    #[test]
    fn rejects_space_in_event() {
        assert!(matches!(
            get_namespaced_events("open close", "modal"),
            Err(UtilsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_period_in_listed_event() {
        assert!(matches!(
            get_namespaced_events(["open", "click.x"], "modal"),
            Err(UtilsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_period_in_namespace() {
        assert!(matches!(
            get_namespaced_events("open", "mod.al"),
            Err(UtilsError::InvalidArgument(_))
        ));
        assert!(matches!(
            get_namespaced_events("open", "mo dal"),
            Err(UtilsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_non_string_namespace() {
        assert_eq!(
            require_namespace(None).unwrap_err(),
            UtilsError::InvalidArgument("parameter namespace is not of String".to_string())
        );
        assert_eq!(require_namespace(Some("modal".to_string())).unwrap(), "modal");
    }

    #[test]
    fn empty_list_gives_empty_string() {
        assert_eq!(get_namespaced_events(Vec::<String>::new(), "modal").unwrap(), "");
    }

    #[test]
    fn deserializes_string_or_list() {
        let one: EventNames = serde_json::from_str(r#""open""#).unwrap();
        assert_eq!(one, EventNames::One("open".to_string()));
        let many: EventNames = serde_json::from_str(r#"["open","close"]"#).unwrap();
        assert_eq!(many, EventNames::from(["open", "close"]));
        assert!(serde_json::from_str::<EventNames>("42").is_err());
    }
}
