use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised by the breakpoint oracle, device helpers and event formatter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Media query {0} does not exist.")]
    UnknownBreakpoint(String),

    #[error("breakpoint declaration mismatch: {names} names but {values} values")]
    CatalogMismatch { names: usize, values: usize },

    #[error("DOM error: {0}")]
    Dom(String),
}

impl UtilsError {
    pub(crate) fn dom(context: &str, err: JsValue) -> Self {
        UtilsError::Dom(format!("{context}: {err:?}"))
    }
}

pub type Result<T, E = UtilsError> = std::result::Result<T, E>;
