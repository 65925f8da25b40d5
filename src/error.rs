//! Error type shared by the effect bindings

use thiserror::Error;

/// Errors raised while wiring an effect to the page
#[derive(Debug, Error)]
pub enum FxError {
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("renderer: {0}")]
    Renderer(String),
}

pub type Result<T> = std::result::Result<T, FxError>;

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        FxError::Config(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Js(format!("{:?}", value))
    }
}
