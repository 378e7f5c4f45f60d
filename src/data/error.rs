use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a JSON resource could not be loaded. Every variant is recovered the
/// same way: the caller swaps in a built-in fallback.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum LoadError {
	#[error("no browser window available")]
	NoWindow,
	#[error("request failed: {0}")]
	Network(String),
	#[error("server responded with status {0}")]
	Status(u16),
	#[error("malformed document: {0}")]
	Decode(String),
}

impl LoadError {
	pub(crate) fn network(err: JsValue) -> Self {
		LoadError::Network(format!("{err:?}"))
	}
}

impl From<serde_json::Error> for LoadError {
	fn from(err: serde_json::Error) -> Self {
		LoadError::Decode(err.to_string())
	}
}
