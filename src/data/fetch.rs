use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::LoadError;

/// GET `url` and decode the body as JSON. Non-2xx responses are errors.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let resp_value = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(LoadError::network)?;
	let resp: Response = resp_value.dyn_into().map_err(LoadError::network)?;
	if !resp.ok() {
		return Err(LoadError::Status(resp.status()));
	}
	let text = JsFuture::from(resp.text().map_err(LoadError::network)?)
		.await
		.map_err(LoadError::network)?;
	let text = text
		.as_string()
		.ok_or_else(|| LoadError::Decode("response body is not text".into()))?;
	Ok(serde_json::from_str(&text)?)
}
