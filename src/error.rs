use wasm_bindgen::JsValue;

/// Failures setting up the browser side of the app. Geometry and
/// interaction code never fails.
#[derive(Debug, thiserror::Error)]
pub enum VennError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,

	/// The window reported a non-numeric size.
	#[error("window size is not a number")]
	NoViewport,

	/// The canvas refused a 2D context.
	#[error("canvas has no 2d context")]
	NoContext,

	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for VennError {
	fn from(value: JsValue) -> Self {
		VennError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
