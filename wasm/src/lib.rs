use cappa::{json, render_to_string};
use wasm_bindgen::prelude::*;

/// Renders a JSON node tree to HTML.
#[wasm_bindgen]
pub fn render(input: &str) -> Result<String, JsError> {
    let tree = json::from_str(input)?;
    Ok(render_to_string(tree))
}
