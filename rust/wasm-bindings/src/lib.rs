// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Office building viewer WebAssembly bindings
//!
//! JavaScript/TypeScript API built with wasm-bindgen. The host page owns the
//! WebGL renderer and DOM buttons; this crate owns the building and the view
//! state and hands back a render list every frame.

use officetower_building::BuildingConfig;
use wasm_bindgen::prelude::*;

mod canvas;
mod utils;
mod viewer_api;

pub use canvas::{find_canvas, CanvasError, WebGlCapability};
pub use utils::set_panic_hook as init_panic_hook;
pub use viewer_api::BuildingViewerAPI;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the version of the viewer bindings
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Reference building configuration as JSON
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> String {
    serde_json::to_string(&BuildingConfig::default()).unwrap_or_else(|_| "{}".to_string())
}

/// Check a building configuration without creating a viewer.
///
/// Returns the normalized configuration JSON (defaults filled in).
#[wasm_bindgen(js_name = validateConfig)]
pub fn validate_config(config_json: &str) -> Result<String, JsError> {
    let config: BuildingConfig = serde_json::from_str(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config JSON: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&config).map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
