// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsValue;

/// Set panic hook for better error messages in the browser
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[inline]
pub(crate) fn debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

#[inline]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[inline]
pub(crate) fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
