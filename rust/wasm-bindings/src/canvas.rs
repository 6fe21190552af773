// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canvas lookup and WebGL capability check

use officetower_viewer::RenderCapability;
use std::cell::Cell;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id '{0}'")]
    NotFound(String),

    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
}

/// Find the canvas element with the given id
pub fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, CanvasError> {
    let document = web_sys::window()
        .ok_or(CanvasError::NoWindow)?
        .document()
        .ok_or(CanvasError::NoDocument)?;

    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| CanvasError::NotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| CanvasError::NotACanvas(canvas_id.to_string()))
}

/// WebGL2 with a WebGL1 fallback.
///
/// A canvas keeps the first context kind it hands out, so the renderer must
/// request [`WebGlCapability::kind`] afterwards.
pub struct WebGlCapability<'a> {
    canvas: &'a HtmlCanvasElement,
    kind: Cell<Option<&'static str>>,
}

impl<'a> WebGlCapability<'a> {
    pub fn new(canvas: &'a HtmlCanvasElement) -> Self {
        Self {
            canvas,
            kind: Cell::new(None),
        }
    }

    /// Context kind obtained by the last successful check
    pub fn kind(&self) -> Option<&'static str> {
        self.kind.get()
    }
}

impl RenderCapability for WebGlCapability<'_> {
    fn check(&self) -> Result<(), String> {
        for kind in ["webgl2", "webgl"] {
            if let Ok(Some(_)) = self.canvas.get_context(kind) {
                self.kind.set(Some(kind));
                return Ok(());
            }
        }
        Err("WebGL is not supported by this browser".to_string())
    }
}
