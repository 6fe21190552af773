// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser API for the building viewer

use crate::canvas::{find_canvas, WebGlCapability};
use crate::utils::{debug, error, warn};
use officetower_building::{floor_plan, BuildingConfig};
use officetower_geometry::Mesh;
use officetower_viewer::{
    AppState, Command, FloorSelection, Headless, ViewMode, ViewerSettings,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_mode(mode: &str) -> Result<ViewMode, JsError> {
    match mode {
        "planar" | "2d" => Ok(ViewMode::Planar),
        "orbit" | "3d" => Ok(ViewMode::Orbit),
        other => Err(JsError::new(&format!("Unknown view mode: {}", other))),
    }
}

/// Typed arrays for one mesh, ready for GPU upload
fn mesh_object(mesh: &Mesh) -> Result<js_sys::Object, JsError> {
    let obj = js_sys::Object::new();

    let set_prop = |key: &str, value: &JsValue| -> Result<(), JsError> {
        js_sys::Reflect::set(&obj, &key.into(), value)
            .map_err(|_| JsError::new(&format!("Failed to set property: {}", key)))?;
        Ok(())
    };

    set_prop("positions", &js_sys::Float32Array::from(&mesh.positions[..]))?;
    set_prop("normals", &js_sys::Float32Array::from(&mesh.normals[..]))?;
    set_prop("indices", &js_sys::Uint32Array::from(&mesh.indices[..]))?;
    set_prop(
        "edgeIndices",
        &js_sys::Uint32Array::from(&mesh.edge_indices()[..]),
    )?;

    Ok(obj)
}

/// Office building viewer bound to a canvas
#[wasm_bindgen]
pub struct BuildingViewerAPI {
    app: AppState,
    context_kind: &'static str,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl BuildingViewerAPI {
    /// Probe WebGL on the canvas and generate the building.
    ///
    /// `config_json` and `settings_json` are optional; missing fields take
    /// their defaults. Fails when WebGL is unavailable or the configuration
    /// is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        config_json: Option<String>,
        settings_json: Option<String>,
    ) -> Result<BuildingViewerAPI, JsError> {
        let canvas = find_canvas(canvas_id).map_err(|e| {
            error(&format!("Canvas lookup failed: {}", e));
            JsError::new(&e.to_string())
        })?;

        let config: BuildingConfig = match config_json.as_deref() {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| JsError::new(&format!("Invalid config JSON: {}", e)))?,
            None => BuildingConfig::default(),
        };
        let settings: ViewerSettings = match settings_json.as_deref() {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| JsError::new(&format!("Invalid settings JSON: {}", e)))?,
            None => ViewerSettings::default(),
        };

        let (width, height) = (canvas.width(), canvas.height());
        let capability = WebGlCapability::new(&canvas);
        let app = AppState::initialize(&config, settings, &capability, width, height)
            .map_err(|e| {
                error(&format!("Viewer initialization failed: {}", e));
                JsError::new(&e.to_string())
            })?;
        let context_kind = capability.kind().unwrap_or("webgl2");

        debug(&format!(
            "Viewer ready: {} floors, {} volumes, {} context",
            app.building().floor_count(),
            app.building().volumes().count(),
            context_kind
        ));

        Ok(Self {
            app,
            context_kind,
            width,
            height,
        })
    }

    /// WebGL context kind the renderer should request ("webgl2" or "webgl")
    #[wasm_bindgen(getter, js_name = contextKind)]
    pub fn context_kind(&self) -> String {
        self.context_kind.to_string()
    }

    /// Regenerate the building from a JSON configuration.
    ///
    /// The current building is kept when the configuration is invalid.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsError> {
        let config: BuildingConfig = serde_json::from_str(config_json)
            .map_err(|e| JsError::new(&format!("Invalid config JSON: {}", e)))?;
        let settings = self.app.controller().settings().clone();
        self.rebuild(&config, settings)
    }

    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> String {
        serde_json::to_string(&self.app.building().config).unwrap_or_else(|_| "{}".to_string())
    }

    /// Replace viewer settings; view state resets
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&mut self, settings_json: &str) -> Result<(), JsError> {
        let settings: ViewerSettings = serde_json::from_str(settings_json)
            .map_err(|e| JsError::new(&format!("Invalid settings JSON: {}", e)))?;
        let config = self.app.building().config.clone();
        self.rebuild(&config, settings)
    }

    #[wasm_bindgen(js_name = getSettings)]
    pub fn get_settings(&self) -> String {
        serde_json::to_string(self.app.controller().settings())
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// "planar" / "2d" or "orbit" / "3d"
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsError> {
        let mode = parse_mode(mode)?;
        self.app.dispatch(Command::SetMode { mode });
        Ok(())
    }

    /// Isolate a floor, or show all floors when `floor` is undefined
    #[wasm_bindgen(js_name = selectFloor)]
    pub fn select_floor(&mut self, floor: Option<u32>) {
        let selection = match floor {
            Some(index) => FloorSelection::Floor(index as usize),
            None => FloorSelection::All,
        };
        self.app.dispatch(Command::SelectFloor { selection });
    }

    #[wasm_bindgen(js_name = toggleWireframe)]
    pub fn toggle_wireframe(&mut self) -> bool {
        self.app.dispatch(Command::ToggleWireframe);
        self.app.state().wireframe
    }

    /// Animate to viewpoint `index` of `floor`; false when it does not exist
    #[wasm_bindgen(js_name = goToViewpoint)]
    pub fn go_to_viewpoint(&mut self, floor: u32, index: u32) -> bool {
        let exists = self
            .app
            .viewpoints(floor as usize)
            .is_some_and(|vps| (index as usize) < vps.len());
        if !exists {
            warn(&format!("No viewpoint {} on floor {}", index, floor));
        }
        self.app.dispatch(Command::GoToViewpoint {
            floor: floor as usize,
            index: index as usize,
        });
        exists
    }

    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&mut self) {
        self.app.dispatch(Command::ResetView);
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) {
        self.app.dispatch(Command::ZoomIn);
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) {
        self.app.dispatch(Command::ZoomOut);
    }

    /// Run a UI action id such as "view-2d", "floor-3" or "viewpoint-1-0"
    #[wasm_bindgen]
    pub fn dispatch(&mut self, action: &str) -> Result<(), JsError> {
        let command: Command = action.parse().map_err(|e| {
            warn(&format!("Rejected action: {}", e));
            JsError::new(&format!("{}", e))
        })?;
        if let Command::Resize { width, height } = command {
            self.width = width;
            self.height = height;
        }
        self.app.dispatch(command);
        Ok(())
    }

    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.app.on_resize(width, height);
    }

    /// Orbit drag; ignored while free interaction is disabled
    #[wasm_bindgen]
    pub fn rotate(&mut self, d_azimuth: f64, d_polar: f64) -> bool {
        self.app.rotate(d_azimuth, d_polar)
    }

    #[wasm_bindgen]
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        self.app.pan(dx, dy)
    }

    /// Wheel zoom; ignored while free interaction is disabled
    #[wasm_bindgen]
    pub fn zoom(&mut self, factor: f64) -> bool {
        self.app.zoom(factor)
    }

    /// Advance animations to `now` (milliseconds, e.g. the rAF timestamp).
    ///
    /// Returns true while an animation is running. Hosts may stop calling
    /// `tick` once it returns false: a move or reveal requested later starts
    /// at the first `tick` after the request, so keep ticking after any call
    /// that can start one.
    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) -> bool {
        self.app.tick(now)
    }

    /// Render list for the current frame
    #[wasm_bindgen(js_name = getFrame)]
    pub fn get_frame(&self) -> Result<JsValue, JsError> {
        to_js(&self.app.render_list())
    }

    /// `{ mode, selectedFloor, wireframe, activeViewpoint }`
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        to_js(self.app.state())
    }

    #[wasm_bindgen(js_name = getFloorCount)]
    pub fn get_floor_count(&self) -> usize {
        self.app.building().floor_count()
    }

    /// Floor labels, ground floor first
    #[wasm_bindgen(js_name = getFloorLabels)]
    pub fn get_floor_labels(&self) -> Vec<String> {
        self.app
            .building()
            .floors
            .iter()
            .map(|f| f.label.clone())
            .collect()
    }

    /// Viewpoints of a floor as JSON
    #[wasm_bindgen(js_name = getViewpoints)]
    pub fn get_viewpoints(&self, floor: u32) -> Result<String, JsError> {
        let viewpoints = self
            .app
            .viewpoints(floor as usize)
            .ok_or_else(|| JsError::new(&format!("No floor at index {}", floor)))?;
        to_json(&viewpoints)
    }

    /// `{ floor, viewpoints }` when the menu is shown, otherwise null
    #[wasm_bindgen(js_name = getViewpointMenu)]
    pub fn get_viewpoint_menu(&self) -> Result<JsValue, JsError> {
        #[derive(Serialize)]
        struct Menu<'a> {
            floor: usize,
            viewpoints: &'a [officetower_building::Viewpoint],
        }

        match self.app.viewpoint_menu() {
            Some((floor, viewpoints)) => to_js(&Menu { floor, viewpoints }),
            None => Ok(JsValue::NULL),
        }
    }

    /// Top-down floor plan as JSON
    #[wasm_bindgen(js_name = getFloorPlan)]
    pub fn get_floor_plan(&self, floor: u32) -> Result<String, JsError> {
        let floor = self
            .app
            .building()
            .floor(floor as usize)
            .ok_or_else(|| JsError::new(&format!("No floor at index {}", floor)))?;
        to_json(&floor_plan(floor))
    }

    /// World-space mesh of a whole floor as typed arrays
    #[wasm_bindgen(js_name = getFloorMeshData)]
    pub fn get_floor_mesh_data(&self, floor: u32) -> Result<JsValue, JsError> {
        let floor = self
            .app
            .building()
            .floor(floor as usize)
            .ok_or_else(|| JsError::new(&format!("No floor at index {}", floor)))?;

        let mesh = floor
            .merged_mesh()
            .map_err(|e| JsError::new(&format!("Mesh generation error: {}", e)))?;
        let obj = mesh_object(&mesh)?;

        js_sys::Reflect::set(&obj, &"label".into(), &JsValue::from_str(&floor.label))
            .map_err(|_| JsError::new("Failed to set property: label"))?;
        js_sys::Reflect::set(&obj, &"elevation".into(), &JsValue::from(floor.y_offset))
            .map_err(|_| JsError::new("Failed to set property: elevation"))?;

        Ok(obj.into())
    }

    /// Mesh of one primitive in its local space (see `DrawItem.world`)
    #[wasm_bindgen(js_name = getVolumeMeshData)]
    pub fn get_volume_mesh_data(&self, floor: u32, index: u32) -> Result<JsValue, JsError> {
        let volume = self
            .app
            .building()
            .floor(floor as usize)
            .and_then(|f| f.volume(index as usize))
            .ok_or_else(|| JsError::new(&format!("No volume {} on floor {}", index, floor)))?;

        let mesh = volume
            .shape()
            .mesh(volume.size)
            .map_err(|e| JsError::new(&format!("Mesh generation error: {}", e)))?;
        Ok(mesh_object(&mesh)?.into())
    }
}

impl BuildingViewerAPI {
    fn rebuild(&mut self, config: &BuildingConfig, settings: ViewerSettings) -> Result<(), JsError> {
        let app = AppState::initialize(config, settings, &Headless, self.width, self.height)
            .map_err(|e| {
                warn(&format!("Keeping current building: {}", e));
                JsError::new(&e.to_string())
            })?;
        self.app = app;
        debug("Building regenerated");
        Ok(())
    }
}
