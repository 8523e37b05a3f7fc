//! JS-facing controller

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::TouchZoomConfig;
use crate::engine::TouchZoom;
use crate::math::Vec2;
use crate::observer::Subscription;
use super::{bind, AnimationFrames, DomViewport};

/// Camera controller for WASM - wraps TouchZoom with a JS-friendly API
#[wasm_bindgen]
pub struct TouchZoomController {
    engine: TouchZoom<DomViewport>,
    frames: AnimationFrames,
    subscriptions: HashMap<u64, Subscription>,
}

#[wasm_bindgen]
impl TouchZoomController {
    /// Bind to `element` with a JSON options object (`"{}"` for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(element: web_sys::Element, config_json: &str) -> Result<TouchZoomController, JsValue> {
        let config = TouchZoomConfig::from_json(config_json).map_err(JsError::from)?;
        let frames = AnimationFrames::new().ok_or_else(|| JsValue::from_str("touch-zoom: no window"))?;
        let engine = bind(element, config)?;
        Ok(Self {
            engine,
            frames,
            subscriptions: HashMap::new(),
        })
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Call `callback(manual)` after every camera change. Returns an id for
    /// `offMove`.
    #[wasm_bindgen(js_name = onMove)]
    pub fn on_move(&mut self, callback: js_sys::Function) -> u64 {
        let subscription = self.engine.on_move(move |change| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_bool(change.manual));
        });
        let id = subscription.id();
        self.subscriptions.insert(id, subscription);
        id
    }

    #[wasm_bindgen(js_name = offMove)]
    pub fn off_move(&mut self, id: u64) {
        if let Some(subscription) = self.subscriptions.remove(&id) {
            subscription.unsubscribe();
        }
    }

    // =========================================================================
    // Camera
    // =========================================================================

    /// Animate to a camera. The promise resolves to `"completed"`,
    /// `"cancelled"`, `"detached"` or `"rejected"`.
    #[wasm_bindgen(js_name = moveTo)]
    pub fn move_to(&self, x: f64, y: f64, zoom: f64) -> js_sys::Promise {
        let engine = self.engine.clone();
        let frames = self.frames.clone();
        future_to_promise(async move {
            let outcome = engine.move_to(&frames, Vec2::new(x, y), zoom).await;
            Ok(JsValue::from_str(outcome.as_str()))
        })
    }

    #[wasm_bindgen(getter, js_name = centerX)]
    pub fn center_x(&self) -> f64 {
        self.engine.center().x
    }

    #[wasm_bindgen(getter, js_name = centerY)]
    pub fn center_y(&self) -> f64 {
        self.engine.center().y
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.engine.zoom()
    }

    /// Camera state as JSON
    #[wasm_bindgen(js_name = cameraJson)]
    pub fn camera_json(&self) -> String {
        self.engine.camera().to_json()
    }

    #[wasm_bindgen(getter, js_name = isPinching)]
    pub fn is_pinching(&self) -> bool {
        self.engine.is_pinching()
    }

    /// Detach every listener and observer. Safe to call more than once.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.subscriptions.clear();
        self.engine.destroy();
    }
}
