//! WASM exports for the camera engine
//!
//! Binds [`TouchZoom`](crate::TouchZoom) to a DOM element: listeners,
//! `ResizeObserver`, `requestAnimationFrame` and the debounce timer, plus a
//! JS-facing controller.

mod controller;
mod dom;
mod frames;

use wasm_bindgen::prelude::*;

pub use controller::TouchZoomController;
pub use dom::{bind, DomViewport};
pub use frames::AnimationFrames;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}
