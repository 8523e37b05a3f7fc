//! `requestAnimationFrame` frame source

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::transition::FrameSource;

/// Drives transitions from the browser's display refresh
#[derive(Clone)]
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    /// `None` outside a window context (e.g. in a worker)
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl FrameSource for AnimationFrames {
    fn now(&self) -> f64 {
        performance_now(&self.window)
    }

    async fn next_frame(&self) -> f64 {
        let window = self.window.clone();
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            // Resolve right away if the frame cannot be requested so the
            // transition still finishes
            if window.request_animation_frame(&resolve).is_err() {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::from_f64(performance_now(&window)));
            }
        });

        match JsFuture::from(promise).await {
            Ok(timestamp) => timestamp.as_f64().unwrap_or_else(|| self.now()),
            Err(_) => self.now(),
        }
    }
}

/// High resolution time in milliseconds, same timeline as event timestamps
pub(super) fn performance_now(window: &Window) -> f64 {
    window.performance().map_or(0.0, |performance| performance.now())
}
