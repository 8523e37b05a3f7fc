//! Camera gesture engine
//!
//! This module is split into focused submodules:
//! - `input`: wheel, pinch and drag handling
//! - `layout`: viewport bounds refresh and debouncing
//! - `animation`: programmatic camera transitions

mod animation;
mod input;
mod layout;

use std::cell::RefCell;
use std::rc::Rc;

use crate::bounds::BoundsTracker;
use crate::config::{Limits, ScrollDirection, TouchZoomConfig};
use crate::error::ConfigError;
use crate::host::ViewportHost;
use crate::input::{PinchTracker, Platform};
use crate::math::{Bounds, Camera, Vec2};
use crate::observer::{CameraChange, ObserverRegistry, Subscription};
use crate::viewport::Viewport;

use animation::ActiveTransition;

/// Pan/zoom engine bound to one viewport.
///
/// This is a cheap handle: clones share the same camera, observers and
/// host, so DOM closures and transition futures can each hold one. All
/// methods take `&self`; no internal borrow is held while observers run or
/// across an await, so callbacks may read the engine or feed it input.
pub struct TouchZoom<H> {
    state: Rc<RefCell<EngineState<H>>>,
    observers: ObserverRegistry,
}

impl<H> Clone for TouchZoom<H> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            observers: self.observers.clone(),
        }
    }
}

struct EngineState<H> {
    /// `None` once destroyed
    host: Option<H>,
    viewport: Viewport,
    scroll_direction: ScrollDirection,
    platform: Platform,
    bounds: BoundsTracker,
    pinch: PinchTracker,
    last_wheel_ms: Option<f64>,
    transition: Option<ActiveTransition>,
    /// Bumped for every transition started; a running `move_to` only
    /// writes the camera while its generation is current
    generation: u64,
}

impl<H> EngineState<H> {
    #[inline]
    fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Drop the in-flight transition, if any
    fn cancel_transition(&mut self) {
        if let Some(active) = self.transition.take() {
            tracing::trace!(generation = active.generation, "camera transition cancelled");
        }
    }
}

impl<H: ViewportHost> TouchZoom<H> {
    /// Bind an engine to `host`.
    ///
    /// Fails if the config does not describe valid limits. Bounds are
    /// measured immediately.
    pub fn new(host: H, config: TouchZoomConfig) -> Result<Self, ConfigError> {
        let limits = config.limits().map_err(|err| {
            tracing::warn!(%err, "rejected touch zoom config");
            err
        })?;

        let platform = host.platform();
        let engine = Self {
            state: Rc::new(RefCell::new(EngineState {
                host: Some(host),
                viewport: Viewport::new(limits),
                scroll_direction: config.scroll_direction(),
                platform,
                bounds: BoundsTracker::new(),
                pinch: PinchTracker::new(),
                last_wheel_ms: None,
                transition: None,
                generation: 0,
            })),
            observers: ObserverRegistry::new(),
        };
        engine.update_bounds();

        tracing::debug!(?limits, ?platform, "touch zoom attached");
        Ok(engine)
    }

    /// Register a camera-change callback
    pub fn on_move<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&CameraChange) + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Detach from the host and drop all observers.
    ///
    /// Cancels any running transition and pending bounds refresh. Calling
    /// it again is a no-op, as is any input afterwards.
    pub fn destroy(&self) {
        let host = {
            let mut state = self.state.borrow_mut();
            let host = state.host.take();
            if host.is_some() {
                state.cancel_transition();
                state.bounds.cancel();
                state.pinch.end();
            }
            host
        };

        let Some(mut host) = host else {
            return;
        };
        host.detach();
        self.observers.clear();
        tracing::debug!("touch zoom destroyed");
    }

    #[inline]
    pub fn camera(&self) -> Camera {
        self.state.borrow().viewport.camera()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.camera().center
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.camera().zoom
    }

    pub fn limits(&self) -> Limits {
        *self.state.borrow().viewport.limits()
    }

    pub fn bounds(&self) -> Bounds {
        self.state.borrow().bounds.bounds()
    }

    /// True between pinch start and pinch end
    pub fn is_pinching(&self) -> bool {
        self.state.borrow().pinch.is_active()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.borrow().transition.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        !self.state.borrow().is_attached()
    }

    /// Fan a camera change out to observers. Callers must not hold a
    /// state borrow.
    fn notify(&self, camera: Camera, manual: bool) {
        self.observers.notify(&CameraChange { camera, manual });
    }
}
