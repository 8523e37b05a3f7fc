//! Pan/zoom camera engine for an infinite canvas
//!
//! This crate turns wheel, trackpad-pinch, touch-pinch and drag input into
//! one continuous camera transform (`center` + `zoom`), clamped to
//! configurable limits, with eased programmatic transitions.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Bounds`, `Camera`)
//! - [`config`]: JSON options and the validated `Limits`
//! - [`bounds`]: Viewport rectangle tracking and debounced refresh
//! - [`input`]: Wheel normalization, pinch/drag tracking, gesture recognizer
//! - [`transition`]: Easing and the frame-source abstraction
//! - [`observer`]: Camera change subscriptions
//!
//! ## Example
//!
//! ```rust
//! use touch_zoom::{Rect, TouchZoom, TouchZoomConfig, ViewportHost, WheelInput, Vec2};
//!
//! struct Canvas;
//!
//! impl ViewportHost for Canvas {
//!     fn bounding_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 1280.0, 720.0)
//!     }
//! }
//!
//! let engine = TouchZoom::new(Canvas, TouchZoomConfig::default()).unwrap();
//! let sub = engine.on_move(|change| println!("{:?} manual={}", change.camera, change.manual));
//!
//! engine.handle_wheel(&WheelInput {
//!     delta: Vec2::new(0.0, 120.0),
//!     timestamp_ms: 16.0,
//!     ..Default::default()
//! });
//! assert!((engine.center().y - 60.0).abs() < 1e-9);
//!
//! sub.unsubscribe();
//! engine.destroy();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state and math is pure Rust, testable without a browser
//! 2. **Injected Host**: Element geometry, frames and time come through traits
//! 3. **Clamped State**: The camera can only change through clamping setters

pub mod bounds;
pub mod config;
pub mod input;
pub mod math;
pub mod observer;
pub mod transition;

mod engine;
mod error;
mod host;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Bounds, Camera, Rect, Vec2};
pub use config::{Limits, ScrollDirection, TouchZoomConfig};
pub use bounds::{ScrollAnchor, ScrollNode, BOUNDS_DEBOUNCE_MS};
pub use input::{
    DragInput, GestureEvent, GestureRecognizer, InputResult, Modifiers, PinchInput, PinchSource,
    Platform, PointerSample, WheelInput,
};
pub use transition::{FrameSource, TransitionOutcome};
pub use observer::{CameraChange, Subscription};

pub use engine::TouchZoom;
pub use error::ConfigError;
pub use host::ViewportHost;
pub use viewport::Viewport;

/// Duration of programmatic camera transitions in milliseconds
pub use transition::TRANSITION_DURATION_MS;
