//! Wheel, pinch and drag handling

use crate::host::ViewportHost;
use crate::input::{
    classify_wheel, DragInput, GestureEvent, InputResult, PinchInput, PinchSource, WheelAction,
    WheelInput,
};
use super::TouchZoom;

impl<H: ViewportHost> TouchZoom<H> {
    /// Handle a wheel event (mouse wheel, trackpad scroll or trackpad
    /// pinch delivered as ctrl+wheel)
    pub fn handle_wheel(&self, input: &WheelInput) -> InputResult {
        if !input.delta.is_finite() || !input.timestamp_ms.is_finite() {
            return InputResult::Ignored;
        }

        let camera = {
            let mut state = self.state.borrow_mut();
            if !state.is_attached() || state.pinch.is_active() {
                return InputResult::Ignored;
            }
            // Some browsers dispatch the same wheel event twice
            if state.last_wheel_ms.is_some_and(|last| input.timestamp_ms <= last) {
                return InputResult::Ignored;
            }
            state.last_wheel_ms = Some(input.timestamp_ms);

            match classify_wheel(input, state.scroll_direction, state.platform) {
                WheelAction::Zoom { factor, pivot } => {
                    let bounds = state.bounds.bounds();
                    let half = bounds.local_center();
                    let pivot = pivot.map_or(half, |client| bounds.to_local(client));

                    state.cancel_transition();
                    let zoom = state.viewport.zoom();
                    state.viewport.zoom_around(zoom * factor, pivot, half);
                }
                WheelAction::Pan(delta) => {
                    if delta.is_zero() {
                        return InputResult::Ignored;
                    }

                    state.cancel_transition();
                    let tolerance = state.viewport.limits().horizontal_scroll_tolerance;
                    let candidate = state.viewport.center() + delta / state.viewport.zoom();
                    // Mostly-vertical scrolls keep x where it is
                    if delta.x.abs() * tolerance > delta.y.abs() {
                        state.viewport.set_center(candidate);
                    } else {
                        state.viewport.set_center_y(candidate.y);
                    }
                }
            }
            state.viewport.camera()
        };

        self.notify(camera, true);
        InputResult::Handled
    }

    /// Begin a pinch gesture at `input.origin`
    pub fn handle_pinch_start(&self, input: &PinchInput) -> InputResult {
        if input.source == PinchSource::Wheel || !input.origin.is_finite() {
            return InputResult::Ignored;
        }

        let camera = {
            let mut state = self.state.borrow_mut();
            if !state.is_attached() {
                return InputResult::Ignored;
            }
            state.cancel_transition();
            state.pinch.start(input.origin);
            state.viewport.camera()
        };

        tracing::debug!(origin = ?input.origin, source = ?input.source, "pinch started");
        self.notify(camera, true);
        InputResult::Handled
    }

    /// Apply one pinch update: pan by the origin movement and scale the
    /// zoom by the change in finger spread
    pub fn handle_pinch(&self, input: &PinchInput) -> InputResult {
        if input.source == PinchSource::Wheel || !input.origin.is_finite() {
            return InputResult::Ignored;
        }

        let camera = {
            let mut state = self.state.borrow_mut();
            if !state.is_attached() {
                return InputResult::Ignored;
            }
            let Some(step) = state.pinch.update(input.origin, input.movement) else {
                return InputResult::Ignored;
            };

            state.cancel_transition();
            let zoom = state.viewport.zoom();
            let center = state.viewport.center() + step.pan / (zoom * 2.0);
            state.viewport.set_center(center);
            state.viewport.set_zoom(zoom * step.ratio);
            state.viewport.camera()
        };

        self.notify(camera, true);
        InputResult::Handled
    }

    /// Finish the pinch gesture and clear its transient state
    pub fn handle_pinch_end(&self) -> InputResult {
        let camera = {
            let mut state = self.state.borrow_mut();
            if !state.is_attached() {
                return InputResult::Ignored;
            }
            state.pinch.end();
            state.viewport.camera()
        };

        tracing::debug!("pinch ended");
        self.notify(camera, true);
        InputResult::Handled
    }

    /// Pan by a drag movement. Taps are ignored.
    pub fn handle_drag(&self, input: &DragInput) -> InputResult {
        if input.is_tap() || !input.delta.is_finite() {
            return InputResult::Ignored;
        }

        let camera = {
            let mut state = self.state.borrow_mut();
            if !state.is_attached() {
                return InputResult::Ignored;
            }
            state.cancel_transition();
            state.viewport.pan_screen(input.delta);
            state.viewport.camera()
        };

        self.notify(camera, true);
        InputResult::Handled
    }

    /// Dispatch a recognized gesture phase
    pub fn handle_gesture(&self, event: GestureEvent) -> InputResult {
        match event {
            GestureEvent::Drag(drag) => self.handle_drag(&drag),
            GestureEvent::PinchStart(pinch) => self.handle_pinch_start(&pinch),
            GestureEvent::Pinch(pinch) => self.handle_pinch(&pinch),
            GestureEvent::PinchEnd => self.handle_pinch_end(),
        }
    }
}
