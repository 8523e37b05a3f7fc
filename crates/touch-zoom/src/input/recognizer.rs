//! Pointer gesture recognizer
//!
//! Turns raw pointer samples (mouse, pen or individual touch points) into
//! drag and pinch gestures:
//! - one active pointer drags
//! - two active pointers pinch around their midpoint, with the finger
//!   spread relative to the start as the cumulative scale
//! - extra pointers beyond the second are tracked but ignored
//!
//! Two pointers that are not yet far enough apart leave the pinch pending.
//! It starts on the first move of either finger once they separate. The
//! same happens when one of the two pinching fingers lifts while others
//! remain down: the next two pointers take over on their next move.

use crate::math::Vec2;
use super::{DragInput, PinchInput, PinchSource, PINCH_EPSILON};

/// A pointer position reported by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Host pointer id (`PointerEvent.pointerId` or `Touch.identifier`)
    pub id: i32,
    /// Client coordinates
    pub position: Vec2,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(id: i32, position: Vec2, timestamp_ms: f64) -> Self {
        Self {
            id,
            position,
            timestamp_ms,
        }
    }
}

/// Gesture phases consumed by the engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Drag(DragInput),
    PinchStart(PinchInput),
    Pinch(PinchInput),
    PinchEnd,
}

#[derive(Clone, Copy, Debug)]
struct DragTrack {
    last: Vec2,
    started_ms: f64,
}

/// Recognizer state machine
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    pointers: Vec<PointerSample>,
    drag: Option<DragTrack>,
    /// Finger distance when the pinch began
    pinch_distance: Option<f64>,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointers currently down
    #[inline]
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    #[inline]
    pub fn is_pinching(&self) -> bool {
        self.pinch_distance.is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// A pointer went down
    pub fn pointer_down(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        match self.pointers.iter_mut().find(|p| p.id == sample.id) {
            Some(existing) => *existing = sample,
            None => self.pointers.push(sample),
        }

        match self.pointers.len() {
            1 => {
                self.drag = Some(DragTrack {
                    last: sample.position,
                    started_ms: sample.timestamp_ms,
                });
                None
            }
            _ if self.pinch_distance.is_none() => {
                self.drag = None;
                self.try_start_pinch()
            }
            _ => None,
        }
    }

    /// A pointer moved
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        let index = self.pointers.iter().position(|p| p.id == sample.id)?;
        self.pointers[index] = sample;

        if index > 1 && self.pointers.len() > 2 {
            return None;
        }

        if let Some(start_distance) = self.pinch_distance {
            let (a, b) = (self.pointers[0].position, self.pointers[1].position);
            return Some(GestureEvent::Pinch(PinchInput {
                origin: a.midpoint(b),
                movement: a.distance(b) / start_distance,
                source: PinchSource::Touch,
            }));
        }

        if self.pointers.len() >= 2 {
            return self.try_start_pinch();
        }

        let drag = self.drag.as_mut()?;
        let delta = sample.position - drag.last;
        drag.last = sample.position;
        Some(GestureEvent::Drag(DragInput::new(
            delta,
            sample.timestamp_ms - drag.started_ms,
        )))
    }

    /// A pointer was released or cancelled
    pub fn pointer_up(&mut self, id: i32, timestamp_ms: f64) -> Option<GestureEvent> {
        let index = self.pointers.iter().position(|p| p.id == id)?;
        self.pointers.remove(index);

        if self.pinch_distance.is_some() {
            if self.pointers.len() >= 2 && index > 1 {
                return None;
            }
            self.pinch_distance = None;
            self.resume_drag(timestamp_ms);
            return Some(GestureEvent::PinchEnd);
        }

        if self.pointers.is_empty() {
            let drag = self.drag.take()?;
            // Final zero-movement sample so long presses are reported
            return Some(GestureEvent::Drag(DragInput::new(
                Vec2::ZERO,
                timestamp_ms - drag.started_ms,
            )));
        }

        self.resume_drag(timestamp_ms);
        None
    }

    /// Forget every pointer, ending any gesture in progress
    pub fn reset(&mut self) -> Option<GestureEvent> {
        let was_pinching = self.pinch_distance.is_some();
        *self = Self::default();
        was_pinching.then_some(GestureEvent::PinchEnd)
    }

    /// Begin a pinch from the first two pointers once they are apart
    fn try_start_pinch(&mut self) -> Option<GestureEvent> {
        let (a, b) = match self.pointers.as_slice() {
            [a, b, ..] => (a.position, b.position),
            _ => return None,
        };
        let distance = a.distance(b);
        if distance < PINCH_EPSILON {
            return None;
        }
        self.pinch_distance = Some(distance);
        Some(GestureEvent::PinchStart(PinchInput {
            origin: a.midpoint(b),
            movement: 1.0,
            source: PinchSource::Touch,
        }))
    }

    /// A lone remaining finger continues as a fresh drag
    fn resume_drag(&mut self, timestamp_ms: f64) {
        if let [remaining] = self.pointers.as_slice() {
            self.drag = Some(DragTrack {
                last: remaining.position,
                started_ms: timestamp_ms,
            });
        }
    }
}
