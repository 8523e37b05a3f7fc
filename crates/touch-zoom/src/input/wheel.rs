//! Wheel normalization and pan/zoom classification

use crate::config::ScrollDirection;
use crate::math::Vec2;
use super::Platform;

/// Largest zoom step a single wheel event may contribute
pub const MAX_ZOOM_STEP: f64 = 10.0;

/// Damping applied to the normalized zoom delta
pub const WHEEL_ZOOM_DAMPING: f64 = 0.618;

/// Divisor turning a damped zoom delta into a multiplicative factor
pub const WHEEL_ZOOM_DIVISOR: f64 = 80.0;

/// Scale applied to wheel pan deltas before converting to content space
pub const WHEEL_PAN_SCALE: f64 = 0.5;

/// Keyboard modifiers held during an input event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// A raw wheel event as delivered by the host
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Raw device deltas (`deltaX`, `deltaY`)
    pub delta: Vec2,
    /// Cursor position in client coordinates, if the host knows it
    pub client: Option<Vec2>,
    /// Event timestamp in milliseconds
    pub timestamp_ms: f64,
    pub modifiers: Modifiers,
    /// Bitmask of pressed mouse buttons
    pub buttons: u16,
}

impl WheelInput {
    /// Cursor position from host client coordinates
    ///
    /// Hosts report `0` on an axis they cannot resolve, so a point with a
    /// zero coordinate counts as unknown and zooming falls back to the
    /// viewport center.
    pub fn client_point(x: f64, y: f64) -> Option<Vec2> {
        (x != 0.0 && y != 0.0).then(|| Vec2::new(x, y))
    }
}

/// Wheel deltas after normalization
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedWheel {
    pub x: f64,
    pub y: f64,
    /// Zoom intent; non-zero only when ctrl or meta is held
    pub z: f64,
}

/// What a wheel event asks the camera to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Zoom by `factor` around `pivot` (client coordinates), or around the
    /// viewport center when the cursor position is unknown
    Zoom { factor: f64, pivot: Option<Vec2> },
    /// Pan by a screen-space delta
    Pan(Vec2),
}

/// Extract `[x, y, z]` deltas from a wheel event.
///
/// Pinch-to-zoom on trackpads arrives as ctrl+wheel; its vertical delta is
/// capped to [`MAX_ZOOM_STEP`] so high-resolution devices cannot jump the
/// zoom. Pan deltas pass through untouched.
pub fn normalize_wheel(input: &WheelInput) -> NormalizedWheel {
    let Vec2 { x, y } = input.delta;
    let z = if input.modifiers.ctrl || input.modifiers.meta {
        y.clamp(-MAX_ZOOM_STEP, MAX_ZOOM_STEP)
    } else {
        0.0
    };
    NormalizedWheel { x, y, z }
}

/// Decide whether a wheel event zooms or pans, and by how much
pub fn classify_wheel(
    input: &WheelInput,
    direction: ScrollDirection,
    platform: Platform,
) -> WheelAction {
    let wheel = normalize_wheel(input);
    let mods = input.modifiers;

    // alt/ctrl/meta + scroll zooms, unless a button is held (dragging)
    if (mods.alt || mods.ctrl || mods.meta) && input.buttons == 0 {
        let delta = wheel.z * WHEEL_ZOOM_DAMPING;
        return WheelAction::Zoom {
            factor: 1.0 - delta / WHEEL_ZOOM_DIVISOR,
            pivot: input.client,
        };
    }

    let horizontal = direction == ScrollDirection::Horizontal;
    let mapped = if mods.shift && !platform.is_apple() {
        // shift+scroll pans sideways; Apple platforms already swap the axes
        if horizontal {
            Vec2::new(wheel.x, wheel.y)
        } else {
            Vec2::new(wheel.y, 0.0)
        }
    } else if horizontal {
        Vec2::new(wheel.y, 0.0)
    } else {
        Vec2::new(wheel.x, wheel.y)
    };

    WheelAction::Pan(mapped * WHEEL_PAN_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(dx: f64, dy: f64) -> WheelInput {
        WheelInput {
            delta: Vec2::new(dx, dy),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_plain_wheel_has_no_zoom() {
        let n = normalize_wheel(&wheel(3.0, -40.0));
        assert_eq!(n.x, 3.0);
        assert_eq!(n.y, -40.0);
        assert_eq!(n.z, 0.0);
    }

    #[test]
    fn test_normalize_caps_zoom_step() {
        let mut input = wheel(0.0, -250.0);
        input.modifiers.ctrl = true;
        let n = normalize_wheel(&input);
        assert_eq!(n.z, -MAX_ZOOM_STEP);
        // Pan component is untouched
        assert_eq!(n.y, -250.0);

        input.modifiers = Modifiers { meta: true, ..Default::default() };
        input.delta.y = 4.0;
        assert_eq!(normalize_wheel(&input).z, 4.0);
    }

    #[test]
    fn test_alt_does_not_produce_zoom_delta() {
        let mut input = wheel(0.0, 50.0);
        input.modifiers.alt = true;
        assert_eq!(normalize_wheel(&input).z, 0.0);
        // Still classified as zoom, with a neutral factor
        match classify_wheel(&input, ScrollDirection::Vertical, Platform::Other) {
            WheelAction::Zoom { factor, .. } => assert_eq!(factor, 1.0),
            other => panic!("expected zoom, got {:?}", other),
        }
    }

    #[test]
    fn test_ctrl_wheel_zoom_factor() {
        let mut input = wheel(0.0, -10.0);
        input.modifiers.ctrl = true;
        input.client = Some(Vec2::new(5.0, 6.0));
        match classify_wheel(&input, ScrollDirection::Vertical, Platform::Other) {
            WheelAction::Zoom { factor, pivot } => {
                assert!((factor - (1.0 + 10.0 * 0.618 / 80.0)).abs() < 1e-12);
                assert_eq!(pivot, Some(Vec2::new(5.0, 6.0)));
            }
            other => panic!("expected zoom, got {:?}", other),
        }
    }

    #[test]
    fn test_client_point_requires_both_coordinates() {
        assert_eq!(WheelInput::client_point(12.0, 7.5), Some(Vec2::new(12.0, 7.5)));
        assert_eq!(WheelInput::client_point(0.0, 0.0), None);
        assert_eq!(WheelInput::client_point(0.0, 40.0), None);
        assert_eq!(WheelInput::client_point(40.0, 0.0), None);
    }

    #[test]
    fn test_modifier_with_button_pressed_pans() {
        let mut input = wheel(2.0, 8.0);
        input.modifiers.ctrl = true;
        input.buttons = 1;
        assert_eq!(
            classify_wheel(&input, ScrollDirection::Vertical, Platform::Other),
            WheelAction::Pan(Vec2::new(1.0, 4.0))
        );
    }

    #[test]
    fn test_pan_mapping() {
        let input = wheel(2.0, 8.0);
        assert_eq!(
            classify_wheel(&input, ScrollDirection::Vertical, Platform::Other),
            WheelAction::Pan(Vec2::new(1.0, 4.0))
        );
        assert_eq!(
            classify_wheel(&input, ScrollDirection::Horizontal, Platform::Other),
            WheelAction::Pan(Vec2::new(4.0, 0.0))
        );
    }

    #[test]
    fn test_shift_pan_mapping_depends_on_platform() {
        let mut input = wheel(2.0, 8.0);
        input.modifiers.shift = true;

        assert_eq!(
            classify_wheel(&input, ScrollDirection::Vertical, Platform::Other),
            WheelAction::Pan(Vec2::new(4.0, 0.0))
        );
        assert_eq!(
            classify_wheel(&input, ScrollDirection::Horizontal, Platform::Other),
            WheelAction::Pan(Vec2::new(1.0, 4.0))
        );
        assert_eq!(
            classify_wheel(&input, ScrollDirection::Vertical, Platform::Apple),
            WheelAction::Pan(Vec2::new(1.0, 4.0))
        );
    }
}
