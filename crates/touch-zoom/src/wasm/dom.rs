//! DOM event wiring
//!
//! [`bind`] attaches every listener the engine needs to one element and
//! hands back the engine. The listeners keep the engine alive until
//! [`TouchZoom::destroy`] is called, which removes them all.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, PointerEvent,
    ResizeObserver, WheelEvent, Window,
};

use crate::bounds::{nearest_scroll_container, Overflow, ScrollAnchor, ScrollNode, BOUNDS_DEBOUNCE_MS};
use crate::config::TouchZoomConfig;
use crate::engine::TouchZoom;
use crate::host::ViewportHost;
use crate::input::{
    GestureRecognizer, Modifiers, PinchInput, PinchSource, Platform, PointerSample, WheelInput,
};
use crate::math::{Rect, Vec2};
use super::frames::performance_now;
use super::log;

type EventCallback = Closure<dyn FnMut(Event)>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: EventCallback,
}

/// Everything registered with the browser on the engine's behalf
#[derive(Default)]
struct Bindings {
    listeners: Vec<Listener>,
    resize_observer: Option<(ResizeObserver, Closure<dyn FnMut(js_sys::Array)>)>,
    refresh_callback: Option<Closure<dyn FnMut()>>,
    refresh_timer: Option<i32>,
    refresh_deadline: Option<f64>,
}

impl Bindings {
    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: EventCallback,
    ) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    fn release(&mut self, window: &Window) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
        if let Some((observer, _callback)) = self.resize_observer.take() {
            observer.disconnect();
        }
        if let Some(handle) = self.refresh_timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        self.refresh_deadline = None;
        self.refresh_callback = None;
    }
}

/// A DOM element acting as the engine's viewport
pub struct DomViewport {
    element: Element,
    window: Window,
    bindings: Rc<RefCell<Bindings>>,
}

impl ViewportHost for DomViewport {
    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn platform(&self) -> Platform {
        self.window
            .navigator()
            .platform()
            .map(|platform| Platform::from_navigator(&platform))
            .unwrap_or_default()
    }

    fn detach(&mut self) {
        self.bindings.borrow_mut().release(&self.window);
    }
}

impl ScrollNode for Element {
    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn is_document_body(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .is_some_and(|body| body.is_same_node(Some(self.as_ref())))
    }

    fn overflow_y(&self) -> Overflow {
        web_sys::window()
            .and_then(|window| window.get_computed_style(self).ok().flatten())
            .and_then(|style| style.get_property_value("overflow-y").ok())
            .map(|value| Overflow::from_css(&value))
            .unwrap_or_default()
    }

    fn scroll_height(&self) -> f64 {
        f64::from(Element::scroll_height(self))
    }

    fn client_height(&self) -> f64 {
        f64::from(Element::client_height(self))
    }
}

/// Attach an engine to `element`.
///
/// Fails if there is no browser window, the config is invalid, or a
/// listener cannot be registered.
pub fn bind(element: Element, config: TouchZoomConfig) -> Result<TouchZoom<DomViewport>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("touch-zoom: no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("touch-zoom: no document"))?;

    let bindings = Rc::new(RefCell::new(Bindings::default()));
    let host = DomViewport {
        element: element.clone(),
        window: window.clone(),
        bindings: Rc::clone(&bindings),
    };
    let engine = TouchZoom::new(host, config).map_err(|err| JsValue::from(JsError::from(err)))?;

    if let Err(err) = install(&engine, &element, &window, &document, &bindings) {
        log(&format!("[touch-zoom] failed to attach listeners: {:?}", err));
        engine.destroy();
        return Err(err);
    }
    Ok(engine)
}

fn install(
    engine: &TouchZoom<DomViewport>,
    element: &Element,
    window: &Window,
    document: &Document,
    bindings: &Rc<RefCell<Bindings>>,
) -> Result<(), JsValue> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property("touch-action", "none")?;
    }

    let recognizer = Rc::new(RefCell::new(GestureRecognizer::new()));
    let webkit_pinch = Rc::new(Cell::new(false));
    let mut guard = bindings.borrow_mut();
    let b = &mut *guard;
    let viewport: &EventTarget = element.as_ref();

    // =========================================================================
    // Wheel
    // =========================================================================

    b.listen(viewport, "wheel", false, {
        let engine = engine.clone();
        callback(move |event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            wheel.prevent_default();
            engine.handle_wheel(&wheel_input(wheel));
        })
    })?;

    // =========================================================================
    // Pointers (mouse drag, touch drag and two-finger pinch)
    // =========================================================================

    b.listen(viewport, "pointerdown", false, {
        let engine = engine.clone();
        let recognizer = Rc::clone(&recognizer);
        let element = element.clone();
        callback(move |event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let _ = element.set_pointer_capture(pointer.pointer_id());
            let gesture = recognizer.borrow_mut().pointer_down(pointer_sample(pointer));
            if let Some(gesture) = gesture {
                engine.handle_gesture(gesture);
            }
        })
    })?;

    b.listen(viewport, "pointermove", false, {
        let engine = engine.clone();
        let recognizer = Rc::clone(&recognizer);
        callback(move |event| {
            let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let gesture = recognizer.borrow_mut().pointer_move(pointer_sample(pointer));
            if let Some(gesture) = gesture {
                engine.handle_gesture(gesture);
            }
        })
    })?;

    for name in ["pointerup", "pointercancel"] {
        b.listen(viewport, name, false, {
            let engine = engine.clone();
            let recognizer = Rc::clone(&recognizer);
            callback(move |event| {
                let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let gesture = recognizer
                    .borrow_mut()
                    .pointer_up(pointer.pointer_id(), pointer.time_stamp());
                if let Some(gesture) = gesture {
                    engine.handle_gesture(gesture);
                }
            })
        })?;
    }

    // =========================================================================
    // Safari gesture events
    // =========================================================================

    // Keep Safari from zooming the whole page
    let document_target: &EventTarget = document.as_ref();
    for name in ["gesturestart", "gesturechange"] {
        b.listen(document_target, name, false, callback(|event| event.prevent_default()))?;
    }

    b.listen(viewport, "gesturestart", false, {
        let engine = engine.clone();
        let recognizer = Rc::clone(&recognizer);
        let active = Rc::clone(&webkit_pinch);
        callback(move |event| {
            event.prevent_default();
            if recognizer.borrow().is_pinching() {
                return;
            }
            if let Some(input) = webkit_pinch_input(&event) {
                active.set(engine.handle_pinch_start(&input).is_handled());
            }
        })
    })?;

    b.listen(viewport, "gesturechange", false, {
        let engine = engine.clone();
        let active = Rc::clone(&webkit_pinch);
        callback(move |event| {
            event.prevent_default();
            if !active.get() {
                return;
            }
            if let Some(input) = webkit_pinch_input(&event) {
                engine.handle_pinch(&input);
            }
        })
    })?;

    b.listen(viewport, "gestureend", false, {
        let engine = engine.clone();
        let active = Rc::clone(&webkit_pinch);
        callback(move |event| {
            event.prevent_default();
            if active.replace(false) {
                engine.handle_pinch_end();
            }
        })
    })?;

    // =========================================================================
    // Layout
    // =========================================================================

    let on_element_resize = {
        let engine = engine.clone();
        Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            engine.handle_element_resize();
        }) as Box<dyn FnMut(js_sys::Array)>)
    };
    let observer = ResizeObserver::new(on_element_resize.as_ref().unchecked_ref())?;
    observer.observe(element);
    b.resize_observer = Some((observer, on_element_resize));

    b.refresh_callback = Some({
        let engine = engine.clone();
        let window = window.clone();
        let bindings = Rc::downgrade(bindings);
        Closure::wrap(Box::new(move || {
            let Some(bindings) = bindings.upgrade() else {
                return;
            };
            let deadline = {
                let mut b = bindings.borrow_mut();
                b.refresh_timer = None;
                b.refresh_deadline.take()
            };
            // The timer was armed for the deadline, so it is due even if
            // the clock reads a hair early
            if let Some(deadline) = deadline {
                engine.poll_bounds_update(performance_now(&window).max(deadline));
            }
        }) as Box<dyn FnMut()>)
    });

    let window_target: &EventTarget = window.as_ref();
    b.listen(window_target, "resize", true, {
        let schedule = refresh_scheduler(engine, window, bindings);
        callback(move |_| schedule())
    })?;

    let scroll_target: EventTarget = match nearest_scroll_container(element) {
        ScrollAnchor::Element(ancestor) => ancestor.into(),
        ScrollAnchor::Document => document.clone().into(),
    };
    b.listen(&scroll_target, "scroll", true, {
        let schedule = refresh_scheduler(engine, window, bindings);
        callback(move |_| schedule())
    })?;

    Ok(())
}

fn callback(f: impl FnMut(Event) + 'static) -> EventCallback {
    Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>)
}

/// Debounced bounds refresh shared by the resize and scroll listeners
fn refresh_scheduler(
    engine: &TouchZoom<DomViewport>,
    window: &Window,
    bindings: &Rc<RefCell<Bindings>>,
) -> impl Fn() + 'static {
    let engine = engine.clone();
    let window = window.clone();
    let bindings: Weak<RefCell<Bindings>> = Rc::downgrade(bindings);
    move || {
        let Some(deadline) = engine.schedule_bounds_update(performance_now(&window)) else {
            return;
        };
        let Some(bindings) = bindings.upgrade() else {
            return;
        };
        let mut guard = bindings.borrow_mut();
        let b = &mut *guard;
        if let Some(handle) = b.refresh_timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        b.refresh_deadline = Some(deadline);

        let Some(refresh) = &b.refresh_callback else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            refresh.as_ref().unchecked_ref(),
            BOUNDS_DEBOUNCE_MS as i32,
        ) {
            Ok(handle) => b.refresh_timer = Some(handle),
            Err(err) => log(&format!("[touch-zoom] failed to arm bounds refresh: {:?}", err)),
        }
    }
}

fn wheel_input(wheel: &WheelEvent) -> WheelInput {
    WheelInput {
        delta: Vec2::new(wheel.delta_x(), wheel.delta_y()),
        client: WheelInput::client_point(f64::from(wheel.client_x()), f64::from(wheel.client_y())),
        timestamp_ms: wheel.time_stamp(),
        modifiers: Modifiers {
            alt: wheel.alt_key(),
            ctrl: wheel.ctrl_key(),
            meta: wheel.meta_key(),
            shift: wheel.shift_key(),
        },
        buttons: wheel.buttons(),
    }
}

fn pointer_sample(pointer: &PointerEvent) -> PointerSample {
    PointerSample::new(
        pointer.pointer_id(),
        Vec2::new(f64::from(pointer.client_x()), f64::from(pointer.client_y())),
        pointer.time_stamp(),
    )
}

/// Read a WebKit `GestureEvent`, which web-sys does not model
fn webkit_pinch_input(event: &Event) -> Option<PinchInput> {
    let field = |name: &str| js_sys::Reflect::get(event, &JsValue::from_str(name)).ok()?.as_f64();
    Some(PinchInput {
        origin: Vec2::new(field("clientX")?, field("clientY")?),
        movement: field("scale")?,
        source: PinchSource::WebKitGesture,
    })
}
