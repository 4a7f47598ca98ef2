//! Wires the pointer events of one DOM element into a [`GestureRecognizer`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CustomEvent, CustomEventInit, EventTarget, HtmlElement, PointerEvent};

use crate::events::{GestureEvent, GestureSink};
use crate::geometry::Point;
use crate::model::{GestureState, PointerId, PointerInput, PointerKind};
use crate::recognizer::GestureRecognizer;

pub const POINTER_EVENT_TYPES: [&str; 6] = [
    "pointerdown",
    "pointermove",
    "pointerup",
    "pointercancel",
    "pointerout",
    "pointerleave",
];

impl PointerInput {
    /// Reads a DOM pointer event in client coordinates.
    pub fn from_dom(e: &PointerEvent) -> Option<Self> {
        let kind = PointerKind::from_event_type(&e.type_())?;
        Some(Self::new(
            PointerId(e.pointer_id()),
            Point::new(e.client_x() as f64, e.client_y() as f64),
            kind,
        ))
    }
}

type PointerClosure = Closure<dyn FnMut(PointerEvent)>;

/// Listeners registered on a tracked element. Dropping the binding removes them.
pub struct SurfaceBinding {
    element: HtmlElement,
    recognizer: Rc<RefCell<GestureRecognizer>>,
    listeners: Vec<(&'static str, PointerClosure)>,
}

impl SurfaceBinding {
    pub fn attach<S>(
        element: &HtmlElement,
        recognizer: GestureRecognizer,
        sink: S,
    ) -> Result<Self, JsValue>
    where
        S: GestureSink + 'static,
    {
        let recognizer = Rc::new(RefCell::new(recognizer));
        let sink = Rc::new(RefCell::new(sink));
        let mut binding = Self {
            element: element.clone(),
            recognizer: recognizer.clone(),
            listeners: Vec::with_capacity(POINTER_EVENT_TYPES.len()),
        };
        for event_type in POINTER_EVENT_TYPES {
            let recognizer = recognizer.clone();
            let sink = sink.clone();
            let cb = Closure::wrap(Box::new(move |e: PointerEvent| {
                e.stop_propagation();
                e.prevent_default();
                let Some(input) = PointerInput::from_dom(&e) else {
                    return;
                };
                // Release the recognizer before the sink runs.
                let emitted = recognizer.borrow_mut().feed(&input);
                if emitted.is_empty() {
                    return;
                }
                let mut sink = sink.borrow_mut();
                for event in emitted {
                    sink.emit(event);
                }
            }) as Box<dyn FnMut(PointerEvent)>);
            // On failure the binding drops and unregisters what was added so far.
            element.add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref())?;
            binding.listeners.push((event_type, cb));
        }
        log::debug!("bound {} pointer listeners", binding.listeners.len());
        Ok(binding)
    }

    pub fn gesture_state(&self) -> GestureState {
        *self.recognizer.borrow().state()
    }
}

impl Drop for SurfaceBinding {
    fn drop(&mut self) {
        for (event_type, cb) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref());
        }
    }
}

/// Re-dispatches gestures as DOM `CustomEvent`s on a target, named after the
/// gesture, with the JSON payload as `detail`.
#[derive(Clone)]
pub struct DomEventSink {
    target: EventTarget,
}

impl DomEventSink {
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }

    pub fn dispatch(&self, event: &GestureEvent) -> Result<bool, JsValue> {
        let detail = event
            .detail()
            .and_then(|d| serde_json::to_string(&d))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let init = CustomEventInit::new();
        init.set_bubbles(false);
        init.set_detail(&js_sys::JSON::parse(&detail)?);
        let custom = CustomEvent::new_with_event_init_dict(event.name(), &init)?;
        self.target.dispatch_event(&custom)
    }
}

impl GestureSink for DomEventSink {
    fn emit(&mut self, event: GestureEvent) {
        if let Err(err) = self.dispatch(&event) {
            log::warn!("failed to dispatch {}: {:?}", event.name(), err);
        }
    }
}
