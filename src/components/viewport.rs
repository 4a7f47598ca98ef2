use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;
use yew_touch_gestures::binding::POINTER_EVENT_TYPES;
use yew_touch_gestures::{
    DomEventSink, GestureConfig, GestureEvent, GestureRecognizer, GestureSink, GestureState,
    Point, SurfaceBinding,
};

use super::camera_controls::CameraControls;
use crate::state::{Camera, TouchState};

/// World size in cells.
const GRID_CELLS: u32 = 25;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewportProps {
    pub config: GestureConfig,
    pub on_gesture: Callback<GestureEvent>,
    pub on_state: Callback<&'static str>,
    pub on_settings: Callback<()>,
}

#[function_component(Viewport)]
pub fn viewport(props: &ViewportProps) -> Html {
    let canvas_ref = use_node_ref();
    let camera = use_mut_ref(Camera::default);
    let touch_state = use_mut_ref(TouchState::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let zoom = use_state_eq(|| Camera::default().zoom);

    let redraw = {
        let draw_ref = draw_ref.clone();
        move || {
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        }
    };

    // Mount effect; re-binds the recognizer whenever the config changes.
    {
        let canvas_ref = canvas_ref.clone();
        let camera = camera.clone();
        let touch_state = touch_state.clone();
        let draw_ref_setup = draw_ref.clone();
        let zoom_handle = zoom.clone();
        let on_gesture = props.on_gesture.clone();
        let on_state = props.on_state.clone();
        use_effect_with(props.config, move |config| {
            let config = *config;
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            compute_and_apply_canvas_size();
            {
                let mut cam = camera.borrow_mut();
                if !cam.initialized {
                    let mid = GRID_CELLS as f64 / 2.0;
                    cam.center_on((mid, mid), canvas.width() as f64, canvas.height() as f64);
                }
            }
            // Draw closure
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let touch_state = touch_state.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let cam = camera.borrow();
                    let scale_px = cam.scale_px();
                    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
                    ctx.set_fill_style_str("#0e1116");
                    ctx.fill_rect(0.0, 0.0, w, h);
                    ctx.set_transform(scale_px, 0.0, 0.0, scale_px, cam.offset_x, cam.offset_y)
                        .ok();
                    let n = GRID_CELLS as f64;
                    ctx.set_fill_style_str("#161b22");
                    ctx.fill_rect(0.0, 0.0, n, n);
                    ctx.set_stroke_style_str("#2f3641");
                    ctx.set_line_width((1.0f64 / scale_px).max(0.001f64));
                    for i in 0..=GRID_CELLS {
                        let p = i as f64;
                        ctx.begin_path();
                        ctx.move_to(p, 0.0);
                        ctx.line_to(p, n);
                        ctx.stroke();
                        ctx.begin_path();
                        ctx.move_to(0.0, p);
                        ctx.line_to(n, p);
                        ctx.stroke();
                    }
                    let margin = 0.1;
                    ctx.set_fill_style_str("#58a6ff");
                    for (x, y) in &touch_state.borrow().markers {
                        ctx.fill_rect(
                            *x as f64 + margin,
                            *y as f64 + margin,
                            1.0 - margin * 2.0,
                            1.0 - margin * 2.0,
                        );
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Gesture sink: re-dispatch on the canvas, then drive the camera.
            let binding_slot: Rc<RefCell<Option<SurfaceBinding>>> = Rc::new(RefCell::new(None));
            let sink = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let touch_state = touch_state.clone();
                let draw = draw_closure.clone();
                let zoom_handle = zoom_handle.clone();
                let mut dom_sink = DomEventSink::new(canvas.clone().into());
                move |event: GestureEvent| {
                    dom_sink.emit(event);
                    let rect = canvas.get_bounding_client_rect();
                    let origin = Point::new(rect.left(), rect.top());
                    let changed = {
                        let mut cam = camera.borrow_mut();
                        touch_state.borrow_mut().apply(&mut cam, &event, origin)
                    };
                    if changed {
                        zoom_handle.set(camera.borrow().zoom);
                        draw();
                    }
                    on_gesture.emit(event);
                }
            };
            let html_canvas: HtmlElement = canvas.clone().unchecked_into();
            match SurfaceBinding::attach(&html_canvas, GestureRecognizer::new(config), sink) {
                Ok(binding) => {
                    log::info!("gesture binding ready, tap tolerance {}", config.tap_tolerance);
                    *binding_slot.borrow_mut() = Some(binding);
                }
                Err(err) => log::error!("failed to bind pointer events: {:?}", err),
            }
            on_state.emit(GestureState::default().label());

            // Runs after the binding's own listener on the same element.
            let state_cb = {
                let binding_slot = binding_slot.clone();
                let last_label = Cell::new("");
                let on_state = on_state.clone();
                Closure::wrap(Box::new(move |_e: web_sys::PointerEvent| {
                    let Some(label) = binding_slot
                        .borrow()
                        .as_ref()
                        .map(|b| b.gesture_state().label())
                    else {
                        return;
                    };
                    if last_label.get() != label {
                        last_label.set(label);
                        on_state.emit(label);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            for event_type in POINTER_EVENT_TYPES {
                canvas
                    .add_event_listener_with_callback(event_type, state_cb.as_ref().unchecked_ref())
                    .ok();
            }
            // Wheel zoom
            let wheel_cb = {
                let camera = camera.clone();
                let draw = draw_closure.clone();
                let zoom_handle = zoom_handle.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let mut cam = camera.borrow_mut();
                    let zoom_change = (-e.delta_y() * 0.001).exp();
                    let target = cam.zoom * zoom_change;
                    cam.zoom_about(e.offset_x() as f64, e.offset_y() as f64, target);
                    zoom_handle.set(cam.zoom);
                    drop(cam);
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();
            let resize_cb = {
                let draw = draw_closure.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();
            // Cleanup
            move || {
                binding_slot.borrow_mut().take();
                for event_type in POINTER_EVENT_TYPES {
                    let _ = canvas.remove_event_listener_with_callback(
                        event_type,
                        state_cb.as_ref().unchecked_ref(),
                    );
                }
                let _ = canvas.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&state_cb, &wheel_cb, &resize_cb);
            }
        });
    }

    let zoom_by = |factor: f64| {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        let zoom = zoom.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let mut cam = camera.borrow_mut();
            let target = cam.zoom * factor;
            cam.zoom_about(
                canvas.width() as f64 / 2.0,
                canvas.height() as f64 / 2.0,
                target,
            );
            zoom.set(cam.zoom);
            drop(cam);
            redraw();
        })
    };
    let on_center = {
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let mid = GRID_CELLS as f64 / 2.0;
            camera.borrow_mut().center_on(
                (mid, mid),
                canvas.width() as f64,
                canvas.height() as f64,
            );
            redraw();
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <canvas ref={canvas_ref.clone()} style="display:block; touch-action:none; user-select:none;"></canvas>
            <CameraControls
                zoom={*zoom}
                on_zoom_in={zoom_by(1.25)}
                on_zoom_out={zoom_by(0.8)}
                on_center={on_center}
                on_settings={props.on_settings.clone()}
            />
        </div>
    }
}
