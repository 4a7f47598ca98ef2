//! Pointer gesture recognition for a single tracked surface.
//!
//! Raw pointer events (down, move, and the four ways a contact ends) go in;
//! `tap`, `panstart`/`panmove`/`panend` and `pinchstart`/`pinchmove`/`pinchend`
//! come out through a caller-supplied [`GestureSink`].

pub mod binding;
pub mod config;
pub mod events;
pub mod geometry;
pub mod model;
pub mod recognizer;
pub mod util;

pub use binding::{DomEventSink, SurfaceBinding};
pub use config::GestureConfig;
pub use events::{GestureEvent, GestureSink};
pub use geometry::{Point, distance, midpoint};
pub use model::{GestureState, PointerId, PointerInput, PointerKind};
pub use recognizer::{GestureRecognizer, transition};
