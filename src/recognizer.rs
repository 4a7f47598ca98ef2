//! Tap / pan / pinch recognition over a stream of pointer inputs.
//!
//! [`transition`] is a pure function of the current state and one input.
//! [`GestureRecognizer`] owns the state for a single tracked surface and
//! forwards whatever a transition emits to a [`GestureSink`].

use log::{debug, trace};
use smallvec::{SmallVec, smallvec};

use crate::config::GestureConfig;
use crate::events::{
    GestureEvent, GestureSink, PanDetail, PanStartDetail, PinchDetail, TapDetail,
};
use crate::geometry::{Point, distance, midpoint};
use crate::model::{GestureState, PointerId, PointerInput, PointerKind, TrackedPointer};

/// Events produced by one transition. At most two: a pinch losing a pointer
/// emits `pinchend` followed by `panstart`.
pub type Emitted = SmallVec<[GestureEvent; 2]>;

pub fn transition(
    state: GestureState,
    input: &PointerInput,
    config: &GestureConfig,
) -> (GestureState, Emitted) {
    let id = input.pointer_id;
    let pos = input.position;
    match input.kind {
        PointerKind::Down => on_down(state, id, pos),
        PointerKind::Move => on_move(state, id, pos, config.tap_tolerance),
        PointerKind::Up | PointerKind::Cancel | PointerKind::Leave | PointerKind::Out => {
            on_end(state, id)
        }
    }
}

fn on_down(state: GestureState, id: PointerId, pos: Point) -> (GestureState, Emitted) {
    match state {
        GestureState::NoGesture => (
            GestureState::PossibleTap(TrackedPointer::new(id, pos)),
            Emitted::new(),
        ),
        GestureState::PossibleTap(first) | GestureState::OngoingPan(first) if first.id != id => {
            // The first pointer's reference position is wherever it is now.
            let first = first.rebased();
            let second = TrackedPointer::new(id, pos);
            let start = PinchDetail {
                distance: distance(first.down, second.down),
                scale: 1.0,
                center: midpoint(first.down, second.down),
            };
            (
                GestureState::OngoingPinch { first, second },
                smallvec![GestureEvent::PinchStart(start)],
            )
        }
        // Repeated down for a tracked pointer, or a third contact.
        GestureState::PossibleTap(_)
        | GestureState::OngoingPan(_)
        | GestureState::OngoingPinch { .. } => (state, Emitted::new()),
    }
}

fn on_move(
    state: GestureState,
    id: PointerId,
    pos: Point,
    tap_tolerance: f64,
) -> (GestureState, Emitted) {
    match state {
        GestureState::PossibleTap(p) if p.id == id => {
            let p = p.moved_to(pos);
            if distance(p.down, p.last) > tap_tolerance {
                (
                    GestureState::OngoingPan(p),
                    smallvec![GestureEvent::PanStart(PanStartDetail {
                        coordinates: p.down,
                    })],
                )
            } else {
                (GestureState::PossibleTap(p), Emitted::new())
            }
        }
        GestureState::OngoingPan(p) if p.id == id => {
            let p = p.moved_to(pos);
            (
                GestureState::OngoingPan(p),
                smallvec![GestureEvent::PanMove(PanDetail {
                    start_coordinates: p.down,
                    current_coordinates: pos,
                })],
            )
        }
        GestureState::OngoingPinch { first, second } if first.id == id || second.id == id => {
            let (first, second) = if first.id == id {
                (first.moved_to(pos), second)
            } else {
                (first, second.moved_to(pos))
            };
            let current = distance(first.last, second.last);
            let reference = distance(first.down, second.down);
            // Coincident down positions leave no reference to scale against.
            let scale = if reference > 0.0 {
                current / reference
            } else {
                1.0
            };
            (
                GestureState::OngoingPinch { first, second },
                smallvec![GestureEvent::PinchMove(PinchDetail {
                    distance: current,
                    scale,
                    center: midpoint(first.last, second.last),
                })],
            )
        }
        GestureState::NoGesture
        | GestureState::PossibleTap(_)
        | GestureState::OngoingPan(_)
        | GestureState::OngoingPinch { .. } => (state, Emitted::new()),
    }
}

fn on_end(state: GestureState, id: PointerId) -> (GestureState, Emitted) {
    match state {
        GestureState::PossibleTap(p) if p.id == id => (
            GestureState::NoGesture,
            smallvec![GestureEvent::Tap(TapDetail {
                tapped_coordinates: p.down,
            })],
        ),
        GestureState::OngoingPan(p) if p.id == id => (
            GestureState::NoGesture,
            smallvec![GestureEvent::PanEnd(PanDetail {
                start_coordinates: p.down,
                current_coordinates: p.last,
            })],
        ),
        GestureState::OngoingPinch { first, second } if first.id == id || second.id == id => {
            let survivor = if first.id == id { second } else { first };
            let pan = survivor.rebased();
            (
                GestureState::OngoingPan(pan),
                smallvec![
                    GestureEvent::PinchEnd,
                    GestureEvent::PanStart(PanStartDetail {
                        coordinates: pan.down,
                    }),
                ],
            )
        }
        GestureState::NoGesture
        | GestureState::PossibleTap(_)
        | GestureState::OngoingPan(_)
        | GestureState::OngoingPinch { .. } => (state, Emitted::new()),
    }
}

/// Holds the gesture state of one tracked surface.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    state: GestureState,
    config: GestureConfig,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            state: GestureState::NoGesture,
            config: config.sanitized(),
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Applies one input and returns what it emitted instead of delivering it.
    pub fn feed(&mut self, input: &PointerInput) -> Emitted {
        let previous = self.state;
        let (next, emitted) = transition(previous, input, &self.config);
        if previous.label() != next.label() {
            debug!(
                "{} {:?}: {} -> {}",
                input.kind.event_type(),
                input.pointer_id,
                previous.label(),
                next.label()
            );
        } else if emitted.is_empty() && previous == next {
            trace!(
                "{} {:?} ignored while {}",
                input.kind.event_type(),
                input.pointer_id,
                previous.label()
            );
        }
        self.state = next;
        emitted
    }

    pub fn handle<S: GestureSink + ?Sized>(&mut self, input: &PointerInput, sink: &mut S) {
        for event in self.feed(input) {
            sink.emit(event);
        }
    }

    pub fn pointer_down<S>(&mut self, id: PointerId, position: Point, sink: &mut S)
    where
        S: GestureSink + ?Sized,
    {
        self.handle(&PointerInput::new(id, position, PointerKind::Down), sink);
    }

    pub fn pointer_move<S>(&mut self, id: PointerId, position: Point, sink: &mut S)
    where
        S: GestureSink + ?Sized,
    {
        self.handle(&PointerInput::new(id, position, PointerKind::Move), sink);
    }

    /// Ends a contact; release, cancel, leave and out are indistinguishable here.
    pub fn pointer_end<S>(&mut self, id: PointerId, position: Point, sink: &mut S)
    where
        S: GestureSink + ?Sized,
    {
        self.handle(&PointerInput::new(id, position, PointerKind::Up), sink);
    }
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod tests;
