//! Pointer input records and the gesture state held by a recognizer.
//!
//! A state value is never edited in place by the recognizer; each transition
//! consumes the previous value and produces the next one.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier of one contact, stable for the duration of that contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Pointer left the tracked surface.
    Leave,
    /// Pointer moved out of the tracked surface (or one of its descendants).
    Out,
}

impl PointerKind {
    /// Maps a DOM pointer event type to its kind.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "pointerdown" => Some(Self::Down),
            "pointermove" => Some(Self::Move),
            "pointerup" => Some(Self::Up),
            "pointercancel" => Some(Self::Cancel),
            "pointerleave" => Some(Self::Leave),
            "pointerout" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Down => "pointerdown",
            Self::Move => "pointermove",
            Self::Up => "pointerup",
            Self::Cancel => "pointercancel",
            Self::Leave => "pointerleave",
            Self::Out => "pointerout",
        }
    }

    /// Release, cancellation, leave and out all end a contact the same way.
    pub fn is_termination(&self) -> bool {
        matches!(self, Self::Up | Self::Cancel | Self::Leave | Self::Out)
    }
}

/// One raw pointer event as delivered by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub pointer_id: PointerId,
    pub position: Point,
    pub kind: PointerKind,
}

impl PointerInput {
    pub fn new(pointer_id: PointerId, position: Point, kind: PointerKind) -> Self {
        Self {
            pointer_id,
            position,
            kind,
        }
    }

    pub fn down(id: i32, x: f64, y: f64) -> Self {
        Self::new(PointerId(id), Point::new(x, y), PointerKind::Down)
    }

    pub fn moved(id: i32, x: f64, y: f64) -> Self {
        Self::new(PointerId(id), Point::new(x, y), PointerKind::Move)
    }

    pub fn up(id: i32, x: f64, y: f64) -> Self {
        Self::new(PointerId(id), Point::new(x, y), PointerKind::Up)
    }
}

/// A pointer the recognizer is following.
///
/// `down` is fixed once recorded for the active gesture; `last` always holds
/// the most recent observed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedPointer {
    pub id: PointerId,
    pub down: Point,
    pub last: Point,
}

impl TrackedPointer {
    pub fn new(id: PointerId, position: Point) -> Self {
        Self {
            id,
            down: position,
            last: position,
        }
    }

    pub(crate) fn moved_to(self, position: Point) -> Self {
        Self {
            last: position,
            ..self
        }
    }

    /// Restarts tracking from the last known position.
    pub(crate) fn rebased(self) -> Self {
        Self::new(self.id, self.last)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No pointer is down.
    #[default]
    NoGesture,
    /// One pointer is down and has stayed within the tap tolerance.
    PossibleTap(TrackedPointer),
    /// One pointer is down and has moved beyond the tap tolerance.
    OngoingPan(TrackedPointer),
    /// Two pointers are down. Both `down` positions are the ones recorded when
    /// the second pointer touched, so they define the reference distance.
    OngoingPinch {
        first: TrackedPointer,
        second: TrackedPointer,
    },
}

impl GestureState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoGesture => "idle",
            Self::PossibleTap(_) => "possible tap",
            Self::OngoingPan(_) => "panning",
            Self::OngoingPinch { .. } => "pinching",
        }
    }

    pub fn tracked_count(&self) -> usize {
        match self {
            Self::NoGesture => 0,
            Self::PossibleTap(_) | Self::OngoingPan(_) => 1,
            Self::OngoingPinch { .. } => 2,
        }
    }

    pub fn is_tracking(&self, id: PointerId) -> bool {
        match self {
            Self::NoGesture => false,
            Self::PossibleTap(p) | Self::OngoingPan(p) => p.id == id,
            Self::OngoingPinch { first, second } => first.id == id || second.id == id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_round_trip_through_kind() {
        for name in [
            "pointerdown",
            "pointermove",
            "pointerup",
            "pointercancel",
            "pointerleave",
            "pointerout",
        ] {
            let kind = PointerKind::from_event_type(name).unwrap();
            assert_eq!(kind.event_type(), name);
        }
        assert_eq!(PointerKind::from_event_type("pointerenter"), None);
    }

    #[test]
    fn only_down_and_move_are_not_terminations() {
        assert!(!PointerKind::Down.is_termination());
        assert!(!PointerKind::Move.is_termination());
        assert!(PointerKind::Up.is_termination());
        assert!(PointerKind::Cancel.is_termination());
        assert!(PointerKind::Leave.is_termination());
        assert!(PointerKind::Out.is_termination());
    }

    #[test]
    fn pinch_tracks_both_ids() {
        let state = GestureState::OngoingPinch {
            first: TrackedPointer::new(PointerId(1), Point::new(0.0, 0.0)),
            second: TrackedPointer::new(PointerId(2), Point::new(10.0, 0.0)),
        };
        assert!(state.is_tracking(PointerId(1)));
        assert!(state.is_tracking(PointerId(2)));
        assert!(!state.is_tracking(PointerId(3)));
        assert_eq!(state.tracked_count(), 2);
        assert_eq!(state.label(), "pinching");
    }
}
