//! Semantic gesture events and the sink that receives them.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapDetail {
    pub tapped_coordinates: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanStartDetail {
    pub coordinates: Point,
}

/// Payload shared by `panmove` and `panend`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanDetail {
    pub start_coordinates: Point,
    pub current_coordinates: Point,
}

/// Payload shared by `pinchstart` (where `scale` is always 1) and `pinchmove`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinchDetail {
    pub distance: f64,
    pub scale: f64,
    pub center: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    Tap(TapDetail),
    PanStart(PanStartDetail),
    PanMove(PanDetail),
    PanEnd(PanDetail),
    PinchStart(PinchDetail),
    PinchMove(PinchDetail),
    PinchEnd,
}

impl GestureEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tap(_) => "tap",
            Self::PanStart(_) => "panstart",
            Self::PanMove(_) => "panmove",
            Self::PanEnd(_) => "panend",
            Self::PinchStart(_) => "pinchstart",
            Self::PinchMove(_) => "pinchmove",
            Self::PinchEnd => "pinchend",
        }
    }

    /// The payload as JSON, with the field names listeners expect.
    pub fn detail(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Tap(d) => serde_json::to_value(d),
            Self::PanStart(d) => serde_json::to_value(d),
            Self::PanMove(d) | Self::PanEnd(d) => serde_json::to_value(d),
            Self::PinchStart(d) | Self::PinchMove(d) => serde_json::to_value(d),
            Self::PinchEnd => Ok(serde_json::Value::Object(serde_json::Map::new())),
        }
    }
}

/// Destination for emitted gestures. Owned by the caller; the recognizer only
/// hands events over and keeps nothing.
pub trait GestureSink {
    fn emit(&mut self, event: GestureEvent);
}

impl<F> GestureSink for F
where
    F: FnMut(GestureEvent),
{
    fn emit(&mut self, event: GestureEvent) {
        self(event)
    }
}
