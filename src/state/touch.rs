// Applies recognized gestures to the camera.
use yew_touch_gestures::{GestureEvent, Point};

use super::camera::{Camera, MAX_ZOOM, MIN_ZOOM};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanAnchor {
    offset_x: f64,
    offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchAnchor {
    zoom: f64,
    world_x: f64,
    world_y: f64,
}

#[derive(Default, Debug, Clone)]
pub struct TouchState {
    pan: Option<PanAnchor>,
    pinch: Option<PinchAnchor>,
    /// Cells toggled by taps.
    pub markers: Vec<(i32, i32)>,
}

impl TouchState {
    /// `origin` is the canvas' top-left corner in client coordinates.
    /// Returns whether the camera or markers changed.
    pub fn apply(&mut self, cam: &mut Camera, event: &GestureEvent, origin: Point) -> bool {
        match event {
            GestureEvent::Tap(d) => {
                let (wx, wy) = cam.screen_to_world(
                    d.tapped_coordinates.x - origin.x,
                    d.tapped_coordinates.y - origin.y,
                );
                let cell = (wx.floor() as i32, wy.floor() as i32);
                if let Some(i) = self.markers.iter().position(|m| *m == cell) {
                    self.markers.remove(i);
                } else {
                    self.markers.push(cell);
                }
                true
            }
            GestureEvent::PanStart(_) => {
                self.pan = Some(PanAnchor {
                    offset_x: cam.offset_x,
                    offset_y: cam.offset_y,
                });
                false
            }
            GestureEvent::PanMove(d) | GestureEvent::PanEnd(d) => {
                let Some(anchor) = self.pan else {
                    return false;
                };
                cam.offset_x =
                    anchor.offset_x + d.current_coordinates.x - d.start_coordinates.x;
                cam.offset_y =
                    anchor.offset_y + d.current_coordinates.y - d.start_coordinates.y;
                if matches!(event, GestureEvent::PanEnd(_)) {
                    self.pan = None;
                }
                true
            }
            GestureEvent::PinchStart(d) => {
                self.pan = None;
                let (world_x, world_y) =
                    cam.screen_to_world(d.center.x - origin.x, d.center.y - origin.y);
                self.pinch = Some(PinchAnchor {
                    zoom: cam.zoom,
                    world_x,
                    world_y,
                });
                false
            }
            GestureEvent::PinchMove(d) => {
                let Some(anchor) = self.pinch else {
                    return false;
                };
                // The world point under the starting center follows the fingers.
                cam.zoom = (anchor.zoom * d.scale).clamp(MIN_ZOOM, MAX_ZOOM);
                cam.pin(
                    (anchor.world_x, anchor.world_y),
                    (d.center.x - origin.x, d.center.y - origin.y),
                );
                true
            }
            GestureEvent::PinchEnd => {
                self.pinch = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_touch_gestures::events::{PanDetail, PanStartDetail, PinchDetail, TapDetail};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn pan_is_relative_to_start_offset() {
        let mut cam = Camera::default();
        cam.offset_x = 100.0;
        let mut ts = TouchState::default();
        ts.apply(
            &mut cam,
            &GestureEvent::PanStart(PanStartDetail {
                coordinates: pt(0.0, 0.0),
            }),
            Point::default(),
        );
        let step = PanDetail {
            start_coordinates: pt(0.0, 0.0),
            current_coordinates: pt(15.0, -5.0),
        };
        assert!(ts.apply(&mut cam, &GestureEvent::PanMove(step), Point::default()));
        assert!(ts.apply(&mut cam, &GestureEvent::PanMove(step), Point::default()));
        assert_eq!((cam.offset_x, cam.offset_y), (115.0, -5.0));
        ts.apply(&mut cam, &GestureEvent::PanEnd(step), Point::default());
        assert!(!ts.apply(&mut cam, &GestureEvent::PanMove(step), Point::default()));
    }

    #[test]
    fn pinch_scales_zoom_from_start() {
        let mut cam = Camera::default();
        cam.zoom = 2.0;
        let mut ts = TouchState::default();
        let origin = pt(10.0, 10.0);
        ts.apply(
            &mut cam,
            &GestureEvent::PinchStart(PinchDetail {
                distance: 10.0,
                scale: 1.0,
                center: pt(60.0, 60.0),
            }),
            origin,
        );
        let anchored = cam.screen_to_world(50.0, 50.0);
        ts.apply(
            &mut cam,
            &GestureEvent::PinchMove(PinchDetail {
                distance: 15.0,
                scale: 1.5,
                center: pt(60.0, 60.0),
            }),
            origin,
        );
        assert_eq!(cam.zoom, 3.0);
        let now = cam.screen_to_world(50.0, 50.0);
        assert!((now.0 - anchored.0).abs() < 1e-9);
        assert!((now.1 - anchored.1).abs() < 1e-9);

        ts.apply(&mut cam, &GestureEvent::PinchEnd, origin);
        let moved = ts.apply(
            &mut cam,
            &GestureEvent::PinchMove(PinchDetail {
                distance: 30.0,
                scale: 3.0,
                center: pt(0.0, 0.0),
            }),
            origin,
        );
        assert!(!moved);
        assert_eq!(cam.zoom, 3.0);
    }

    #[test]
    fn tap_toggles_marker_cell() {
        let mut cam = Camera::default();
        cam.zoom = 1.0;
        let mut ts = TouchState::default();
        let tap = GestureEvent::Tap(TapDetail {
            tapped_coordinates: pt(40.0, 70.0),
        });
        ts.apply(&mut cam, &tap, Point::default());
        assert_eq!(ts.markers, vec![(1, 2)]);
        ts.apply(&mut cam, &tap, Point::default());
        assert!(ts.markers.is_empty());
    }
}
