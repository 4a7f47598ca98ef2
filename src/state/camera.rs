// Camera over the world grid. World units are cells; one cell is TILE_PX
// canvas pixels at zoom 1.
pub const TILE_PX: f64 = 32.0;
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub initialized: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 2.5,
            offset_x: 0.0,
            offset_y: 0.0,
            initialized: false,
        }
    }
}

impl Camera {
    pub fn scale_px(&self) -> f64 {
        self.zoom * TILE_PX
    }

    pub fn screen_to_world(&self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        let s = self.scale_px();
        ((canvas_x - self.offset_x) / s, (canvas_y - self.offset_y) / s)
    }

    /// Places `world` at canvas position `canvas` at the current zoom.
    pub fn pin(&mut self, world: (f64, f64), canvas: (f64, f64)) {
        let s = self.scale_px();
        self.offset_x = canvas.0 - world.0 * s;
        self.offset_y = canvas.1 - world.1 * s;
    }

    /// Zooms while keeping the world point under `(canvas_x, canvas_y)` fixed.
    pub fn zoom_about(&mut self, canvas_x: f64, canvas_y: f64, zoom: f64) {
        let world = self.screen_to_world(canvas_x, canvas_y);
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.pin(world, (canvas_x, canvas_y));
    }

    pub fn center_on(&mut self, world: (f64, f64), width: f64, height: f64) {
        self.pin(world, (width / 2.0, height / 2.0));
        self.initialized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut cam = Camera::default();
        cam.offset_x = 40.0;
        cam.offset_y = -8.0;
        let before = cam.screen_to_world(120.0, 90.0);
        cam.zoom_about(120.0, 90.0, 4.0);
        let after = cam.screen_to_world(120.0, 90.0);
        assert_eq!(cam.zoom, 4.0);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::default();
        cam.zoom_about(0.0, 0.0, 50.0);
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.zoom_about(0.0, 0.0, 0.01);
        assert_eq!(cam.zoom, MIN_ZOOM);
    }

    #[test]
    fn center_on_puts_world_point_mid_canvas() {
        let mut cam = Camera::default();
        cam.center_on((10.0, 5.0), 800.0, 600.0);
        let (wx, wy) = cam.screen_to_world(400.0, 300.0);
        assert!((wx - 10.0).abs() < 1e-9);
        assert!((wy - 5.0).abs() < 1e-9);
        assert!(cam.initialized);
    }
}
