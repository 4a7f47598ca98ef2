use serde::{Deserialize, Serialize};

/// A position in client coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

pub fn midpoint(a: Point, b: Point) -> Point {
    Point {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(-5.0, 0.0), Point::new(10.0, 0.0)), 15.0);
    }

    #[test]
    fn midpoint_averages_each_axis() {
        let m = midpoint(Point::new(-5.0, 2.0), Point::new(10.0, 4.0));
        assert_eq!(m, Point::new(2.5, 3.0));
    }
}
