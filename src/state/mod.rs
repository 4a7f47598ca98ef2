pub mod camera;
pub mod touch;

pub use camera::Camera;
pub use touch::TouchState;
