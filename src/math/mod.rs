pub mod angle;
pub mod orientation;
pub mod smoothing;

pub use angle::{heading_degrees, wrap_angle, wrap_degrees};
pub use orientation::{look_rotation, slerp};
pub use smoothing::{approach2, approach3, smoothing_factor, Response};
