pub mod canvas;
pub mod clock;
pub mod input_adapter;
pub mod timer;

pub use canvas::{Canvas, DrawOp, Rgba};
pub use clock::Clock;
pub use input_adapter::KeyboardController;
pub use timer::{Accumulator, Throttled};
