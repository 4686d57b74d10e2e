pub mod contact;
pub mod focus;
pub mod overlay;
pub mod projection;

pub use contact::{find, sweep, RadarContact, TrackedObject};
pub use focus::focus_target;
pub use overlay::{render, OverlayStyle};
pub use projection::{project, RadarPoint};
