pub mod autopilot;
pub mod command;
pub mod flight;
pub mod navigator;
pub mod ship;
pub mod snapshot;
pub mod state;
pub mod transition;

pub use autopilot::AutopilotTarget;
pub use command::CommandSet;
pub use flight::Pursuit;
pub use navigator::Navigator;
pub use ship::ShipState;
pub use snapshot::{ModeSummary, NavSnapshot};
pub use state::{step, FlightMode, NavEvent, NavInput, NavState, Step};
pub use transition::{OrientationTransition, TransitionStep};
