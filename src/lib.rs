pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod math;
pub mod nav;
pub mod radar;
pub mod scenario;
pub mod traits;

pub use config::NavConfig;
pub use error::NavError;
pub use nav::{Navigator, NavSnapshot};
