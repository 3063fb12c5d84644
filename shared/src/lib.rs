pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod shared_wheel_game;
pub mod validation;
pub mod wheel_geometry;
pub mod wheel_math;

pub use config::WheelConfig;
pub use error::WheelError;
pub use shared_wheel_game::{SpinTicket, WheelGame};
