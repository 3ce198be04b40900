pub mod config;
pub mod display;
pub mod error;
pub mod melody;
pub mod pitch;

pub use config::*;
pub use display::*;
pub use error::*;
pub use melody::*;
