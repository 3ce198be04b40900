pub mod buzzer;
pub mod clock;

pub use buzzer::*;
pub use clock::*;
