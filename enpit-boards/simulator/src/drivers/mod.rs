mod buzzer;
mod clock;
mod display;

pub use buzzer::SimulatorPwm;
pub use clock::EmbassyClock;
pub use display::SimulatorBackpack;
