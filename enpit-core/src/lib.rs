#![cfg_attr(not(test), no_std)]

pub mod buzzer;
pub mod melodies;
pub mod seven_segment;

pub use buzzer::{NoteBuffer, PlaybackState, Player, PwmBuzzer, Sounding, BUFFER_SIZE};
pub use melodies::Melody;
pub use seven_segment::SevenSegment;
