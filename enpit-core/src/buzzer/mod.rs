//! 非阻塞蜂鸣器旋律播放
//!
//! 调用方先 [`Player::write`] 填入旋律，再 [`Player::play`]，
//! 之后在主循环里每次调用 [`Player::output`]。

mod buffer;
mod player;
mod pwm;

pub use buffer::{BUFFER_SIZE, NoteBuffer};
pub use player::{PlaybackState, Player, Sounding};
pub use pwm::PwmBuzzer;
