use thiserror::Error;

pub type PlayerResult<T, E> = core::result::Result<T, PlayerError<E>>;

pub type DisplayResult<T, E> = core::result::Result<T, DisplayError<E>>;

/// 播放器错误，`E` 是蜂鸣器驱动的错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerError<E> {
    #[error("melody of {requested} notes exceeds buffer capacity {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("player used before begin()")]
    NotInitialized,

    #[error("operation not allowed while a melody is playing")]
    InvalidState,

    #[error("invalid note duration code {0}")]
    InvalidDuration(u8),

    #[error("buzzer driver error: {0:?}")]
    Driver(E),
}

impl<E> From<InvalidDurationCode> for PlayerError<E> {
    fn from(err: InvalidDurationCode) -> Self {
        PlayerError::InvalidDuration(err.0)
    }
}

/// 数码管错误，`E` 是 I2C 总线的错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    #[error("display used before begin()")]
    NotInitialized,

    #[error("digit {0} has no seven-segment glyph")]
    InvalidDigit(u8),

    #[error("unsupported number base {0}")]
    InvalidBase(u8),

    #[error("bus error: {0:?}")]
    Bus(E),
}

/// 时值编码不在 1/2/4/8/16 之内
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("invalid note duration code {0}")]
pub struct InvalidDurationCode(pub u8);
