//! 音符和时值定义

use embassy_time::Duration;

use crate::types::InvalidDurationCode;

/// 音符时值
///
/// 判别值就是时值编码：音符占基本时间单位的 `1 / code`。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum NoteDuration {
    Whole = 1,
    Half = 2,
    Quarter = 4,
    Eighth = 8,
    Sixteenth = 16,
}

/// 未指定时值时使用八分音符
pub const DEFAULT_DURATION: NoteDuration = NoteDuration::Eighth;

impl NoteDuration {
    pub const ALL: [NoteDuration; 5] = [
        NoteDuration::Whole,
        NoteDuration::Half,
        NoteDuration::Quarter,
        NoteDuration::Eighth,
        NoteDuration::Sixteenth,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(NoteDuration::Whole),
            2 => Some(NoteDuration::Half),
            4 => Some(NoteDuration::Quarter),
            8 => Some(NoteDuration::Eighth),
            16 => Some(NoteDuration::Sixteenth),
            _ => None,
        }
    }

    /// 在给定基本时间单位下的实际时长
    pub fn of(self, base_unit: Duration) -> Duration {
        base_unit / self.code() as u32
    }
}

impl Default for NoteDuration {
    fn default() -> Self {
        DEFAULT_DURATION
    }
}

impl TryFrom<u8> for NoteDuration {
    type Error = InvalidDurationCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(InvalidDurationCode(code))
    }
}

/// 音符：频率 (Hz, 0 表示休止) 加时值
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub frequency: u32,
    pub duration: NoteDuration,
}

impl Note {
    pub const fn new(frequency: u32, duration: NoteDuration) -> Self {
        Self {
            frequency,
            duration,
        }
    }

    pub const fn rest(duration: NoteDuration) -> Self {
        Self::new(0, duration)
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency == 0
    }

    pub fn length(&self, base_unit: Duration) -> Duration {
        self.duration.of(base_unit)
    }
}
