use embassy_time::Duration;

use crate::types::{BRIGHTNESS_MAX, BlinkRate};

/// 开发板上蜂鸣器默认接在 GPIO7
pub const DEFAULT_BUZZER_PIN: u8 = 7;

/// 全音符时长
pub const DEFAULT_BASE_UNIT: Duration = Duration::from_millis(1000);

/// HT16K33 背板的默认 I2C 地址
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuzzerConfig {
    pub pin: u8,
    /// 同一段旋律中所有音符共用的基本时间单位，音符时长 = base_unit / 时值编码
    pub base_unit: Duration,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_BUZZER_PIN,
            base_unit: DEFAULT_BASE_UNIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub address: u8,
    pub brightness: u8,
    pub blink_rate: BlinkRate,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_DISPLAY_ADDRESS,
            brightness: BRIGHTNESS_MAX,
            blink_rate: BlinkRate::Off,
        }
    }
}
