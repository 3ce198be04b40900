//! 四位七段数码管的数据类型

use enumset::{EnumSet, EnumSetType, enum_set};

pub const BRIGHTNESS_MAX: u8 = 15;

pub const SEGMENT_A: u8 = 1 << 0;
pub const SEGMENT_B: u8 = 1 << 1;
pub const SEGMENT_C: u8 = 1 << 2;
pub const SEGMENT_D: u8 = 1 << 3;
pub const SEGMENT_E: u8 = 1 << 4;
pub const SEGMENT_F: u8 = 1 << 5;
pub const SEGMENT_G: u8 = 1 << 6;
pub const SEGMENT_DOT: u8 = 1 << 7;

/// 显存中的位置，冒号占第三格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    D1 = 0,
    D2 = 1,
    Colon = 2,
    D3 = 3,
    D4 = 4,
}

impl DigitPosition {
    pub const COUNT: usize = 5;

    pub const DIGITS: [DigitPosition; 4] = [
        DigitPosition::D1,
        DigitPosition::D2,
        DigitPosition::D3,
        DigitPosition::D4,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    #[default]
    Off = 0,
    TwoHz = 1,
    OneHz = 2,
    HalfHz = 3,
}

impl BlinkRate {
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// 冒号的两个点
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[enumset(repr = "u8")]
pub enum ColonDot {
    D1,
    D2,
}

pub type Colon = EnumSet<ColonDot>;

pub const COLON_BOTH: Colon = enum_set!(ColonDot::D1 | ColonDot::D2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_bits_match_backpack_layout() {
        assert_eq!(Colon::empty().as_repr(), 0);
        assert_eq!(Colon::only(ColonDot::D1).as_repr(), 0b01);
        assert_eq!(Colon::only(ColonDot::D2).as_repr(), 0b10);
        assert_eq!(COLON_BOTH.as_repr(), 0b11);
    }

    #[test]
    fn colon_sits_between_second_and_third_digit() {
        let indices: Vec<usize> = DigitPosition::DIGITS.iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 3, 4]);
        assert_eq!(DigitPosition::Colon.index(), 2);
    }
}
