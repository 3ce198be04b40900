use enpit_common::SEGMENT_G;

/// 0-9, A-F
pub const HEX_DIGITS: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

pub const MINUS: u8 = SEGMENT_G;

pub const BLANK: u8 = 0x00;

pub fn glyph(digit: u8) -> Option<u8> {
    HEX_DIGITS.get(digit as usize).copied()
}

/// 段码反查字符，点位忽略
pub fn to_char(mask: u8) -> Option<char> {
    let segments = mask & 0x7F;
    match segments {
        BLANK => Some(' '),
        MINUS => Some('-'),
        _ => HEX_DIGITS
            .iter()
            .position(|&glyph| glyph == segments)
            .and_then(|digit| char::from_digit(digit as u32, 16)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enpit_common::SEGMENT_DOT;

    #[test]
    fn glyphs_cover_hex_digits_only() {
        assert_eq!(glyph(0), Some(0x3F));
        assert_eq!(glyph(0xF), Some(0x71));
        assert_eq!(glyph(16), None);
    }

    #[test]
    fn masks_decode_back_to_characters() {
        assert_eq!(to_char(0x4F), Some('3'));
        assert_eq!(to_char(0x4F | SEGMENT_DOT), Some('3'));
        assert_eq!(to_char(0x7C), Some('b'));
        assert_eq!(to_char(MINUS), Some('-'));
        assert_eq!(to_char(BLANK), Some(' '));
        assert_eq!(to_char(0x01), None);
    }
}
