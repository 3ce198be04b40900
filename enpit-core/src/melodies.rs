//! 内置旋律
//!
//! 每段都不超过播放器的缓冲区容量，可以直接 `Player::write(melody.notes())`。

use enpit_common::pitch::*;
use enpit_common::{Note, NoteDuration};

use NoteDuration::{Eighth, Half, Quarter, Sixteenth, Whole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Melody {
    /// 整点报时：四短一长
    HourChime,
    /// 小星星第一句
    Twinkle,
    /// 兰花草片段
    Orchid,
}

impl Melody {
    pub const ALL: [Melody; 3] = [Melody::HourChime, Melody::Twinkle, Melody::Orchid];

    pub const fn notes(self) -> &'static [Note] {
        match self {
            Melody::HourChime => HOUR_CHIME,
            Melody::Twinkle => TWINKLE,
            Melody::Orchid => ORCHID,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Melody::HourChime => "chime",
            Melody::Twinkle => "twinkle",
            Melody::Orchid => "orchid",
        }
    }

    /// 按名称查找，忽略大小写
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|melody| melody.name().eq_ignore_ascii_case(name))
    }
}

const fn n(frequency: u32, duration: NoteDuration) -> Note {
    Note::new(frequency, duration)
}

const HOUR_CHIME: &[Note] = &[
    n(NOTE_A4, Quarter),
    n(REST, Sixteenth),
    n(NOTE_A4, Quarter),
    n(REST, Sixteenth),
    n(NOTE_A4, Quarter),
    n(REST, Sixteenth),
    n(NOTE_A4, Quarter),
    n(REST, Eighth),
    n(NOTE_C5, Whole),
];

// 1 1 5 5 6 6 5 - 4 4 3 3 2 2 1 -
const TWINKLE: &[Note] = &[
    n(NOTE_C4, Quarter),
    n(NOTE_C4, Quarter),
    n(NOTE_G4, Quarter),
    n(NOTE_G4, Quarter),
    n(NOTE_A4, Quarter),
    n(NOTE_A4, Quarter),
    n(NOTE_G4, Half),
    n(NOTE_F4, Quarter),
    n(NOTE_F4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_C4, Half),
];

// 3 2 1 2 3 3 3 - 2 2 2 3 5 5 - 3 2 1 2 3 3 3 - 2 2 3 2 1
const ORCHID: &[Note] = &[
    n(NOTE_E4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_C4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_E4, Half),
    n(NOTE_D4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_G4, Quarter),
    n(NOTE_G4, Half),
    n(NOTE_E4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_C4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_E4, Half),
    n(NOTE_D4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_E4, Quarter),
    n(NOTE_D4, Quarter),
    n(NOTE_C4, Half),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buzzer::BUFFER_SIZE;

    #[test]
    fn every_melody_fits_the_player_buffer() {
        for melody in Melody::ALL {
            let notes = melody.notes();
            assert!(!notes.is_empty());
            assert!(notes.len() <= BUFFER_SIZE, "{:?} has {} notes", melody, notes.len());
        }
    }

    #[test]
    fn melodies_are_found_by_name() {
        assert_eq!(Melody::from_name("Twinkle"), Some(Melody::Twinkle));
        assert_eq!(Melody::from_name("chime"), Some(Melody::HourChime));
        assert_eq!(Melody::from_name("unknown"), None);
    }

    #[test]
    fn hour_chime_ends_on_a_long_note() {
        let last = HOUR_CHIME.last().copied();
        assert_eq!(last, Some(Note::new(NOTE_C5, Whole)));
        let tones = HOUR_CHIME.iter().filter(|note| !note.is_rest()).count();
        assert_eq!(tones, 5);
    }
}
