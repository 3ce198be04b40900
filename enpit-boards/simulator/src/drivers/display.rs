use core::convert::Infallible;

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
use enpit_common::{DigitPosition, SEGMENT_DOT, debug, info};
use enpit_core::seven_segment::font;

/// 模拟 HT16K33 背板：把收到的显存渲染成文本打印出来
#[derive(Debug, Default)]
pub struct SimulatorBackpack {
    last_frame: String,
}

impl SimulatorBackpack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &str {
        &self.last_frame
    }

    fn handle_write(&mut self, address: SevenBitAddress, bytes: &[u8]) {
        match bytes {
            [0x00, ram @ ..] => {
                let frame = render(ram);
                if frame != self.last_frame {
                    info!("[Simulator 7-Segment 0x{:02x}] [{}]", address, frame);
                    self.last_frame = frame;
                }
            }
            [0x21] => debug!("[Simulator 7-Segment 0x{:02x}] Oscillator on", address),
            [command] if command & 0xF0 == 0xE0 => {
                debug!(
                    "[Simulator 7-Segment 0x{:02x}] Brightness {}",
                    address,
                    command & 0x0F
                )
            }
            [command] if command & 0xF0 == 0x80 => {
                debug!(
                    "[Simulator 7-Segment 0x{:02x}] Display {}, blink mode {}",
                    address,
                    if command & 0x01 != 0 { "on" } else { "off" },
                    (command >> 1) & 0x03
                )
            }
            other => debug!("[Simulator 7-Segment 0x{:02x}] Unknown write {:02x?}", address, other),
        }
    }
}

impl ErrorType for SimulatorBackpack {
    type Error = Infallible;
}

impl I2c for SimulatorBackpack {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.handle_write(address, *bytes),
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}

/// 显存每个位置两字节，只取低字节
fn render(ram: &[u8]) -> String {
    let mut text = String::new();
    for (index, &mask) in ram.iter().step_by(2).take(DigitPosition::COUNT).enumerate() {
        if index == DigitPosition::Colon.index() {
            text.push(if mask != 0 { ':' } else { ' ' });
            continue;
        }
        text.push(font::to_char(mask).unwrap_or('?'));
        if mask & SEGMENT_DOT != 0 {
            text.push('.');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_render_as_text() {
        let mut backpack = SimulatorBackpack::new();
        backpack
            .write(0x70, &[0x00, 0x06, 0, 0x5B, 0, 0x03, 0, 0x4F | 0x80, 0, 0x66, 0])
            .unwrap();
        assert_eq!(backpack.last_frame(), "12:3.4");
    }

    #[test]
    fn blank_and_minus_digits() {
        assert_eq!(render(&[0x00, 0, 0x40, 0, 0x00, 0, 0x06, 0, 0x6D, 0]), " - 15");
    }
}
