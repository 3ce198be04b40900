//! HT16K33 四位七段数码管驱动
//!
//! 所有写数字的操作只修改本地显存，调用 [`SevenSegment::write_display`] 后才发送到总线。

pub mod font;

use embedded_hal::i2c::I2c;
use enpit_common::{
    BRIGHTNESS_MAX, BlinkRate, Colon, DisplayError, DisplayResult, DigitPosition, SEGMENT_DOT,
    debug, info, trace,
};

const CMD_DISPLAY_RAM: u8 = 0x00;
const CMD_OSCILLATOR_ON: u8 = 0x21;
const CMD_DISPLAY_SETUP: u8 = 0x80;
const DISPLAY_ON: u8 = 0x01;
const CMD_BRIGHTNESS: u8 = 0xE0;

const COLON_INDEX: usize = DigitPosition::Colon.index();
const LAST_INDEX: usize = DigitPosition::D4.index();

/// 显存帧：命令字节 + 每个位置两字节（高字节不用）
const FRAME_LEN: usize = 1 + 2 * DigitPosition::COUNT;

pub struct SevenSegment<I> {
    i2c: I,
    address: Option<u8>,
    buffer: [u8; DigitPosition::COUNT],
}

impl<I: I2c> SevenSegment<I> {
    pub fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: None,
            buffer: [0; DigitPosition::COUNT],
        }
    }

    /// 打开振荡器、关闭闪烁、最大亮度，并清空显存
    pub fn begin(&mut self, address: u8) -> DisplayResult<(), I::Error> {
        self.i2c
            .write(address, &[CMD_OSCILLATOR_ON])
            .map_err(DisplayError::Bus)?;
        self.address = Some(address);

        self.write_blink_rate(BlinkRate::Off)?;
        self.write_brightness(BRIGHTNESS_MAX)?;
        self.clear();
        info!("Seven-segment display ready at 0x{:02x}", address);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer = [0; DigitPosition::COUNT];
    }

    pub fn write_blink_rate(&mut self, rate: BlinkRate) -> DisplayResult<(), I::Error> {
        self.send(&[CMD_DISPLAY_SETUP | DISPLAY_ON | (rate.bits() << 1)])
    }

    /// 亮度 0-15，超出部分按 15 处理
    pub fn write_brightness(&mut self, brightness: u8) -> DisplayResult<(), I::Error> {
        let level = brightness.min(BRIGHTNESS_MAX);
        self.send(&[CMD_BRIGHTNESS | level])
    }

    /// 把显存发送到总线
    pub fn write_display(&mut self) -> DisplayResult<(), I::Error> {
        let mut frame = [0u8; FRAME_LEN];
        frame[0] = CMD_DISPLAY_RAM;
        for (index, &mask) in self.buffer.iter().enumerate() {
            frame[1 + 2 * index] = mask;
        }
        trace!("Flushing display buffer {:?}", self.buffer);
        self.send(&frame)
    }

    pub fn write_int(&mut self, value: i16) -> DisplayResult<(), I::Error> {
        self.print_number(i32::from(value), 10)
    }

    pub fn write_long(&mut self, value: i32) -> DisplayResult<(), I::Error> {
        self.print_number(value, 10)
    }

    pub fn print_number(&mut self, value: i32, base: u8) -> DisplayResult<(), I::Error> {
        self.print_float(f64::from(value), 0, base)
    }

    pub fn write_digit_num(
        &mut self,
        position: DigitPosition,
        digit: u8,
        dot: bool,
    ) -> DisplayResult<(), I::Error> {
        let glyph = font::glyph(digit).ok_or(DisplayError::InvalidDigit(digit))?;
        self.buffer[position.index()] = glyph | if dot { SEGMENT_DOT } else { 0 };
        Ok(())
    }

    pub fn write_digit_raw(&mut self, position: DigitPosition, mask: u8) {
        self.buffer[position.index()] = mask;
    }

    pub fn write_colon(&mut self, colon: Colon) {
        self.buffer[COLON_INDEX] = colon.as_repr();
    }

    /// 右对齐显示数值
    ///
    /// 放不下时先减少小数位，仍然放不下则显示 `----`。负数占用最左一位显示负号。
    pub fn print_float(
        &mut self,
        value: f64,
        decimal_places: u8,
        base: u8,
    ) -> DisplayResult<(), I::Error> {
        if !(2..=16).contains(&base) {
            return Err(DisplayError::InvalidBase(base));
        }
        if !value.is_finite() {
            self.print_error();
            return Ok(());
        }

        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        let numeric_digits: u32 = if negative { 3 } else { 4 };
        let radix = f64::from(base);
        let too_big = u32::from(base).pow(numeric_digits);

        let mut fraction_digits = u32::from(decimal_places);
        let mut factor = 1.0;
        for _ in 0..fraction_digits {
            factor *= radix;
        }
        let mut number = scale(magnitude, factor);

        while number >= too_big || fraction_digits >= numeric_digits {
            if fraction_digits == 0 {
                debug!("Value does not fit on the display");
                self.print_error();
                return Ok(());
            }
            fraction_digits -= 1;
            factor /= radix;
            number = scale(magnitude, factor);
        }

        let mut position = LAST_INDEX as isize;
        let mut written = 0;
        while number != 0 || written <= fraction_digits {
            let dot = fraction_digits != 0 && written == fraction_digits;
            let digit = (number % u32::from(base)) as u8;
            // digit < base <= 16
            let glyph = font::glyph(digit).unwrap_or(font::BLANK);
            self.buffer[position as usize] = glyph | if dot { SEGMENT_DOT } else { 0 };
            position = self.step_left(position);
            number /= u32::from(base);
            written += 1;
        }

        if negative {
            self.buffer[position as usize] = font::MINUS;
            position -= 1;
        }
        while position >= 0 {
            self.buffer[position as usize] = font::BLANK;
            position -= 1;
        }
        Ok(())
    }

    /// 四位全部显示 `-`
    pub fn print_error(&mut self) {
        for position in DigitPosition::DIGITS {
            self.buffer[position.index()] = font::MINUS;
        }
        self.buffer[COLON_INDEX] = font::BLANK;
    }

    pub fn read_digit_raw(&self, position: DigitPosition) -> u8 {
        self.buffer[position.index()]
    }

    pub fn digits(&self) -> &[u8; DigitPosition::COUNT] {
        &self.buffer
    }

    pub fn address(&self) -> Option<u8> {
        self.address
    }

    pub fn release(self) -> I {
        self.i2c
    }

    /// 左移一位，经过冒号时把它清空并跳过
    fn step_left(&mut self, position: isize) -> isize {
        let next = position - 1;
        if next == COLON_INDEX as isize {
            self.buffer[COLON_INDEX] = font::BLANK;
            return next - 1;
        }
        next
    }

    fn send(&mut self, bytes: &[u8]) -> DisplayResult<(), I::Error> {
        let address = self.address.ok_or(DisplayError::NotInitialized)?;
        self.i2c.write(address, bytes).map_err(DisplayError::Bus)
    }
}

fn scale(magnitude: f64, factor: f64) -> u32 {
    (magnitude * factor + 0.5) as u32
}
