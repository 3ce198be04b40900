//! 旋律播放状态机
//!
//! 整个播放过程由调用方的主循环驱动：每次 [`Player::output`] 只做一次状态转换
//! （停掉当前音，或开始下一个音），从不等待。音符是否结束只看 [`Clock`]，
//! 不依赖驱动的任何定时回调。
//!
//! 下一个音从上一个音的计划结束时刻起算，主循环的调度延迟不会逐音累积。

use embassy_time::{Duration, Instant};
use enpit_common::{
    BuzzerConfig, BuzzerDriver, Clock, Note, NoteDuration, PlayerError, PlayerResult, debug, info,
    trace, warn,
};

use super::buffer::{BUFFER_SIZE, NoteBuffer};

/// 正在发声（或休止）的音符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sounding {
    pub since: Instant,
    pub length: Duration,
    pub frequency: u32,
}

impl Sounding {
    fn is_over(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.since) >= self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing {
        looping: bool,
        sounding: Option<Sounding>,
    },
    /// 非循环播放自然结束，直到下一次 `play()`
    Finished,
}

pub struct Player<B, C, const N: usize = BUFFER_SIZE> {
    driver: Option<B>,
    clock: C,
    config: BuzzerConfig,
    buffer: NoteBuffer<N>,
    state: PlaybackState,
    /// 上一个音的计划结束时刻，下一个音从这里起算
    next_start: Option<Instant>,
}

impl<B, C, const N: usize> Player<B, C, N>
where
    B: BuzzerDriver,
    C: Clock,
{
    pub fn new(clock: C, config: BuzzerConfig) -> Self {
        Self {
            driver: None,
            clock,
            config,
            buffer: NoteBuffer::new(),
            state: PlaybackState::Idle,
            next_start: None,
        }
    }

    /// 绑定蜂鸣器驱动
    ///
    /// 再次调用时先初始化新驱动，再停掉并替换旧驱动；已写入的旋律保留。
    pub fn begin(&mut self, mut driver: B) -> PlayerResult<(), B::Error> {
        driver
            .initialize(self.config.pin)
            .map_err(PlayerError::Driver)?;
        driver.stop().map_err(PlayerError::Driver)?;

        if let Some(mut old) = self.driver.replace(driver) {
            if self.playing() && old.stop().is_err() {
                warn!("Replaced buzzer driver failed to stop");
            }
        }
        self.state = match self.state {
            PlaybackState::Playing { .. } => PlaybackState::Idle,
            other => other,
        };
        self.next_start = None;
        info!(
            "Buzzer ready on pin {}, base unit {}ms",
            self.config.pin,
            self.config.base_unit.as_millis()
        );
        Ok(())
    }

    /// 写入新旋律，游标归零
    ///
    /// 播放中拒绝写入，需要先 [`stop`](Self::stop)。
    pub fn write(&mut self, notes: &[Note]) -> PlayerResult<(), B::Error> {
        self.ensure_writable()?;

        self.buffer.write(notes).map_err(|overflow| {
            warn!(
                "Melody of {} notes rejected, capacity is {}",
                overflow.requested, overflow.capacity
            );
            PlayerError::CapacityExceeded {
                requested: overflow.requested,
                capacity: overflow.capacity,
            }
        })?;

        debug!("Melody written: {} notes", notes.len());
        Ok(())
    }

    /// 以 (频率, 时值编码) 的形式写入旋律
    pub fn write_raw(&mut self, notes: &[(u32, u8)]) -> PlayerResult<(), B::Error> {
        if notes.len() > N {
            return Err(PlayerError::CapacityExceeded {
                requested: notes.len(),
                capacity: N,
            });
        }

        let mut parsed: heapless::Vec<Note, N> = heapless::Vec::new();
        for &(frequency, code) in notes {
            let duration = NoteDuration::try_from(code)?;
            parsed
                .push(Note::new(frequency, duration))
                .map_err(|_| PlayerError::CapacityExceeded {
                    requested: notes.len(),
                    capacity: N,
                })?;
        }
        self.write(&parsed)
    }

    pub fn clear(&mut self) -> PlayerResult<(), B::Error> {
        self.ensure_writable()?;
        self.buffer.clear();
        Ok(())
    }

    /// 开始或继续播放
    ///
    /// 空闲或结束状态下，`restart` 或旋律已读完时从头播放，否则从游标处继续。
    /// 播放中再次调用只更新 `looping`，当前音不受影响；只有 `restart` 才会回到开头。
    pub fn play(&mut self, looping: bool, restart: bool) -> PlayerResult<(), B::Error> {
        let Some(driver) = self.driver.as_mut() else {
            return Err(PlayerError::NotInitialized);
        };

        match self.state {
            PlaybackState::Playing { sounding, .. } if restart => {
                if sounding.is_some() {
                    driver.stop().map_err(PlayerError::Driver)?;
                }
                self.buffer.rewind();
                self.next_start = None;
                self.state = PlaybackState::Playing {
                    looping,
                    sounding: None,
                };
                debug!("Playback restarted (loop: {})", looping);
            }
            PlaybackState::Playing { sounding, .. } => {
                self.state = PlaybackState::Playing { looping, sounding };
                trace!("Playback already running, loop now {}", looping);
            }
            PlaybackState::Idle | PlaybackState::Finished => {
                if restart || self.buffer.is_exhausted() {
                    self.buffer.rewind();
                }
                self.next_start = None;
                self.state = PlaybackState::Playing {
                    looping,
                    sounding: None,
                };
                debug!(
                    "Playback started at note {}/{} (loop: {})",
                    self.buffer.position(),
                    self.buffer.len(),
                    looping
                );
            }
        }
        Ok(())
    }

    /// 推进一步，需在主循环中反复调用
    ///
    /// 非循环播放时，停掉最后一个音的同一步即进入 `Finished`。
    pub fn output(&mut self) -> PlayerResult<(), B::Error> {
        let Some(driver) = self.driver.as_mut() else {
            return Err(PlayerError::NotInitialized);
        };
        let PlaybackState::Playing { looping, sounding } = self.state else {
            return Ok(());
        };
        let now = self.clock.now();

        if let Some(current) = sounding {
            if current.is_over(now) {
                driver.stop().map_err(PlayerError::Driver)?;
                self.next_start = Some(current.since + current.length);
                if !looping && self.buffer.is_exhausted() {
                    self.state = PlaybackState::Finished;
                    debug!("Melody finished");
                } else {
                    self.state = PlaybackState::Playing {
                        looping,
                        sounding: None,
                    };
                    trace!("Note {} done", self.buffer.position());
                }
            }
            return Ok(());
        }

        if looping && self.buffer.is_exhausted() && !self.buffer.is_empty() {
            self.buffer.rewind();
            trace!("Melody wrapped");
        }

        let Some(note) = self.buffer.peek() else {
            self.state = PlaybackState::Finished;
            debug!("Melody finished");
            return Ok(());
        };

        let length = note.length(self.config.base_unit);
        // 落后超过一个音长时不再追赶，从当前时刻起算
        let since = self
            .next_start
            .filter(|start| now.saturating_duration_since(*start) < length)
            .unwrap_or(now);
        driver
            .start_tone(note.frequency, length)
            .map_err(PlayerError::Driver)?;
        self.buffer.take_next();
        self.next_start = None;
        self.state = PlaybackState::Playing {
            looping,
            sounding: Some(Sounding {
                since,
                length,
                frequency: note.frequency,
            }),
        };
        trace!(
            "Note {}: {}Hz for {}ms",
            self.buffer.position(),
            note.frequency,
            length.as_millis()
        );
        Ok(())
    }

    /// 立即静音并回到空闲；不是播放中时什么也不做
    ///
    /// 驱动静音失败时保持播放状态，可以重试。
    pub fn stop(&mut self) -> PlayerResult<(), B::Error> {
        if !self.playing() {
            return Ok(());
        }

        if let Some(driver) = self.driver.as_mut() {
            driver.stop().map_err(PlayerError::Driver)?;
        }
        self.state = PlaybackState::Idle;
        self.next_start = None;
        debug!("Playback stopped at note {}", self.buffer.position());
        Ok(())
    }

    pub fn playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn finished(&self) -> bool {
        matches!(self.state, PlaybackState::Finished)
    }

    pub fn outputting(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::Playing {
                sounding: Some(_),
                ..
            }
        )
    }

    pub fn is_initialized(&self) -> bool {
        self.driver.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.buffer.position()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn notes(&self) -> &[Note] {
        self.buffer.notes()
    }

    pub fn config(&self) -> &BuzzerConfig {
        &self.config
    }

    /// 调试用，输出完整状态
    pub fn dump(&self) {
        debug!(
            "Player: initialized={} state={:?} position={}/{} capacity={} pin={} base_unit={}ms",
            self.is_initialized(),
            self.state,
            self.buffer.position(),
            self.buffer.len(),
            N,
            self.config.pin,
            self.config.base_unit.as_millis()
        );
        for (index, note) in self.buffer.notes().iter().enumerate() {
            trace!(
                "  [{}] {}Hz 1/{}",
                index,
                note.frequency,
                note.duration.code()
            );
        }
    }

    pub fn release(self) -> Option<B> {
        self.driver
    }

    fn ensure_writable(&self) -> PlayerResult<(), B::Error> {
        if !self.is_initialized() {
            return Err(PlayerError::NotInitialized);
        }
        if self.playing() {
            warn!("Melody buffer is locked while playing");
            return Err(PlayerError::InvalidState);
        }
        Ok(())
    }
}
