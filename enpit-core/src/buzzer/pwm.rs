//! 无源蜂鸣器的 PWM 驱动
//!
//! 发声：把通道调到音符频率，占空比 50%；静音：占空比全关。

use embassy_time::Duration;
use enpit_common::{BuzzerDriver, TonePwm, debug, trace};

pub struct PwmBuzzer<P> {
    channel: P,
    pin: Option<u8>,
    sounding: bool,
}

impl<P: TonePwm> PwmBuzzer<P> {
    pub fn new(channel: P) -> Self {
        Self {
            channel,
            pin: None,
            sounding: false,
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    pub fn inner_channel_mut(&mut self) -> &mut P {
        &mut self.channel
    }

    pub fn release(self) -> P {
        self.channel
    }

    fn silence(&mut self) -> Result<(), P::Error> {
        self.channel.set_duty_cycle_fully_off()?;
        self.sounding = false;
        Ok(())
    }
}

impl<P: TonePwm> BuzzerDriver for PwmBuzzer<P> {
    type Error = P::Error;

    fn initialize(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.pin = Some(pin);
        self.silence()?;
        debug!("PWM buzzer attached to pin {}", pin);
        Ok(())
    }

    fn start_tone(&mut self, frequency: u32, duration: Duration) -> Result<(), Self::Error> {
        if frequency == 0 {
            return self.silence();
        }

        self.channel.set_frequency(frequency)?;
        self.channel.set_duty_cycle_percent(50)?;
        self.sounding = true;
        trace!("PWM tone {}Hz (~{}ms)", frequency, duration.as_millis());
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.silence()
    }
}
