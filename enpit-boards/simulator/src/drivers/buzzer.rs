use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use enpit_common::{TonePwm, info};

/// 10 位占空比，与 LEDC 的 Duty10Bit 配置一致
const MAX_DUTY: u16 = 1023;

/// 只打印日志的 PWM 通道
#[derive(Debug, Default)]
pub struct SimulatorPwm {
    frequency: u32,
    duty: u16,
}

impl SimulatorPwm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorType for SimulatorPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimulatorPwm {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if duty == 0 {
            if self.duty != 0 {
                info!("[Simulator Buzzer] Silent");
            }
        } else {
            info!(
                "[Simulator Buzzer] Playing {}Hz (duty {}/{})",
                self.frequency, duty, MAX_DUTY
            );
        }
        self.duty = duty;
        Ok(())
    }
}

impl TonePwm for SimulatorPwm {
    fn set_frequency(&mut self, hz: u32) -> Result<(), Self::Error> {
        self.frequency = hz;
        Ok(())
    }
}
