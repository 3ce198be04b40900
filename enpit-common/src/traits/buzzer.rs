//! 蜂鸣器输出接口
//!
//! 播放器只通过这里的 trait 驱动硬件：开始一个音、立即静音。
//! 音符何时结束由播放器自己的时钟判断，驱动不需要定时回调。

use embassy_time::Duration;

/// 音调输出端（Tone Output Sink）
pub trait BuzzerDriver {
    type Error;

    /// 绑定输出引脚并让输出保持静音
    fn initialize(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// 以 `frequency` Hz 开始发声
    ///
    /// `duration` 只是提示，停止由调用方负责。
    /// `frequency == 0` 表示休止符：输出必须保持静音。
    fn start_tone(&mut self, frequency: u32, duration: Duration) -> Result<(), Self::Error>;

    /// 立即静音
    fn stop(&mut self) -> Result<(), Self::Error>;
}

/// 可以调节频率的 PWM 通道
///
/// embedded-hal 1.0 的 `SetDutyCycle` 只管占空比，无源蜂鸣器还需要改变方波频率。
pub trait TonePwm: embedded_hal::pwm::SetDutyCycle {
    fn set_frequency(&mut self, hz: u32) -> Result<(), Self::Error>;
}

impl<T: BuzzerDriver + ?Sized> BuzzerDriver for &mut T {
    type Error = T::Error;

    fn initialize(&mut self, pin: u8) -> Result<(), Self::Error> {
        T::initialize(self, pin)
    }

    fn start_tone(&mut self, frequency: u32, duration: Duration) -> Result<(), Self::Error> {
        T::start_tone(self, frequency, duration)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        T::stop(self)
    }
}
