mod config;
mod drivers;
mod error;

use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use enpit_common::*;
use enpit_core::{Player, PwmBuzzer, SevenSegment};

use config::BoardConfig;
use drivers::{EmbassyClock, SimulatorBackpack, SimulatorPwm};
use error::Result;

/// 主循环周期，远小于十六分音符
const TICK: Duration = Duration::from_millis(1);

const DISPLAY_REFRESH: Duration = Duration::from_millis(100);

type SimulatorPlayer = Player<PwmBuzzer<SimulatorPwm>, EmbassyClock>;

async fn run(config: BoardConfig) -> Result<()> {
    let mut player: SimulatorPlayer = Player::new(EmbassyClock, config.buzzer);
    player.begin(PwmBuzzer::new(SimulatorPwm::new()))?;
    player.write(config.melody.notes())?;
    player.dump();

    let mut display = SevenSegment::new(SimulatorBackpack::new());
    display.begin(config.display.address)?;
    display.write_brightness(config.display.brightness)?;
    display.write_blink_rate(config.display.blink_rate)?;

    info!(
        "Playing '{}' ({} notes, loop: {})",
        config.melody.name(),
        player.len(),
        config.looping
    );
    player.play(config.looping, true)?;

    let started = Instant::now();
    let mut next_refresh = started;
    loop {
        player.output()?;

        let now = Instant::now();
        let elapsed = now.duration_since(started);
        if now >= next_refresh {
            // 已播放秒数，冒号随发声闪动
            display.print_float(elapsed.as_millis() as f64 / 1000.0, 1, 10)?;
            display.write_colon(if player.outputting() {
                COLON_BOTH
            } else {
                Colon::empty()
            });
            display.write_display()?;
            next_refresh += DISPLAY_REFRESH;
        }

        if player.finished() {
            info!("Melody finished after {}ms", elapsed.as_millis());
            break;
        }
        if elapsed >= config.run_limit {
            warn!("Run limit reached, stopping playback");
            player.stop()?;
            break;
        }

        Timer::after(TICK).await;
    }

    display.write_long(player.len() as i32)?;
    display.write_display()?;
    Ok(())
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BoardConfig::from_env();
    if let Err(e) = run(config).await {
        error!("Simulator error: {}", e);
    }
}
