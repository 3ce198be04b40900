//! 仿真板配置，从环境变量读取

use std::str::FromStr;

use embassy_time::Duration;
use enpit_common::{BuzzerConfig, DisplayConfig, info, warn};
use enpit_core::Melody;

const ENV_BUZZER_PIN: &str = "ENPIT_BUZZER_PIN";
const ENV_BASE_UNIT_MS: &str = "ENPIT_BASE_UNIT_MS";
const ENV_DISPLAY_ADDRESS: &str = "ENPIT_DISPLAY_ADDRESS";
const ENV_BRIGHTNESS: &str = "ENPIT_BRIGHTNESS";
const ENV_MELODY: &str = "ENPIT_MELODY";
const ENV_LOOP: &str = "ENPIT_LOOP";
const ENV_RUN_SECONDS: &str = "ENPIT_RUN_SECONDS";

const DEFAULT_RUN_LIMIT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub buzzer: BuzzerConfig,
    pub display: DisplayConfig,
    pub melody: Melody,
    pub looping: bool,
    /// 循环播放时的运行上限
    pub run_limit: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            buzzer: BuzzerConfig::default(),
            display: DisplayConfig::default(),
            melody: Melody::Twinkle,
            looping: false,
            run_limit: DEFAULT_RUN_LIMIT,
        }
    }
}

impl BoardConfig {
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        info!("Board config: {:?}", config);
        config
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_unit_ms = parse_or(
            &lookup,
            ENV_BASE_UNIT_MS,
            defaults.buzzer.base_unit.as_millis(),
        );
        let melody = match lookup(ENV_MELODY) {
            Some(name) => Melody::from_name(name.trim()).unwrap_or_else(|| {
                warn!("Unknown melody {:?}, using {}", name, defaults.melody.name());
                defaults.melody
            }),
            None => defaults.melody,
        };

        Self {
            buzzer: BuzzerConfig {
                pin: parse_or(&lookup, ENV_BUZZER_PIN, defaults.buzzer.pin),
                base_unit: Duration::from_millis(base_unit_ms.max(1)),
            },
            display: DisplayConfig {
                address: lookup(ENV_DISPLAY_ADDRESS)
                    .and_then(|raw| {
                        let parsed = parse_address(&raw);
                        if parsed.is_none() {
                            warn!("Ignoring {}={:?}", ENV_DISPLAY_ADDRESS, raw);
                        }
                        parsed
                    })
                    .unwrap_or(defaults.display.address),
                brightness: parse_or(&lookup, ENV_BRIGHTNESS, defaults.display.brightness),
                blink_rate: defaults.display.blink_rate,
            },
            melody,
            looping: parse_or(&lookup, ENV_LOOP, defaults.looping),
            run_limit: Duration::from_secs(parse_or(
                &lookup,
                ENV_RUN_SECONDS,
                defaults.run_limit.as_secs(),
            )),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Ignoring {}={:?}, using default", key, raw);
        default
    })
}

/// 支持十进制和 `0x` 前缀的十六进制
fn parse_address(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> BoardConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        BoardConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), BoardConfig::default());
    }

    #[test]
    fn values_are_read_from_environment() {
        let config = config_from(&[
            (ENV_BUZZER_PIN, "5"),
            (ENV_BASE_UNIT_MS, "800"),
            (ENV_DISPLAY_ADDRESS, "0x71"),
            (ENV_BRIGHTNESS, "3"),
            (ENV_MELODY, "Orchid"),
            (ENV_LOOP, "true"),
            (ENV_RUN_SECONDS, "5"),
        ]);

        assert_eq!(config.buzzer.pin, 5);
        assert_eq!(config.buzzer.base_unit, Duration::from_millis(800));
        assert_eq!(config.display.address, 0x71);
        assert_eq!(config.display.brightness, 3);
        assert_eq!(config.melody, Melody::Orchid);
        assert!(config.looping);
        assert_eq!(config.run_limit, Duration::from_secs(5));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            (ENV_BUZZER_PIN, "seven"),
            (ENV_DISPLAY_ADDRESS, "0xZZ"),
            (ENV_MELODY, "unknown"),
            (ENV_LOOP, "maybe"),
        ]);
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn addresses_accept_decimal_and_hex() {
        assert_eq!(parse_address("112"), Some(0x70));
        assert_eq!(parse_address(" 0x70 "), Some(0x70));
        assert_eq!(parse_address("0X7f"), Some(0x7F));
        assert_eq!(parse_address("300"), None);
    }
}
