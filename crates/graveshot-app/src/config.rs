//! Runtime configuration read from the environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use graveshot_core::constants::FRAME_RATE;
use graveshot_sim::SessionConfig;

const SEED_VAR: &str = "GRAVESHOT_SEED";
const FRAME_RATE_VAR: &str = "GRAVESHOT_FRAME_RATE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the session RNG.
    pub seed: u64,
    /// How often the game loop delivers frames (Hz).
    pub frame_rate: u32,
}

impl AppConfig {
    /// Read `GRAVESHOT_SEED` and `GRAVESHOT_FRAME_RATE`. Without a seed every
    /// launch plays a different board.
    pub fn from_env() -> Self {
        Self {
            seed: read_env_u64(SEED_VAR, clock_seed()),
            frame_rate: read_env_u32(FRAME_RATE_VAR, FRAME_RATE),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            ..Default::default()
        }
    }

    /// Wall-clock time between frame deliveries.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: SessionConfig::default().seed,
            frame_rate: FRAME_RATE,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_else(|_| SessionConfig::default().seed)
}

pub(crate) fn read_env_u64(name: &str, default: u64) -> u64 {
    parse_or_default(name, env::var(name).ok(), default, |_| true)
}

pub(crate) fn read_env_u32(name: &str, default: u32) -> u32 {
    parse_or_default(name, env::var(name).ok(), default, |value| *value > 0)
}

/// Parse `raw`, falling back to `default` (with a warning) when it is set
/// but unparseable or rejected by `accept`.
fn parse_or_default<T>(name: &str, raw: Option<String>, default: T, accept: impl Fn(&T) -> bool) -> T
where
    T: FromStr + Display + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => value,
        _ => {
            tracing::warn!(name, value = %raw, %default, "ignoring invalid environment value");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let value = parse_or_default("X", Some(" 144 ".into()), 60u32, |v| *v > 0);
        assert_eq!(value, 144);
    }

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(parse_or_default("X", None, 7u64, |_| true), 7);
    }

    #[test]
    fn test_invalid_or_rejected_value_uses_default() {
        assert_eq!(parse_or_default("X", Some("fast".into()), 60u32, |v| *v > 0), 60);
        assert_eq!(parse_or_default("X", Some("0".into()), 60u32, |v| *v > 0), 60);
        assert_eq!(parse_or_default("X", Some("-3".into()), 9u64, |_| true), 9);
    }

    #[test]
    fn test_frame_duration() {
        let config = AppConfig::default();
        assert_eq!(config.frame_duration().as_nanos(), 1_000_000_000 / 60);

        let zero = AppConfig {
            frame_rate: 0,
            ..AppConfig::default()
        };
        assert_eq!(zero.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_session_config_carries_seed() {
        let config = AppConfig {
            seed: 99,
            frame_rate: 30,
        };
        let session = config.session_config();
        assert_eq!(session.seed, 99);
        assert_eq!(session.population, 8);
    }
}
