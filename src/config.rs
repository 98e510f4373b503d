use std::{env, net::SocketAddr, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REMINDER_INTERVAL: Duration = Duration::from_secs(20 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub reminder_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            reminder_interval: DEFAULT_REMINDER_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let reminder_interval = match lookup("REMINDER_INTERVAL_SECS") {
            None => DEFAULT_REMINDER_INTERVAL,
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("invalid REMINDER_INTERVAL_SECS {value:?}, using default");
                    DEFAULT_REMINDER_INTERVAL
                }
            },
        };

        Self {
            port,
            reminder_interval,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
        assert_eq!(Config::default().reminder_interval, Duration::from_secs(1200));
    }

    #[test]
    fn reads_port_and_interval() {
        let config = config_from(&[("PORT", "9000"), ("REMINDER_INTERVAL_SECS", "60")]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.reminder_interval, Duration::from_secs(60));
        assert_eq!(config.addr().port(), 9000);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("PORT", "nope"), ("REMINDER_INTERVAL_SECS", "0")]);
        assert_eq!(config, Config::default());
    }
}
