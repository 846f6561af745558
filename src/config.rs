use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono_tz::Tz;

use crate::models::{Config, SalonConfig, ServerConfig};

pub fn load_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Resolve the salon's timezone, e.g. "Europe/Moscow".
pub fn salon_timezone(salon: &SalonConfig) -> Result<Tz> {
    salon
        .timezone
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", salon.timezone, e))
}

/// How long an idle form session is kept.
pub fn session_ttl(server: &ServerConfig) -> Result<Duration> {
    let secs = server.session_ttl_minutes.checked_mul(60).with_context(|| {
        format!(
            "session_ttl_minutes = {} is too large",
            server.session_ttl_minutes
        )
    })?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: Config = toml::from_str("[salon]\nname = \"Chez Nous\"\n").unwrap();
        assert_eq!(cfg.salon.name, "Chez Nous");
        assert_eq!(cfg.salon.timezone, "Europe/Moscow");
        assert_eq!(cfg.server.addr, "0.0.0.0:3009");
        assert_eq!(cfg.server.session_ttl_minutes, 30);
    }

    #[test]
    fn test_empty_config() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.salon.name, "Salon Beauty");
    }

    #[test]
    fn test_salon_timezone() {
        let salon = SalonConfig::default();
        assert_eq!(salon_timezone(&salon).unwrap(), chrono_tz::Europe::Moscow);

        let bad = SalonConfig {
            timezone: "Mars/Olympus".to_string(),
            ..SalonConfig::default()
        };
        assert!(salon_timezone(&bad).is_err());
    }

    #[test]
    fn test_session_ttl() {
        let server = ServerConfig::default();
        assert_eq!(session_ttl(&server).unwrap(), Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_session_ttl_overflow_is_an_error() {
        let server = ServerConfig {
            session_ttl_minutes: u64::MAX / 10,
            ..ServerConfig::default()
        };
        let err = session_ttl(&server).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/salon.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
