use anyhow::Context;
use std::{fmt::Display, str::FromStr, time::Duration};

/// The current environment the worker is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    /// read `ENVIRONMENT`, falling back to production so a misconfigured
    /// deployment never logs with the pretty local layer
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, thiserror::Error)]
#[error("could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    /// The notification service base url including the scheme
    pub notification_service_url: String,

    /// Internal API secret key
    pub internal_api_secret_key: String,

    /// The user whose alert feed this worker maintains
    pub admin_user_id: String,

    /// How often the feed is refreshed
    pub poll_interval: Duration,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let notification_service_url = std::env::var("NOTIFICATION_SERVICE_URL")
            .context("NOTIFICATION_SERVICE_URL must be provided")?;

        let internal_api_secret_key = std::env::var("INTERNAL_API_SECRET_KEY")
            .context("INTERNAL_API_SECRET_KEY must be provided")?;

        let admin_user_id =
            std::env::var("ADMIN_USER_ID").context("ADMIN_USER_ID must be provided")?;

        let poll_interval = parse_poll_interval(std::env::var("POLL_INTERVAL_SECONDS").ok())?;

        let environment = Environment::new_or_prod();

        Ok(Self {
            notification_service_url,
            internal_api_secret_key,
            admin_user_id,
            poll_interval,
            environment,
        })
    }
}

// The 5 second default matches the refresh cadence of the console screens
// this worker stands in for.
pub(crate) fn parse_poll_interval(raw: Option<String>) -> anyhow::Result<Duration> {
    let seconds = match raw {
        Some(raw) => raw
            .parse::<u64>()
            .context("POLL_INTERVAL_SECONDS should be a whole number of seconds")?,
        None => 5,
    };

    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_parse_every_environment_value() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Develop);
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn it_should_default_the_poll_interval_to_five_seconds() {
        assert_eq!(parse_poll_interval(None).unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn it_should_parse_an_explicit_poll_interval() {
        assert_eq!(
            parse_poll_interval(Some("30".to_string())).unwrap(),
            Duration::from_secs(30)
        );
        assert!(parse_poll_interval(Some("soon".to_string())).is_err());
    }
}
