use std::env;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{EnvVarError, Error};

pub const DEFAULT_BASE_URL: &str = "https://labs.hackthebox.com/api/v4";

const DEFAULT_RATE_LIMIT: NonZeroU32 = match NonZeroU32::new(2) {
    Some(n) => n,
    None => panic!("rate limit must be non-zero"),
};
const DEFAULT_BURST: NonZeroU32 = NonZeroU32::MIN;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub base_url: String,
    /// Requests admitted per second across every handle of one client.
    pub rate_limit: NonZeroU32,
    pub burst: NonZeroU32,
    pub timeout: Duration,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.into(),
            rate_limit: DEFAULT_RATE_LIMIT,
            burst: DEFAULT_BURST,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    // requires HTB_TOKEN env var
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let token = env::var("HTB_TOKEN").map_err(|e| EnvVarError::new("HTB_TOKEN", e))?;
        let mut config = Self::new(token);

        if let Ok(base_url) = env::var("HTB_BASE_URL") {
            config.base_url = base_url;
        }
        config.rate_limit = env_or("HTB_RATE_LIMIT", config.rate_limit)?;
        config.burst = env_or("HTB_RATE_BURST", config.burst)?;
        config.timeout = Duration::from_secs(env_or("HTB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: NonZeroU32, burst: NonZeroU32) -> Self {
        self.rate_limit = rate_limit;
        self.burst = burst;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("rate_limit", &self.rate_limit)
            .field("burst", &self.burst)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn env_or<T>(var: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("{var}={raw:?}: {e}"))),
        Err(_) => Ok(default),
    }
}
