use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::httpclient::{V4Api, V4Client};
use crate::limiter::Limiter;
use crate::seasons;

/// Entry point to the API. Clones share one transport and one rate limiter.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    api: Box<dyn V4Api>,
    limiter: Limiter,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let api = V4Client::new(&config)?;
        tracing::debug!(
            base_url = %config.base_url,
            rate_limit = config.rate_limit.get(),
            burst = config.burst.get(),
            "client ready"
        );
        Ok(Self::with_api(
            api,
            Limiter::new(config.rate_limit, config.burst),
        ))
    }

    pub fn with_api(api: impl V4Api + 'static, limiter: Limiter) -> Self {
        Self {
            inner: Arc::new(Inner {
                api: Box::new(api),
                limiter,
            }),
        }
    }

    pub fn seasons(&self) -> seasons::Service {
        seasons::Service::new(self.clone())
    }

    pub(crate) fn v4(&self) -> &dyn V4Api {
        self.inner.api.as_ref()
    }

    pub(crate) fn limiter(&self) -> &Limiter {
        &self.inner.limiter
    }

    #[cfg(test)]
    pub(crate) fn same_as(&self, other: &Client) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("limiter", &self.inner.limiter)
            .finish_non_exhaustive()
    }
}
