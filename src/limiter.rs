use std::fmt;
use std::num::NonZeroU32;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Stage};

/// Admission control shared by every call made through one client.
pub struct Limiter {
    quota: Quota,
    inner: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl Limiter {
    pub fn new(per_second: NonZeroU32, burst: NonZeroU32) -> Self {
        let quota = Quota::per_second(per_second).allow_burst(burst);
        Self {
            quota,
            inner: RateLimiter::direct(quota),
        }
    }

    /// Waits for a permit. A token that fires first (or already has) wins,
    /// and no permit is consumed.
    pub async fn admit(&self, cancel: &CancellationToken) -> Result<(), Error> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled { stage: Stage::Admission }),
            _ = self.inner.until_ready() => Ok(()),
        }
    }
}

impl fmt::Debug for Limiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limiter").field("quota", &self.quota).finish()
    }
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU32;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use tokio_util::sync::CancellationToken;

    use crate::error::{Error, Stage};
    use crate::limiter::Limiter;

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_admits_burst_without_waiting() {
        let limiter = Limiter::new(nz(1), nz(5));
        let cancel = CancellationToken::new();

        let started = Instant::now();
        for _ in 0..5 {
            limiter.admit(&cancel).await.unwrap();
        }
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_cancelled_token_is_refused() {
        let limiter = Limiter::new(nz(100), nz(1));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = limiter.admit(&cancel).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Cancelled {
                stage: Stage::Admission
            }
        ));

        // the refused call left the single permit in place
        limiter.admit(&CancellationToken::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_while_waiting() {
        let limiter = Limiter::new(nz(1), nz(1));
        limiter.admit(&CancellationToken::new()).await.unwrap();

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let started = Instant::now();
        let err = limiter.admit(&cancel).await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(started.elapsed() < Duration::from_millis(900));
    }

    #[tokio::test]
    async fn test_concurrent_admissions_share_quota() {
        let limiter = Arc::new(Limiter::new(nz(1), nz(8)));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let limiter = limiter.clone();
                tokio::spawn(async move { limiter.admit(&CancellationToken::new()).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        // quota is spent, the next caller has to wait and can be cancelled
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });
        assert!(limiter.admit(&cancel).await.is_err());
    }
}
