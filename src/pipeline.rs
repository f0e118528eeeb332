//! The one sequence every API method runs: admission, request, decode.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::envelope::Envelope;
use crate::error::{DecodeError, Error, Stage};
use crate::httpclient::RawResponse;
use crate::limiter::Limiter;
use crate::meta::ResponseMeta;

/// Runs `raw_call` once a permit is granted and turns its response into an
/// [`Envelope`] with `decode`.
///
/// `raw_call` is never invoked when `cancel` fires before admission. A
/// cancellation during the request drops the request future, which closes
/// the connection. Nothing is retried.
pub async fn execute<T, F, Fut, D>(
    limiter: &Limiter,
    cancel: &CancellationToken,
    operation: &'static str,
    raw_call: F,
    decode: D,
) -> Result<Envelope<T>, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, reqwest::Error>>,
    D: FnOnce(RawResponse) -> Result<(T, ResponseMeta), DecodeError>,
{
    if let Err(err) = limiter.admit(cancel).await {
        debug!(operation, "cancelled before admission");
        return Err(err);
    }

    let raw = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(operation, "cancelled in flight");
            return Err(Error::Cancelled { stage: Stage::InFlight });
        }
        res = raw_call() => match res {
            Ok(raw) => raw,
            Err(err) => {
                warn!(operation, error = %err, "request failed");
                return Err(err.into());
            }
        },
    };

    match decode(raw) {
        Ok((data, meta)) => {
            debug!(operation, status = meta.status, "ok");
            Ok(Envelope { data, meta })
        }
        Err(err) => {
            warn!(
                operation,
                status = err.meta().status,
                cf_ray = err.meta().cf_ray.as_deref(),
                error = %err,
                "decode failed"
            );
            Err(err.into())
        }
    }
}
