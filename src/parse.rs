use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{DecodeError, DecodeErrorKind};
use crate::httpclient::RawResponse;
use crate::meta::ResponseMeta;

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decodes a `200` response of the shape `{"data": T}`.
///
/// Anything else is a [`DecodeError`] that still carries the response's
/// status, headers and body.
pub fn parse<T: DeserializeOwned>(raw: RawResponse) -> Result<(T, ResponseMeta), DecodeError> {
    let meta = ResponseMeta::from(raw);

    if meta.status != 200 {
        let status = meta.status;
        let message = serde_json::from_slice::<ErrorBody>(&meta.raw)
            .ok()
            .and_then(|body| body.message);
        return Err(DecodeError::new(
            meta,
            DecodeErrorKind::UnexpectedStatus { status, message },
        ));
    }

    match serde_json::from_slice::<Data<T>>(&meta.raw) {
        Ok(parsed) => Ok((parsed.data, meta)),
        Err(e) => Err(DecodeError::new(meta, e.into())),
    }
}
