use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::httpclient::RawResponse;

const CF_RAY: &str = "cf-ray";

/// What is known about an HTTP exchange, independent of whether its body
/// could be decoded.
///
/// The default value (status `0`, no headers, empty body) is what a call
/// reports when it failed before any response arrived.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: HeaderMap,
    /// Cloudflare ray id, quoted by platform support when chasing a request.
    pub cf_ray: Option<String>,
    pub raw: Bytes,
}

impl ResponseMeta {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when nothing was received.
    pub fn is_empty(&self) -> bool {
        self.status == 0 && self.headers.is_empty() && self.raw.is_empty()
    }
}

impl From<RawResponse> for ResponseMeta {
    fn from(raw: RawResponse) -> Self {
        let cf_ray = raw
            .headers
            .get(CF_RAY)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Self {
            status: raw.status.as_u16(),
            headers: raw.headers,
            cf_ray,
            raw: raw.body,
        }
    }
}
