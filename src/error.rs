use std::fmt;

use crate::meta::ResponseMeta;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request cancelled {stage}")]
    Cancelled { stage: Stage },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Metadata of the response that failed to decode. Cancellations and
    /// transport failures never received one.
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            Error::Decode(e) => Some(e.meta()),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

/// Where in a call the cancellation token fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Waiting on the rate limiter; no request was sent.
    Admission,
    /// Request sent, response not yet fully read.
    InFlight,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Admission => f.write_str("before admission"),
            Stage::InFlight => f.write_str("while in flight"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{kind} (HTTP {})", .meta.status)]
pub struct DecodeError {
    meta: ResponseMeta,
    #[source]
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(meta: ResponseMeta, kind: DecodeErrorKind) -> Self {
        Self { meta, kind }
    }

    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    pub fn into_meta(self) -> ResponseMeta {
        self.meta
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeErrorKind {
    #[error("unexpected status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    UnexpectedStatus { status: u16, message: Option<String> },

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}
