//! Typed client for the seasons endpoints of the HackTheBox v4 API.
//!
//! Every method waits for a permit from the client's shared rate limiter,
//! sends one request and decodes the `data` document of the response into an
//! [`Envelope`]. Failures come back as [`Error`]; when a response was received
//! but could not be decoded, [`Error::meta`] still exposes its status, headers
//! and body.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod httpclient;
pub mod limiter;
pub mod meta;
pub mod parse;
pub mod pipeline;
pub mod seasons;
pub mod types;

pub use client::Client;
pub use config::Config;
pub use envelope::Envelope;
pub use error::{DecodeError, DecodeErrorKind, Error, Stage};
pub use meta::ResponseMeta;
