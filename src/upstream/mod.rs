//! Outbound call to the game server.
//!
//! One GET per relayed request. A completed exchange is reported with the
//! upstream status verbatim; only transport-level failures are errors here.

pub mod client;

pub use client::{UpstreamClient, UpstreamError, UpstreamReply};
