//! Observability subsystem.
//!
//! Structured logging only. The relay is a single linear transform, so one
//! log event per stage with the request ID attached tells the whole story.

pub mod logging;
