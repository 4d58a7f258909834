//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, relay handler)
//!     → request.rs (attach request ID)
//!     → relay core validates params, builds the forwarding URL
//!     → upstream client performs the outbound call
//!     → response.rs (JSON envelope, cross-origin headers)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
