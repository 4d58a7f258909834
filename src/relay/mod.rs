//! Request relaying core.
//!
//! # Data Flow
//! ```text
//! inbound query string
//!     → params.rs (parse, last occurrence wins, validate required keys)
//!     → url.rs (assemble forwarding URL, percent-encode values)
//!     → upstream client performs the outbound call
//! ```

pub mod params;
pub mod url;

pub use params::{EmoteParams, MissingParams, REQUIRED_PARAMS};
pub use url::forwarding_url;
