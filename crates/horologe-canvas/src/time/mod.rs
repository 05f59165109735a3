//! Loop timing + cancellation.
//!
//! Provides the two pieces the frame loop needs without coupling to the
//! surface backend:
//! - a shared cancellation flag checked once per completed frame
//! - a frame pacer enforcing a minimum inter-frame delay

mod cancel;
mod ticker;

pub use cancel::CancelToken;
pub use ticker::Ticker;
