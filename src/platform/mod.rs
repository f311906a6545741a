//! Platform abstraction layer
//!
//! Handles browser-facing plumbing that is still worth testing natively:
//! - Input events (key name -> bar endpoint direction)
//! - Frame scheduling (one pending animation frame, one pending reset)

pub mod frame;
pub mod input;

pub use frame::FrameLoop;
pub use input::{BarKey, apply_key};
