//! Platform abstraction layer
//!
//! Handles the boundary with the windowing environment:
//! - Time (frame clock)
//! - Input events (coalesced into a single-slot inbox)
//! - Frame presentation and the close flag

pub mod host;
pub mod input;

pub use host::{HeadlessHost, Host};
pub use input::{FrameInput, InputEvent, InputInbox, Key, KeyAction};
