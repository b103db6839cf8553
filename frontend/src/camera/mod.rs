//! Browser camera access: stream lifetime, the feed component, and
//! single-frame capture.

pub mod feed;
pub mod frame;
pub mod session;

pub use feed::{CameraFeed, CameraHandle};
pub use frame::{CapturedFrame, FrameSource};
