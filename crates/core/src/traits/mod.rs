//! Core traits for platform-agnostic timing.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the root crate

pub mod time;

pub use time::{Millis, MockTime, TimeSource};
