//! iobutton_core - Pure no_std logic for the iobutton firmware
//!
//! This crate contains the platform-agnostic state machines and encoders
//! that can be tested on host without any feature flags or hardware.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: The clock is injected via [`traits::TimeSource`]
//! - **Polled**: Every operation is synchronous and returns immediately
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`timing`]: Wraparound-safe elapsed time measurement
//! - [`debounce`]: Binary input debouncing state machine
//! - [`pattern`]: 32-slot status pattern pulse encoder
//! - [`parameters`]: Persistent flag sentinel codec

#![no_std]

pub mod debounce;
pub mod parameters;
pub mod pattern;
pub mod timing;
pub mod traits;
