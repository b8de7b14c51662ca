//! Core infrastructure
//!
//! Cross-cutting support shared by the devices and parameter storage.

pub mod logging;
