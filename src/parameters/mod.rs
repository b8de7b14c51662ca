//! Persistent Settings
//!
//! EEPROM-backed storage for the single boolean setting the firmware keeps
//! across power cycles.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │   settings::{read_flag, write_flag}    │
//! │  - Free functions, no instances        │
//! │  - Redundant write suppression         │
//! └──────────────┬─────────────────────────┘
//!                │
//!                ▼
//! ┌────────────────────────────────────────┐
//! │   iobutton_core::parameters::flag      │
//! │  - Sentinel byte codec                 │
//! └──────────────┬─────────────────────────┘
//!                │
//!                ▼
//! ┌────────────────────────────────────────┐
//! │         EEPROM Interface               │
//! │  (one byte at FLAG_ADDRESS)            │
//! └────────────────────────────────────────┘
//! ```

pub mod settings;

pub use settings::{load_flag, read_flag, write_flag};
