//! Status pattern pulse encoder
//!
//! Renders a 32-bit status word as pulses on a single indicator over a
//! 1024 ms cycle. Bit 0 (lsb) comes first in time.
//!
//! # Slot Layout
//!
//! The cycle is split into 64 sub-slots of 16 ms. Every group of four
//! sub-slots forms two logical slots: the first sub-slot is a short even
//! slot (16 ms) and the remaining three are one long odd slot (48 ms).
//!
//! ```text
//! sub-slot:  | 0 | 1   2   3 | 4 | 5   6   7 | ... | 60 | 61  62  63 |
//! slot:      | 0 |     1     | 2 |     3     | ... | 30 |     31     |
//! time (ms): 0   16          64  80          128   960  976         1024
//! ```
//!
//! Odd bits therefore give long, clearly visible pulses while even bits
//! allow short pulses separated by longer gaps.

use crate::traits::Millis;

/// Length of one full pattern cycle
pub const CYCLE_MS: Millis = 1024;

/// Length of one sub-slot
pub const SUB_SLOT_MS: Millis = 16;

/// Sub-slots per cycle
pub const SUB_SLOTS: u32 = 64;

/// Logical slots (pattern bits) per cycle
pub const SLOTS: u32 = 32;

/// Index of the logical slot (0..32) active at time `t`.
pub fn slot_index_at(t: Millis) -> u32 {
    let sub_slot = (t / SUB_SLOT_MS) % SUB_SLOTS;
    // Even slot heading this group of four sub-slots
    let base_slot = (sub_slot / 4) * 2;
    if sub_slot % 4 == 0 {
        base_slot
    } else {
        base_slot + 1
    }
}

/// Whether the indicator is lit at time `t` for the given pattern.
///
/// Pure and periodic: `pulse_at(t, p) == pulse_at(t + CYCLE_MS, p)`.
///
/// # Example
///
/// ```
/// use iobutton_core::pattern::pulse_at;
///
/// // Only bit 0: a single 16 ms blip at the start of every cycle
/// assert!(pulse_at(0, 0b1));
/// assert!(pulse_at(15, 0b1));
/// assert!(!pulse_at(16, 0b1));
/// assert!(pulse_at(1024 + 3, 0b1));
/// ```
pub fn pulse_at(t: Millis, pattern: u32) -> bool {
    (pattern >> slot_index_at(t)) & 0x1 == 1
}
