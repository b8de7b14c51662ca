//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`defmt` feature on a bare-metal target): Uses defmt
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! Format strings must stay within the subset both defmt and `core::fmt`
//! accept: `{}`, `{:?}` and the hex hints `{:x}` / `{:#x}`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", target_os = "none"))]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(not(any(all(feature = "defmt", target_os = "none"), all(not(target_os = "none"), test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", target_os = "none"))]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(not(any(all(feature = "defmt", target_os = "none"), all(not(target_os = "none"), test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", target_os = "none"))]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(not(any(all(feature = "defmt", target_os = "none"), all(not(target_os = "none"), test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", target_os = "none"))]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(target_os = "none"), test))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(not(any(all(feature = "defmt", target_os = "none"), all(not(target_os = "none"), test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
