use std::env;

fn main() {
    // Build-time defaults for the button configuration.
    // IoButtonConfig::from_build_env() parses these at runtime.

    // Debounce threshold in milliseconds
    if let Ok(debounce) = env::var("IOBUTTON_DEBOUNCE_MS") {
        println!("cargo:rustc-env=IOBUTTON_DEBOUNCE_MS={}", debounce);
        println!(
            "cargo:warning=Using IOBUTTON_DEBOUNCE_MS from environment: {}",
            debounce
        );
    } else {
        println!("cargo:rustc-env=IOBUTTON_DEBOUNCE_MS=100");
    }

    // Press detection threshold in millivolts
    if let Ok(threshold) = env::var("IOBUTTON_THRESHOLD_MV") {
        println!("cargo:rustc-env=IOBUTTON_THRESHOLD_MV={}", threshold);
        println!(
            "cargo:warning=Using IOBUTTON_THRESHOLD_MV from environment: {}",
            threshold
        );
    } else {
        println!("cargo:rustc-env=IOBUTTON_THRESHOLD_MV=1000");
    }

    println!("cargo:rerun-if-env-changed=IOBUTTON_DEBOUNCE_MS");
    println!("cargo:rerun-if-env-changed=IOBUTTON_THRESHOLD_MV");
}
