//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `shoebox_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("shoebox_core version={}", shoebox_core::core_version());
    let context = shoebox_core::Shoebox::open_in_memory();
    println!(
        "shoebox_core store={}",
        if context.is_ok() { "ok" } else { "error" }
    );
}
