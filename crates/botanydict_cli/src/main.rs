//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `botanydict_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("botanydict_core version={}", botanydict_core::core_version());
    println!(
        "botanydict_core schema_version={}",
        botanydict_core::db::migrations::latest_version()
    );
}
