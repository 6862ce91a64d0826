//! Build script - stages the linker script for embedded builds.
//!
//! Host builds (default features, used for `cargo test`) need no linker
//! script, so everything is gated on the `embedded` feature.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    if env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

        // Copy memory.x to OUT_DIR
        fs::copy("memory.x", out_dir.join("memory.x")).unwrap();

        // Tell cargo to look for linker scripts in OUT_DIR
        println!("cargo:rustc-link-search={}", out_dir.display());
    }

    // Rebuild if the linker script changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
