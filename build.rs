//! Build script for the asset embedding.
//!
//! `rust-embed` reads `static/` and `dist/` at compile time in release
//! builds. Cargo does not notice files added to those directories on its
//! own, so ask it to rebuild when they change.

fn main() {
    println!("cargo:rerun-if-changed=static");
    println!("cargo:rerun-if-changed=dist");
    println!("cargo:rerun-if-changed=build.rs");
}
