// File: crates/chart-render-skia/build.rs
// Summary: Link the Windows system library Skia's font/ICU code needs; no-op elsewhere.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
