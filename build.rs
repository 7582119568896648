use std::env;
use std::process::Command;

/// Capture the compiler version at build time so the running service can
/// report it alongside the other system facts.
fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    // `rustc --version` prints e.g. "rustc 1.84.0 (9fc6b4312 2025-01-07)";
    // keep only the version number.
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|raw| raw.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
