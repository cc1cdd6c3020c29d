use std::env;
use std::process::Command;

/// Short commit hash of the source tree, or "unknown" outside a git checkout
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let profile = match env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=SHRED_GIT_HASH={}", git_hash());
    println!("cargo:rustc-env=SHRED_PROFILE={}", profile);
    println!("cargo:rustc-env=SHRED_TARGET={}", target);

    println!("cargo:rerun-if-env-changed=PROFILE");
}
