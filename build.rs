use chrono::Utc;

fn main() {
    // Footer copyright year is derived from this at runtime
    println!("cargo:rustc-env=BUILD_TIME={}", Utc::now().to_rfc3339());

    // Embedded content is picked up by rust-embed, but the timestamp should
    // move with it too
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
