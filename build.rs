use std::env;

fn main() {
    // Version string printed on the diagnostic serial line at bring-up.
    // Defaults to the package version; can be overridden for lab builds
    // that need to match a printed handout.
    if let Ok(banner) = env::var("BUMPERBOT_BANNER") {
        println!("cargo:rustc-env=BUMPERBOT_VERSION={}", banner);
        println!("cargo:warning=Using BUMPERBOT_BANNER from environment: {}", banner);
    } else {
        println!(
            "cargo:rustc-env=BUMPERBOT_VERSION=v{}",
            env::var("CARGO_PKG_VERSION").unwrap()
        );
    }

    println!("cargo:rerun-if-env-changed=BUMPERBOT_BANNER");
}
