const SITE_DEFAULTS: [(&str, &str); 2] = [("SITE_TITLE", "Portfolio"), ("SITE_BASE_PATH", "/")];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Build-time site settings, so env! always resolves
    for (key, default) in SITE_DEFAULTS {
        let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
        println!("cargo:rustc-env={}={}", key, value);
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-env-changed=SITE_ANALYTICS_ID");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
