use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Load compile-time settings from .env when present
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment variables win over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using defaults (API_BASE_URL=http://localhost:5000).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in ["API_BASE_URL", "POLL_INTERVAL_MS", "TOAST_DURATION_MS", "LOG_LEVEL"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
