//! Bakes the chat relay settings into the wasm bundle.
//!
//! The browser has no process environment, so the keys are read here (from the
//! shell or a `.env` file) and re-exported to `option_env!` in `services::relay`.

const FORWARDED_KEYS: [&str; 4] = ["GEMINI_API_KEY", "GEMINI_MODEL", "AI_TEMPERATURE", "GEMINI_ENDPOINT"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=../.env");

    dotenvy::dotenv().ok();

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
