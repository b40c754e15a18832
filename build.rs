use chrono::Datelike;

const DEFAULT_CONTACT_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_CONTACT_RESET_DELAY_MS: &str = "5000";

fn main() {
    // Year shown in the footer copyright line
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Contact endpoint settings are baked into the WASM bundle, so they come from the build env
    let api_url =
        std::env::var("CONTACT_API_URL").unwrap_or_else(|_| DEFAULT_CONTACT_API_URL.to_string());
    let reset_delay = std::env::var("CONTACT_RESET_DELAY_MS")
        .unwrap_or_else(|_| DEFAULT_CONTACT_RESET_DELAY_MS.to_string());
    println!("cargo:rustc-env=CONTACT_API_URL={}", api_url);
    println!("cargo:rustc-env=CONTACT_RESET_DELAY_MS={}", reset_delay);

    println!("cargo:rerun-if-env-changed=CONTACT_API_URL");
    println!("cargo:rerun-if-env-changed=CONTACT_RESET_DELAY_MS");
    println!("cargo:rerun-if-changed=build.rs");
}
