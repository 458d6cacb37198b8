//! Browser console output.

use crate::content::BRAND;
use wasm_bindgen::JsValue;

fn banner() -> String {
    format!(
        r#"
   ___ _           _    ___  ___
  | __| |___ ___| |_ / _ \/ __|
  | _|| / -_) -_)  _| (_) \__ \
  |_| |_\___\___|\__|\___/|___/

  {BRAND} landing v{}
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Print the startup banner to the browser console.
pub fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #2563eb; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cBuilt with Rust + Leptos."),
        &JsValue::from_str("color: #888;"),
    );
}
