/// Deployment configuration read from the browser environment.
use leptos::logging::log;

/// Base URL of the review API, baked in at build time via the `API_URL`
/// environment variable. Empty means same-origin requests.
pub fn api_base() -> String {
    option_env!("API_URL")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}

/// Bearer token left in localStorage by the login flow. An absent token
/// yields an empty value; the server rejects it and the login shell (not
/// this screen) handles the redirect.
pub fn bearer_token() -> String {
    let token = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("token").ok().flatten())
        .unwrap_or_default();
    if token.is_empty() {
        log!("[CONFIG] no bearer token in localStorage");
    }
    token
}
