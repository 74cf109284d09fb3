#[cfg(feature = "csr")]
fn main() {
    // Client-side entry point; serve with `trunk serve`.
    use review_admin::app::App;
    use review_admin::utils::panic_hook;

    panic_hook::init();
    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The screen only runs client-side; nothing to do without `csr`.
}
