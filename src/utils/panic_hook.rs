use std::panic;

use leptos::logging::log;

/// Installs the console panic hook plus a small wrapper that tags the
/// panic message, so crashes inside spawned network futures are easy to
/// spot in the browser console.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        log!("[PANIC] review manager crashed: {}", message);
    }));
}

/// Call once from main before mounting.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] panic hook installed");
}
