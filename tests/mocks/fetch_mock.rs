/// Scripted replacement for window.fetch so sync flows can be driven
/// end-to-end without a server. Every request is logged as
/// "<METHOD> <url>"; PUT/POST handlers in the script can stash the
/// multipart field names in window.__lastFormKeys for inspection.

/// `script` must be a JS expression evaluating to a function
/// `(url, method, input, init) => Promise<Response>`.
pub fn install(script: &str) {
    let code = format!(
        r#"
        window.__requestLog = [];
        window.__lastFormKeys = null;
        if (!window.__realFetch) {{ window.__realFetch = window.fetch; }}
        const __route = ({script});
        window.fetch = function(input, init) {{
            const url = (typeof input === 'string') ? input : input.url;
            const method = ((init && init.method) || (input && input.method) || 'GET').toUpperCase();
            window.__requestLog.push(method + ' ' + url);
            return __route(url, method, input, init);
        }};
        "#
    );
    js_sys::eval(&code).expect("fetch mock should install");
}

/// Restore the real fetch and drop the request log.
pub fn uninstall() {
    let _ = js_sys::eval(
        "if (window.__realFetch) { window.fetch = window.__realFetch; } \
         window.__requestLog = []; window.__lastFormKeys = null;",
    );
}

/// Requests seen since install, in order.
pub fn request_log() -> Vec<String> {
    let value = js_sys::eval("JSON.stringify(window.__requestLog || [])")
        .expect("request log should serialize");
    serde_json::from_str(&value.as_string().unwrap()).unwrap()
}

/// Field names of the last multipart body a scripted handler recorded.
pub fn last_form_keys() -> Option<Vec<String>> {
    let value = js_sys::eval("window.__lastFormKeys ? JSON.stringify(window.__lastFormKeys) : null")
        .expect("form keys should serialize");
    value
        .as_string()
        .map(|json| serde_json::from_str(&json).unwrap())
}
