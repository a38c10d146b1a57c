// Document lifecycle checks kept free of web-sys so they run on the host.

/// `document.readyState` once `window.load` has fired.
pub const READY_STATE_COMPLETE: &str = "complete";

/// Whether a `load` listener added now would still fire. The wasm module
/// is instantiated asynchronously and can start after the page has loaded.
#[inline]
pub fn load_pending(ready_state: &str) -> bool {
    ready_state != READY_STATE_COMPLETE
}
