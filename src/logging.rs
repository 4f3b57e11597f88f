//! Console logging for the browser build.

/// Route `log` records to the browser console. Call once, before mounting.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("[APP] Logging initialized");
}
