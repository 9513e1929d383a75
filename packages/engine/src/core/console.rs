//! Console output
//!
//! In the browser every line goes to `console.log`; natively it goes through
//! the `log` facade at debug level so tests and host tools can pick it up.

#[doc(hidden)]
pub fn write_line(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ::log::debug!("{}", msg);
    }
}

/// `format!`-style console logging.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::write_line(&format!($($arg)*))
    };
}
