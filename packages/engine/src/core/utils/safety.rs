//! Checked-in-debug, unchecked-in-release slice indexing.
//!
//! Callers validate bounds once (grid coordinates, pixel layout) and then
//! index through `fast!`, which keeps the normal bounds check in debug builds
//! so a broken validation still panics with a useful message.
//!
//! ```rust
//! use bleed_engine::fast;
//!
//! let mut cells = vec![0i32; 6];
//! fast!(cells, [4] = 7);
//! assert_eq!(*fast!(cells, [4]), 7);
//! ```

/// Index a slice or `Vec`.
///
/// - `fast!(slice, [i])` reads and yields `&T`
/// - `fast!(slice, [i] = v)` writes
///
/// The index must already be known to be in bounds.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
