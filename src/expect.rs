//! "Unwrap or die" for optional values.

use crate::fatal::Fatal;
use crate::metrics;

/// Prefix prepended to the caller's message when the value is absent.
pub const EXPECT_PREFIX: &str = "ERROR: ";

/// Absent values always exit with 1, independent of UtilConfig.
pub const EXPECT_EXIT_CODE: i32 = 1;

/// Borrow the contained value, or return the `Fatal` that [`expect_or_exit`]
/// would terminate with.
pub fn expect_some<'a, T>(opt: &'a Option<T>, msg: &str) -> Result<&'a T, Fatal> {
    match opt {
        Some(v) => Ok(v),
        None => {
            metrics::record_expect_failure();
            Err(Fatal::with_code(
                format!("{}{}", EXPECT_PREFIX, msg),
                EXPECT_EXIT_CODE,
            ))
        }
    }
}

/// Borrow the contained value; an absent value prints `ERROR: <msg>` to
/// stderr and terminates the process with exit code 1.
pub fn expect_or_exit<'a, T>(opt: &'a Option<T>, msg: &str) -> &'a T {
    match expect_some(opt, msg) {
        Ok(v) => v,
        Err(f) => f.exit(),
    }
}

/// Method forms of the helpers above.
pub trait OptionExt<T> {
    fn or_fatal(&self, msg: &str) -> Result<&T, Fatal>;
    fn or_exit(&self, msg: &str) -> &T;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_fatal(&self, msg: &str) -> Result<&T, Fatal> {
        expect_some(self, msg)
    }

    fn or_exit(&self, msg: &str) -> &T {
        expect_or_exit(self, msg)
    }
}
