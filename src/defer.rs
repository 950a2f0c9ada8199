//! Scope guard: run a closure when the enclosing scope exits.
//!
//! Same RAII shape as a lock guard: the work happens in `Drop`, so it runs on
//! normal exit and on unwind, but not on `std::process::exit`.

/// Runs `f` once on drop unless cancelled.
pub struct Defer<F: FnOnce()> {
    f: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(f: F) -> Self {
        Self { f: Some(f) }
    }

    /// Disarm the guard; the closure is dropped without running.
    pub fn cancel(&mut self) {
        self.f = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(f) = self.f.take() {
            f();
        }
    }
}

/// `defer! { ... }` runs the block at the end of the current scope.
/// Several defers in one scope run in reverse order.
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer_guard = $crate::defer::Defer::new(|| { $($body)* });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn runs_at_scope_exit_in_reverse_order() {
        let log = RefCell::new(Vec::new());
        {
            crate::defer! { log.borrow_mut().push("first"); }
            crate::defer! { log.borrow_mut().push("second"); }
            log.borrow_mut().push("body");
        }
        assert_eq!(*log.borrow(), vec!["body", "second", "first"]);
    }

    #[test]
    fn cancelled_guard_does_not_run() {
        let hits = RefCell::new(0);
        {
            let mut g = Defer::new(|| *hits.borrow_mut() += 1);
            g.cancel();
        }
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn runs_on_unwind() {
        let hits = std::sync::atomic::AtomicUsize::new(0);
        let res = std::panic::catch_unwind(|| {
            let _g = Defer::new(|| {
                hits.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            });
            panic!("unwind through the guard");
        });
        assert!(res.is_err());
        assert_eq!(hits.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
