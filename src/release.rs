//! Release of exclusively owned heap values held in optional slots.
//!
//! Releasing takes the box out of the slot before dropping it, so the slot
//! reads `None` afterwards and a repeated release is a no-op. There is no
//! way to drop the same value twice.

use log::debug;

use crate::metrics;

/// Drop the boxed value if the slot holds one.
/// Returns `true` if something was released, `false` for an empty slot.
pub fn release_if_present<T>(slot: &mut Option<Box<T>>) -> bool {
    match slot.take() {
        Some(b) => {
            drop(b);
            metrics::record_release();
            debug!("released {}", std::any::type_name::<T>());
            true
        }
        None => {
            metrics::record_release_noop();
            false
        }
    }
}

/// Single-owner handle with an idempotent `release()`.
/// Whatever is still held is released on drop.
#[derive(Debug)]
pub struct Owned<T> {
    slot: Option<Box<T>>,
}

impl<T> Owned<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Some(Box::new(value)),
        }
    }

    pub fn empty() -> Self {
        Self { slot: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.as_deref_mut()
    }

    pub fn is_released(&self) -> bool {
        self.slot.is_none()
    }

    pub fn release(&mut self) -> bool {
        release_if_present(&mut self.slot)
    }

    /// Give up ownership without releasing.
    pub fn into_inner(mut self) -> Option<Box<T>> {
        self.slot.take()
    }
}

impl<T> Default for Owned<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<T>> for Owned<T> {
    fn from(b: Box<T>) -> Self {
        Self { slot: Some(b) }
    }
}

impl<T> Drop for Owned<T> {
    fn drop(&mut self) {
        release_if_present(&mut self.slot);
    }
}
