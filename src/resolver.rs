//! Platform address resolution and sentinel classification.

use crate::symbol::Address;
use std::os::raw::c_void;

/// Looks up the native address of a driver entry point by name.
///
/// Only called while a graphics context is current. Any
/// `Fn(&str) -> *const c_void` is a resolver, so `eglGetProcAddress`-style
/// closures plug in directly.
pub trait AddressResolver {
    /// Returns the address of `name`, or a platform sentinel if it is not
    /// exported.
    fn resolve(&self, name: &str) -> *const c_void;
}

impl<F> AddressResolver for F
    where F: Fn(&str) -> *const c_void
{
    fn resolve(&self, name: &str) -> *const c_void {
        self(name)
    }
}

/// Closed range of signed values a resolver uses to mean "not found".
///
/// Platforms disagree here: some return null, others small error codes or
/// `-1`. Values outside the range are genuine addresses, including those
/// that read as negative when treated as signed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SentinelRange {
    /// Smallest sentinel value.
    pub min: isize,

    /// Largest sentinel value.
    pub max: isize,
}

impl SentinelRange {
    /// Null, the small codes `1..=3`, and `-1`.
    pub const PERMISSIVE: SentinelRange = SentinelRange { min: -1, max: 3 };

    /// Null only.
    pub const NULL_ONLY: SentinelRange = SentinelRange { min: 0, max: 0 };

    /// Returns `true` if `value` signals absence.
    pub fn contains(self, value: isize) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns the address `ptr` denotes, or `None` for a sentinel.
    pub fn classify(self, ptr: *const c_void) -> Option<Address> {
        if self.contains(ptr as isize) {
            None
        } else {
            Address::new(ptr)
        }
    }
}

impl Default for SentinelRange {
    fn default() -> Self {
        SentinelRange::PERMISSIVE
    }
}
