//! Portable error conditions.
//!
//! An [`ErrorCondition`] has the same `(value, category)` shape as a native
//! error code but is meant for the *right-hand side* of a test: "is this
//! code a permission problem?". Conditions normally live in the generic
//! category (see [`Errc`](crate::Errc)), so a test written against them
//! does not depend on any platform category.
//!
//! ```rust
//! use portable_errors::{Errc, ErrorCode, system_category};
//!
//! # #[cfg(windows)] let native = 5;   // ERROR_ACCESS_DENIED
//! # #[cfg(unix)] let native = 13;     // EACCES
//! let code = ErrorCode::new(native, system_category());
//! assert!(code == Errc::PermissionDenied);
//! ```

use crate::category::ErrorCategory;
use crate::errc::generic_category;
use crate::hash;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A domain enum that converts into an [`ErrorCondition`].
///
/// Implementing this trait is how a domain opts in to implicit conversion:
/// `ErrorCondition::from(value)` and `value.into()` call
/// [`make_error_condition`](ErrorConditionEnum::make_error_condition)
/// exactly once.
pub trait ErrorConditionEnum: Copy {
    /// Produce the `(value, category)` pair for `self`.
    fn make_error_condition(self) -> ErrorCondition;
}

/// A portable `(value, category)` classification.
#[derive(Clone, Copy)]
pub struct ErrorCondition {
    value: i32,
    category: ErrorCategory,
}

impl ErrorCondition {
    /// Build a condition from its parts.
    #[inline]
    pub const fn new(value: i32, category: ErrorCategory) -> Self {
        Self { value, category }
    }

    /// Replace both parts.
    #[inline]
    pub fn assign(&mut self, value: i32, category: ErrorCategory) {
        *self = Self::new(value, category);
    }

    /// Reset to `(0, generic_category())`.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Numeric value.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Owning category.
    #[inline]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Owned message text.
    #[inline]
    pub fn message(&self) -> String {
        self.category.message(self.value)
    }

    /// Render the message into `buffer` without allocating the result.
    #[inline]
    pub fn message_to<'b>(&self, buffer: &'b mut [u8]) -> &'b str {
        self.category.message_to(self.value, buffer)
    }

    /// Whether this condition describes a failure.
    #[inline]
    pub fn failed(&self) -> bool {
        self.category.failed(self.value)
    }

    /// FNV-1a hash of `(category identity, value)`.
    #[inline]
    pub fn hash_value(&self) -> u64 {
        hash::hash_identity(self.category.identity(), self.value)
    }
}

impl Default for ErrorCondition {
    fn default() -> Self {
        Self::new(0, generic_category())
    }
}

impl<E: ErrorConditionEnum> From<E> for ErrorCondition {
    #[inline]
    fn from(value: E) -> Self {
        value.make_error_condition()
    }
}

impl PartialEq for ErrorCondition {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.category == other.category
    }
}

impl Eq for ErrorCondition {}

impl Ord for ErrorCondition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for ErrorCondition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ErrorCondition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl fmt::Display for ErrorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.name(), self.value)
    }
}

impl fmt::Debug for ErrorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCondition")
            .field("value", &self.value)
            .field("category", &self.category.name())
            .finish()
    }
}

impl std::error::Error for ErrorCondition {}
