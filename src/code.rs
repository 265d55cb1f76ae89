//! The native error code type.
//!
//! [`ErrorCode`] is a small `Copy` value in one of three states:
//!
//! | State     | `value()`                  | `category()`            |
//! |-----------|----------------------------|-------------------------|
//! | Empty     | `0`                        | `system_category()`     |
//! | Native    | stored value               | stored category         |
//! | Foreign   | see [`ErrorCode::value`]   | see [`ErrorCode::category`] |
//!
//! The Empty state is what [`ErrorCode::default`] and [`ErrorCode::clear`]
//! produce; it means "no error" without touching any category. The Native
//! state caches the category's failure verdict at construction, so
//! [`ErrorCode::failed`] never calls into the category afterwards.
//!
//! Equality, ordering and hashing are defined on the observable
//! `(category, value)` pair, so an Empty code equals a Native
//! `(0, system_category())` code.

use crate::category::ErrorCategory;
use crate::condition::ErrorCondition;
use crate::errc::Errc;
use crate::foreign::{FOREIGN_VALUE_PRIME, ForeignErrorCode, interop_category};
use crate::hash;
use crate::logging::ErrorLog;
use crate::message;
use crate::system::system_category;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A domain enum that converts into an [`ErrorCode`].
///
/// Implementing this trait opts a type in to implicit conversion:
/// `ErrorCode::from(value)` and `value.into()` call
/// [`make_error_code`](ErrorCodeEnum::make_error_code) exactly once.
/// The [`error_code_enum!`](crate::error_code_enum) macro writes the impl
/// for fieldless enums.
pub trait ErrorCodeEnum: Copy {
    /// Produce the native code for `self`.
    fn make_error_code(self) -> ErrorCode;
}

#[derive(Clone, Copy)]
enum Repr {
    Empty,
    Native {
        value: i32,
        category: ErrorCategory,
        failed: bool,
    },
    Foreign(ForeignErrorCode),
}

/// A platform or domain error code: `(value, category)` plus state.
#[derive(Clone, Copy)]
pub struct ErrorCode {
    repr: Repr,
}

impl ErrorCode {
    /// The Empty state: no error, platform category.
    #[inline]
    pub const fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    /// A Native code. Consults `category` once to cache the failure verdict.
    #[inline]
    pub fn new(value: i32, category: ErrorCategory) -> Self {
        Self {
            repr: Repr::Native {
                value,
                category,
                failed: category.failed(value),
            },
        }
    }

    /// Adopt a foreign code, keeping its payload verbatim.
    #[inline]
    pub fn from_foreign(foreign: ForeignErrorCode) -> Self {
        Self {
            repr: Repr::Foreign(foreign),
        }
    }

    /// The calling thread's most recent OS error under the platform category.
    pub fn last_os_error() -> Self {
        let raw = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
        Self::new(raw, system_category())
    }

    /// Replace this code with a Native `(value, category)`.
    #[inline]
    pub fn assign(&mut self, value: i32, category: ErrorCategory) {
        *self = Self::new(value, category);
    }

    /// Reset to the Empty state.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Numeric value.
    ///
    /// Foreign codes whose category is one of ours report the wrapped value
    /// unchanged. Codes with an external category report the raw value plus
    /// the category address reduced modulo [`FOREIGN_VALUE_PRIME`], with
    /// wrapping arithmetic. Codes from different external categories then
    /// rarely collide on `value()` alone.
    pub fn value(&self) -> i32 {
        match self.repr {
            Repr::Empty => 0,
            Repr::Native { value, .. } => value,
            Repr::Foreign(foreign) => match foreign.external_address() {
                None => foreign.value(),
                Some(address) => foreign
                    .value()
                    .wrapping_add((address % FOREIGN_VALUE_PRIME) as i32),
            },
        }
    }

    /// Owning category. Foreign codes with an external category report
    /// [`interop_category()`].
    pub fn category(&self) -> ErrorCategory {
        match self.repr {
            Repr::Empty => system_category(),
            Repr::Native { category, .. } => category,
            Repr::Foreign(foreign) => foreign.native_category().unwrap_or_else(interop_category),
        }
    }

    /// Whether this code is in the Foreign state.
    #[inline]
    pub fn is_foreign(&self) -> bool {
        matches!(self.repr, Repr::Foreign(_))
    }

    /// Owned message text. Foreign codes delegate to the foreign payload.
    pub fn message(&self) -> String {
        match self.repr {
            Repr::Foreign(foreign) => foreign.message(),
            _ => self.category().message(self.value()),
        }
    }

    /// Render the message into `buffer`; never fails, never overruns.
    pub fn message_to<'b>(&self, buffer: &'b mut [u8]) -> &'b str {
        match self.repr {
            Repr::Foreign(foreign) => message::render_into(buffer, |out| foreign.write_message(out)),
            _ => self.category().message_to(self.value(), buffer),
        }
    }

    /// Whether this code represents a failure.
    ///
    /// Empty codes never fail. Native codes return the verdict cached at
    /// construction. Foreign codes ask the payload.
    #[inline]
    pub fn failed(&self) -> bool {
        match self.repr {
            Repr::Empty => false,
            Repr::Native { failed, .. } => failed,
            Repr::Foreign(foreign) => foreign.failed(),
        }
    }

    /// Portable classification via the owning category.
    #[inline]
    pub fn default_error_condition(&self) -> ErrorCondition {
        self.category().default_error_condition(self.value())
    }

    /// View this code as a foreign value.
    ///
    /// Foreign codes return their stored payload. Empty and Native codes
    /// lend their category, so [`from_foreign`](Self::from_foreign) on the
    /// result gives back the same `(value, category)` pair.
    pub fn to_foreign(&self) -> ForeignErrorCode {
        match self.repr {
            Repr::Empty => ForeignErrorCode::from_native(0, system_category()),
            Repr::Native {
                value, category, ..
            } => ForeignErrorCode::from_native(value, category),
            Repr::Foreign(foreign) => foreign,
        }
    }

    /// Switch this code to the Foreign state in place and return the payload.
    ///
    /// Observable `value()`, `category()` and `failed()` are unchanged for
    /// Empty and Native codes, since the payload wraps our own category.
    pub fn materialize_as_foreign(&mut self) -> &mut ForeignErrorCode {
        if !self.is_foreign() {
            self.repr = Repr::Foreign(self.to_foreign());
        }
        match &mut self.repr {
            Repr::Foreign(foreign) => foreign,
            _ => unreachable!("error code was just switched to the foreign state"),
        }
    }

    /// FNV-1a hash of `(category identity, value)`.
    #[inline]
    pub fn hash_value(&self) -> u64 {
        hash::hash_identity(self.category().identity(), self.value())
    }

    /// Structured record for log output.
    #[inline]
    pub fn log_record(&self) -> ErrorLog<'_> {
        ErrorLog::new(self)
    }

    /// Run `f` with a structured log record for this code.
    #[inline]
    pub fn with_log_record<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        f(&self.log_record())
    }
}

impl Default for ErrorCode {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: ErrorCodeEnum> From<E> for ErrorCode {
    #[inline]
    fn from(value: E) -> Self {
        value.make_error_code()
    }
}

impl From<ForeignErrorCode> for ErrorCode {
    #[inline]
    fn from(foreign: ForeignErrorCode) -> Self {
        Self::from_foreign(foreign)
    }
}

impl From<ErrorCode> for ForeignErrorCode {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.to_foreign()
    }
}

/// Boolean conversion: `true` exactly when the code failed.
impl From<ErrorCode> for bool {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.failed()
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value() && self.category() == other.category()
    }
}

impl Eq for ErrorCode {}

impl Ord for ErrorCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| self.value().cmp(&other.value()))
    }
}

impl PartialOrd for ErrorCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

/// Code/condition equivalence: either side's category may claim the match.
impl PartialEq<ErrorCondition> for ErrorCode {
    fn eq(&self, condition: &ErrorCondition) -> bool {
        self.category().equivalent(self.value(), condition)
            || condition.category().equivalent_code(self, condition.value())
    }
}

impl PartialEq<ErrorCode> for ErrorCondition {
    #[inline]
    fn eq(&self, code: &ErrorCode) -> bool {
        code == self
    }
}

impl PartialEq<Errc> for ErrorCode {
    #[inline]
    fn eq(&self, kind: &Errc) -> bool {
        *self == kind.condition()
    }
}

impl PartialEq<ErrorCode> for Errc {
    #[inline]
    fn eq(&self, code: &ErrorCode) -> bool {
        *code == self.condition()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Foreign(foreign) => write!(f, "foreign:{}", foreign),
            _ => write!(f, "{}:{}", self.category().name(), self.value()),
        }
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Empty => f.write_str("ErrorCode(empty)"),
            Repr::Native {
                value, category, ..
            } => f
                .debug_struct("ErrorCode")
                .field("value", &value)
                .field("category", &category.name())
                .finish(),
            Repr::Foreign(foreign) => f.debug_tuple("ErrorCode").field(&foreign).finish(),
        }
    }
}

impl std::error::Error for ErrorCode {}
