//! Foreign error-code representation and the interop category.
//!
//! A *foreign* error code is one produced by another error library with the
//! same `(value, category)` shape but its own category objects. This crate
//! models such codes with [`ForeignErrorCode`], whose category is either:
//!
//! - **external**: a `'static` object implementing [`ForeignCategory`],
//!   owned by the other library, or
//! - **native**: one of this crate's [`ErrorCategory`] handles, lent to the
//!   foreign side so that a native code can cross the boundary and come
//!   back without re-encoding.
//!
//! # Bridge Guarantees
//!
//! - Native or empty `ErrorCode` → foreign → `ErrorCode` preserves `value()`
//!   and `category()` exactly.
//! - Codes with an external category keep their payload verbatim. On the
//!   native side they report [`interop_category()`] and a *hashed* value
//!   (see [`ErrorCode::value`](crate::ErrorCode::value)). That value is an
//!   approximation for code that only looks at `value()`. Exact recovery
//!   goes through [`ErrorCode::to_foreign`](crate::ErrorCode::to_foreign).

use crate::category::{Category, ErrorCategory};
use crate::system::system_category;
use std::fmt;

/// Prime modulus (2^30 - 35) applied to a foreign category's address
/// before it is folded into the reported value.
pub const FOREIGN_VALUE_PRIME: usize = 1_073_741_789;

/// Category object of another error library.
///
/// Identity is the object's address, so implementors must not be
/// zero-sized.
pub trait ForeignCategory: Send + Sync + 'static {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Message text for `value`. Must not fail.
    fn message(&self, value: i32) -> String;
}

#[derive(Clone, Copy)]
enum Origin {
    Native(ErrorCategory),
    External(&'static dyn ForeignCategory),
}

/// Error code value of another library, or a native code lent to one.
#[derive(Clone, Copy)]
pub struct ForeignErrorCode {
    value: i32,
    origin: Origin,
}

impl ForeignErrorCode {
    /// A code in an external category.
    #[inline]
    pub const fn new(value: i32, category: &'static dyn ForeignCategory) -> Self {
        Self {
            value,
            origin: Origin::External(category),
        }
    }

    /// A native `(value, category)` pair viewed as a foreign code.
    #[inline]
    pub const fn from_native(value: i32, category: ErrorCategory) -> Self {
        Self {
            value,
            origin: Origin::Native(category),
        }
    }

    /// The canonical success value: `0` under the platform category.
    #[inline]
    pub fn success() -> Self {
        Self::from_native(0, system_category())
    }

    /// Raw value as stored by the foreign side.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Name of whichever category this code carries.
    pub fn category_name(&self) -> &'static str {
        match self.origin {
            Origin::Native(category) => category.name(),
            Origin::External(category) => category.name(),
        }
    }

    /// The native category, if this code wraps one.
    #[inline]
    pub fn native_category(&self) -> Option<ErrorCategory> {
        match self.origin {
            Origin::Native(category) => Some(category),
            Origin::External(_) => None,
        }
    }

    /// The external category, if this code has one.
    #[inline]
    pub fn external_category(&self) -> Option<&'static dyn ForeignCategory> {
        match self.origin {
            Origin::Native(_) => None,
            Origin::External(category) => Some(category),
        }
    }

    /// Address identity of the external category.
    #[inline]
    pub(crate) fn external_address(&self) -> Option<usize> {
        self.external_category()
            .map(|category| category as *const dyn ForeignCategory as *const () as usize)
    }

    /// Message text, delegated to the owning category.
    pub fn message(&self) -> String {
        match self.origin {
            Origin::Native(category) => category.message(self.value),
            Origin::External(category) => category.message(self.value),
        }
    }

    /// Write the message into `out`.
    pub fn write_message(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self.origin {
            Origin::Native(category) => category.as_dyn().write_message(self.value, out),
            Origin::External(category) => out.write_str(&category.message(self.value)),
        }
    }

    /// Failure test. Native categories apply their own rule; external
    /// codes fail when nonzero.
    #[inline]
    pub fn failed(&self) -> bool {
        match self.origin {
            Origin::Native(category) => category.failed(self.value),
            Origin::External(_) => self.value != 0,
        }
    }
}

impl PartialEq for ForeignErrorCode {
    fn eq(&self, other: &Self) -> bool {
        if self.value != other.value {
            return false;
        }
        match (self.origin, other.origin) {
            (Origin::Native(a), Origin::Native(b)) => a == b,
            (Origin::External(_), Origin::External(_)) => {
                self.external_address() == other.external_address()
            }
            _ => false,
        }
    }
}

impl Eq for ForeignErrorCode {}

impl fmt::Display for ForeignErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category_name(), self.value)
    }
}

impl fmt::Debug for ForeignErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = match self.origin {
            Origin::Native(_) => "native",
            Origin::External(_) => "external",
        };
        f.debug_struct("ForeignErrorCode")
            .field("value", &self.value)
            .field("category", &self.category_name())
            .field("origin", &origin)
            .finish()
    }
}

// ============================================================================
// Interop Category
// ============================================================================

/// Category reported by error codes holding an external foreign payload.
struct InteropCategory {
    name: &'static str,
}

impl Category for InteropCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        format!("Unknown interop error {}", value)
    }

    fn write_message(&self, value: i32, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "Unknown interop error {}", value)
    }
}

static INTEROP: InteropCategory = InteropCategory { name: "interop" };

/// Marker category of foreign-state error codes.
#[inline]
pub fn interop_category() -> ErrorCategory {
    ErrorCategory::new(&INTEROP)
}
