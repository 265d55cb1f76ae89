//! Error categories - the domain objects that give numeric codes meaning.
//!
//! A category is a process-lifetime singleton: a `static` item implementing
//! [`Category`], handed out through an accessor function that wraps it in
//! an [`ErrorCategory`] handle. Error codes and conditions store the handle,
//! never a copy of the category itself.
//!
//! # Identity
//!
//! Categories are compared by **identity**, never by name. Two categories
//! may share a name and still be distinct domains.
//!
//! - If a category reports a nonzero [`Category::id`], identity is that
//!   number. Independently-linked copies of the same category (for example
//!   across a dynamic-load boundary) then still compare equal.
//! - Otherwise identity is the address of the `static` object.
//!
//! Category types must not be zero-sized: distinct zero-sized statics are
//! allowed to share an address, which would collapse their identities.
//! Every category in this crate carries at least its name as a field.
//!
//! # Defining a Category
//!
//! ```rust
//! use portable_errors::{Category, ErrorCategory, ErrorCode};
//!
//! struct ParserCategory {
//!     name: &'static str,
//! }
//!
//! impl Category for ParserCategory {
//!     fn name(&self) -> &'static str {
//!         self.name
//!     }
//!
//!     fn message(&self, value: i32) -> String {
//!         match value {
//!             1 => "unexpected end of input".to_owned(),
//!             _ => "unknown parser error".to_owned(),
//!         }
//!     }
//! }
//!
//! static PARSER: ParserCategory = ParserCategory { name: "parser" };
//!
//! pub fn parser_category() -> ErrorCategory {
//!     ErrorCategory::new(&PARSER)
//! }
//!
//! let code = ErrorCode::new(1, parser_category());
//! assert_eq!(code.message(), "unexpected end of input");
//! assert!(code.failed());
//! ```

use crate::code::ErrorCode;
use crate::condition::ErrorCondition;
use crate::message;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Behaviour of an error domain.
///
/// Only [`name`](Category::name) and [`message`](Category::message) are
/// required. Every other hook has the default the portable contract calls
/// for; hooks returning `Option` use `None` to mean "apply the default rule".
///
/// Implementations must be immutable: categories are shared by every thread
/// in the process and are read concurrently without synchronization.
pub trait Category: Send + Sync + 'static {
    /// Display name of the domain (`"system"`, `"generic"`, ...).
    fn name(&self) -> &'static str;

    /// Numeric identity. `0` means "compare by object address".
    fn id(&self) -> u64 {
        0
    }

    /// Human-readable text for `value`.
    ///
    /// Must not fail or panic. Unknown values return a stable placeholder.
    fn message(&self, value: i32) -> String;

    /// Write the text for `value` into `out`.
    ///
    /// The default delegates to [`message`](Category::message) and therefore
    /// allocates. Categories with static message tables override this so the
    /// bounded-buffer path stays allocation-free.
    fn write_message(&self, value: i32, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.message(value))
    }

    /// Whether `value` represents a failure. Default: nonzero.
    fn failed(&self, value: i32) -> bool {
        value != 0
    }

    /// Portable classification of `value`.
    ///
    /// `None` selects the trivial mapping `(value, this category)`.
    fn portable_condition(&self, value: i32) -> Option<ErrorCondition> {
        let _ = value;
        None
    }

    /// Override for "does code `value` of this category match `condition`".
    ///
    /// `None` selects the default rule: compare the default condition.
    fn equivalent_condition(&self, value: i32, condition: &ErrorCondition) -> Option<bool> {
        let _ = (value, condition);
        None
    }

    /// Override for "does `code` match condition `condition_value` of this category".
    ///
    /// `None` selects the default rule: same category, same value.
    fn equivalent_code(&self, code: &ErrorCode, condition_value: i32) -> Option<bool> {
        let _ = (code, condition_value);
        None
    }
}

/// Copyable identity handle to a `'static` category.
///
/// All comparison, ordering and hashing of categories goes through this
/// handle and uses identity only (see the module docs).
#[derive(Clone, Copy)]
pub struct ErrorCategory {
    inner: &'static dyn Category,
}

impl ErrorCategory {
    /// Wrap a category singleton.
    #[inline]
    pub const fn new(inner: &'static dyn Category) -> Self {
        Self { inner }
    }

    /// The underlying category object.
    #[inline]
    pub fn as_dyn(self) -> &'static dyn Category {
        self.inner
    }

    /// Display name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.inner.name()
    }

    /// Registered numeric identity (`0` if none).
    #[inline]
    pub fn id(self) -> u64 {
        self.inner.id()
    }

    #[inline]
    fn address(self) -> usize {
        self.inner as *const dyn Category as *const () as usize
    }

    /// Effective identity: the numeric id if nonzero, else the object address.
    #[inline]
    pub fn identity(self) -> u64 {
        match self.id() {
            0 => self.address() as u64,
            id => id,
        }
    }

    /// Owned message text for `value`.
    #[inline]
    pub fn message(self, value: i32) -> String {
        self.inner.message(value)
    }

    /// Render the message for `value` into `buffer`.
    ///
    /// Never fails and never writes past `buffer`. See
    /// [`message::render_into`] for the truncation and terminator rules.
    #[inline]
    pub fn message_to<'b>(self, value: i32, buffer: &'b mut [u8]) -> &'b str {
        message::render_into(buffer, |out| self.inner.write_message(value, out))
    }

    /// Whether `value` is a failure in this domain.
    #[inline]
    pub fn failed(self, value: i32) -> bool {
        self.inner.failed(value)
    }

    /// Portable condition for `value`, falling back to `(value, self)`.
    #[inline]
    pub fn default_error_condition(self, value: i32) -> ErrorCondition {
        self.inner
            .portable_condition(value)
            .unwrap_or_else(|| ErrorCondition::new(value, self))
    }

    /// Whether code `value` of this category is equivalent to `condition`.
    pub fn equivalent(self, value: i32, condition: &ErrorCondition) -> bool {
        self.inner
            .equivalent_condition(value, condition)
            .unwrap_or_else(|| self.default_error_condition(value) == *condition)
    }

    /// Whether `code` is equivalent to condition `condition_value` of this category.
    pub fn equivalent_code(self, code: &ErrorCode, condition_value: i32) -> bool {
        self.inner
            .equivalent_code(code, condition_value)
            .unwrap_or_else(|| code.category() == self && code.value() == condition_value)
    }
}

impl PartialEq for ErrorCategory {
    fn eq(&self, other: &Self) -> bool {
        match other.id() {
            0 => self.address() == other.address(),
            id => self.id() == id,
        }
    }
}

impl Eq for ErrorCategory {}

impl Ord for ErrorCategory {
    /// Numeric id first; address only breaks ties between id-less categories.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.id().cmp(&other.id()) {
            Ordering::Equal if self.id() == 0 => self.address().cmp(&other.address()),
            ordering => ordering,
        }
    }
}

impl PartialOrd for ErrorCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ErrorCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.identity());
    }
}

impl fmt::Debug for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCategory")
            .field("name", &self.name())
            .field("id", &self.id())
            .finish()
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
