//! Platform categories.
//!
//! [`system_category()`] is the category of native OS error numbers for the
//! target platform:
//!
//! - Windows: the Win32 category ([`win32::win32_category`]), which
//!   classifies through the Win32 mapping table and renders messages with
//!   `FormatMessageW`.
//! - Everything else: the POSIX category, which classifies errno values
//!   directly onto [`Errc`](crate::Errc) and renders messages with
//!   `strerror_r`.
//!
//! The Win32 category and its table compile on every target so that the
//! classification data can be used and tested anywhere.

mod posix;
pub mod win32;
pub mod win32_codes;

use crate::category::ErrorCategory;

pub use posix::posix_category;
pub use win32::win32_category;

/// The native OS error category of this platform.
#[inline]
pub fn system_category() -> ErrorCategory {
    #[cfg(windows)]
    {
        win32_category()
    }
    #[cfg(not(windows))]
    {
        posix_category()
    }
}
