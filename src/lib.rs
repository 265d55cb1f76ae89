//! # Portable Errors
//!
//! Error codes as `(value, category)` pairs, with a portable condition
//! vocabulary for testing *what kind* of failure happened without knowing
//! which subsystem produced it.
//!
//! ## Design Philosophy
//!
//! 1. **A code is a value**: [`ErrorCode`] is `Copy`, never allocates, and
//!    answers `failed()` from state cached at construction.
//! 2. **Categories give numbers meaning**: a [`Category`] is a process-wide
//!    `static` singleton compared by identity, never by name.
//! 3. **Conditions make tests portable**: native codes classify into
//!    [`Errc`] kinds, so `code == Errc::PermissionDenied` holds for
//!    `ERROR_ACCESS_DENIED` on Windows and `EACCES` on Unix alike.
//! 4. **Foreign codes cross over losslessly**: codes from another error
//!    library ride along in [`ForeignErrorCode`] and come back unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use portable_errors::{Errc, ErrorCode, system_category};
//!
//! # #[cfg(windows)] let raw = 80;   // ERROR_FILE_EXISTS
//! # #[cfg(not(windows))] let raw = 17;  // EEXIST
//! let code = ErrorCode::new(raw, system_category());
//!
//! assert!(code.failed());
//! assert!(code == Errc::FileExists);
//! assert_ne!(code, ErrorCode::from(Errc::FileExists)); // different category
//! println!("{code}: {}", code.message());
//! ```
//!
//! ## Windows Classification
//!
//! The Win32 table is available on every target:
//!
//! ```rust
//! use portable_errors::{Errc, system::win32};
//!
//! assert_eq!(win32::classify(5), Some(Errc::PermissionDenied));
//! // HRESULT_FROM_WIN32(ERROR_ACCESS_DENIED)
//! assert_eq!(win32::classify(0x8007_0005u32 as i32), Some(Errc::PermissionDenied));
//! ```
//!
//! ## Feature Flags
//!
//! - `std_interop` (default): conversions to and from [`std::io::Error`].
//! - `trusted_debug`: `ErrorLog::format_for_trusted_debug` in debug builds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod code;
pub mod condition;
pub mod convenience;
pub mod errc;
pub mod foreign;
pub mod hash;
#[cfg(feature = "std_interop")]
pub mod io;
pub mod logging;
pub mod message;
pub mod system;

pub use category::{Category, ErrorCategory};
pub use code::{ErrorCode, ErrorCodeEnum};
pub use condition::{ErrorCondition, ErrorConditionEnum};
pub use errc::{Errc, UnknownErrc, generic_category};
pub use foreign::{ForeignCategory, ForeignErrorCode, interop_category};
pub use logging::ErrorLog;
pub use system::system_category;
