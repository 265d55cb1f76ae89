//! POSIX errno category, the platform category off Windows.
//!
//! [`Errc`] takes its values from the C library's errno constants, so a
//! known errno classifies as the portable kind with the same number.
//! `EWOULDBLOCK` and `EOPNOTSUPP` also classify as their aliases where the
//! C library gives them numbers of their own. Unknown values keep the
//! trivial mapping under this category.

use crate::category::{Category, ErrorCategory};
use crate::condition::ErrorCondition;
use crate::errc::Errc;
use crate::message::{UNKNOWN_ERROR, normalize_message};

struct PosixCategory {
    name: &'static str,
}

impl Category for PosixCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        match os_message(value) {
            Some(raw) => match normalize_message(&raw) {
                "" => UNKNOWN_ERROR.to_owned(),
                text => text.to_owned(),
            },
            None => UNKNOWN_ERROR.to_owned(),
        }
    }

    fn portable_condition(&self, value: i32) -> Option<ErrorCondition> {
        classify(value).map(Errc::condition)
    }
}

#[cfg(unix)]
fn classify(value: i32) -> Option<Errc> {
    match value {
        libc::EWOULDBLOCK => Some(Errc::OperationWouldBlock),
        libc::EOPNOTSUPP => Some(Errc::OperationNotSupported),
        _ => Errc::from_raw(value),
    }
}

#[cfg(not(unix))]
fn classify(value: i32) -> Option<Errc> {
    Errc::from_raw(value)
}

static POSIX: PosixCategory = PosixCategory { name: "system" };

/// The errno category. This is `system_category()` on every non-Windows
/// target.
#[inline]
pub fn posix_category() -> ErrorCategory {
    ErrorCategory::new(&POSIX)
}

/// Largest buffer, in bytes, the retry loop will grow to.
#[cfg(unix)]
const MAX_MESSAGE_BYTES: usize = 64 * 1024;

/// Query `strerror_r`, growing the buffer by half on `ERANGE`.
#[cfg(unix)]
fn os_message(value: i32) -> Option<String> {
    use smallvec::SmallVec;
    use std::ffi::CStr;

    let mut buffer: SmallVec<[u8; 128]> = SmallVec::from_elem(0, 128);
    loop {
        // Safety: the pointer and length describe `buffer`, which outlives
        // the call; the XSI strerror_r writes at most `len` bytes.
        let rc = unsafe { libc::strerror_r(value, buffer.as_mut_ptr().cast(), buffer.len()) };
        if rc == 0 {
            let text = CStr::from_bytes_until_nul(&buffer).ok()?;
            return Some(text.to_string_lossy().into_owned());
        }

        // Older C libraries report through errno instead of the return value.
        let err = if rc > 0 {
            rc
        } else {
            std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
        };
        if err != libc::ERANGE || buffer.len() >= MAX_MESSAGE_BYTES {
            return None;
        }
        let grown = buffer.len() + buffer.len() / 2;
        buffer.resize(grown, 0);
    }
}

/// No C library to ask; fall back to the portable description.
#[cfg(not(unix))]
fn os_message(value: i32) -> Option<String> {
    Errc::from_raw(value).map(|kind| kind.description().to_owned())
}
