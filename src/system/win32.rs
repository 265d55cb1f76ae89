//! Win32 category and the Win32 → portable condition table.
//!
//! Classification is a pure function over `i32` and is available on every
//! target. Two steps run before the table lookup:
//!
//! 1. An `HRESULT` built by `HRESULT_FROM_WIN32` (sign bit set, facility
//!    [`FACILITY_WIN32`]) is unpacked to the Win32 code in its low 16 bits.
//! 2. The code is looked up in [`WIN32_CONDITIONS`], a table sorted by
//!    native value and searched in `O(log n)`.
//!
//! Codes missing from the table stay unclassified: their default condition
//! is the (unpacked) code under the Win32 category itself.

use super::win32_codes::*;
use crate::category::{Category, ErrorCategory};
use crate::condition::ErrorCondition;
use crate::errc::Errc;

/// Native Win32 / Winsock code → portable kind, sorted by native code.
pub static WIN32_CONDITIONS: &[(i32, Errc)] = &[
    (ERROR_SUCCESS, Errc::Success),
    (ERROR_INVALID_FUNCTION, Errc::FunctionNotSupported),
    (ERROR_FILE_NOT_FOUND, Errc::NoSuchFileOrDirectory),
    (ERROR_PATH_NOT_FOUND, Errc::NoSuchFileOrDirectory),
    (ERROR_TOO_MANY_OPEN_FILES, Errc::TooManyFilesOpen),
    (ERROR_ACCESS_DENIED, Errc::PermissionDenied),
    (ERROR_INVALID_HANDLE, Errc::InvalidArgument),
    (ERROR_NOT_ENOUGH_MEMORY, Errc::NotEnoughMemory),
    (ERROR_INVALID_ACCESS, Errc::PermissionDenied),
    (ERROR_OUTOFMEMORY, Errc::NotEnoughMemory),
    (ERROR_INVALID_DRIVE, Errc::NoSuchDevice),
    (ERROR_CURRENT_DIRECTORY, Errc::PermissionDenied),
    (ERROR_NOT_SAME_DEVICE, Errc::CrossDeviceLink),
    (ERROR_WRITE_PROTECT, Errc::PermissionDenied),
    (ERROR_BAD_UNIT, Errc::NoSuchDevice),
    (ERROR_NOT_READY, Errc::ResourceUnavailableTryAgain),
    (ERROR_SEEK, Errc::IoError),
    (ERROR_WRITE_FAULT, Errc::IoError),
    (ERROR_READ_FAULT, Errc::IoError),
    (ERROR_SHARING_VIOLATION, Errc::PermissionDenied),
    (ERROR_LOCK_VIOLATION, Errc::NoLockAvailable),
    (ERROR_HANDLE_DISK_FULL, Errc::NoSpaceOnDevice),
    (ERROR_DEV_NOT_EXIST, Errc::NoSuchDevice),
    (ERROR_FILE_EXISTS, Errc::FileExists),
    (ERROR_CANNOT_MAKE, Errc::PermissionDenied),
    (ERROR_OPEN_FAILED, Errc::IoError),
    (ERROR_BUFFER_OVERFLOW, Errc::FilenameTooLong),
    (ERROR_DISK_FULL, Errc::NoSpaceOnDevice),
    (ERROR_INVALID_NAME, Errc::InvalidArgument),
    (ERROR_NEGATIVE_SEEK, Errc::InvalidArgument),
    (ERROR_BUSY_DRIVE, Errc::DeviceOrResourceBusy),
    (ERROR_DIR_NOT_EMPTY, Errc::DirectoryNotEmpty),
    (ERROR_BUSY, Errc::DeviceOrResourceBusy),
    (ERROR_ALREADY_EXISTS, Errc::FileExists),
    (ERROR_LOCKED, Errc::NoLockAvailable),
    (ERROR_DIRECTORY, Errc::InvalidArgument),
    (ERROR_OPERATION_ABORTED, Errc::OperationCanceled),
    (ERROR_NOACCESS, Errc::PermissionDenied),
    (ERROR_CANTOPEN, Errc::IoError),
    (ERROR_CANTREAD, Errc::IoError),
    (ERROR_CANTWRITE, Errc::IoError),
    (ERROR_RETRY, Errc::ResourceUnavailableTryAgain),
    (ERROR_OPEN_FILES, Errc::DeviceOrResourceBusy),
    (ERROR_DEVICE_IN_USE, Errc::DeviceOrResourceBusy),
    (WSAEINTR, Errc::Interrupted),
    (WSAEBADF, Errc::BadFileDescriptor),
    (WSAEACCES, Errc::PermissionDenied),
    (WSAEFAULT, Errc::BadAddress),
    (WSAEINVAL, Errc::InvalidArgument),
    (WSAEMFILE, Errc::TooManyFilesOpen),
    (WSAEWOULDBLOCK, Errc::OperationWouldBlock),
    (WSAEINPROGRESS, Errc::OperationInProgress),
    (WSAEALREADY, Errc::ConnectionAlreadyInProgress),
    (WSAENOTSOCK, Errc::NotASocket),
    (WSAEDESTADDRREQ, Errc::DestinationAddressRequired),
    (WSAEMSGSIZE, Errc::MessageSize),
    (WSAEPROTOTYPE, Errc::WrongProtocolType),
    (WSAENOPROTOOPT, Errc::NoProtocolOption),
    (WSAEPROTONOSUPPORT, Errc::ProtocolNotSupported),
    (WSAEOPNOTSUPP, Errc::OperationNotSupported),
    (WSAEAFNOSUPPORT, Errc::AddressFamilyNotSupported),
    (WSAEADDRINUSE, Errc::AddressInUse),
    (WSAEADDRNOTAVAIL, Errc::AddressNotAvailable),
    (WSAENETDOWN, Errc::NetworkDown),
    (WSAENETUNREACH, Errc::NetworkUnreachable),
    (WSAENETRESET, Errc::NetworkReset),
    (WSAECONNABORTED, Errc::ConnectionAborted),
    (WSAECONNRESET, Errc::ConnectionReset),
    (WSAENOBUFS, Errc::NoBufferSpace),
    (WSAEISCONN, Errc::AlreadyConnected),
    (WSAENOTCONN, Errc::NotConnected),
    (WSAETIMEDOUT, Errc::TimedOut),
    (WSAECONNREFUSED, Errc::ConnectionRefused),
    (WSAENAMETOOLONG, Errc::FilenameTooLong),
    (WSAEHOSTUNREACH, Errc::HostUnreachable),
];

/// Unpack an `HRESULT_FROM_WIN32` value to its Win32 code.
///
/// Any other input, including success `HRESULT`s and failures from other
/// facilities, is returned unchanged.
#[inline]
pub const fn unpack_hresult(code: i32) -> i32 {
    if code < 0 && ((code >> 16) & 0x1fff) == FACILITY_WIN32 {
        code & 0xFFFF
    } else {
        code
    }
}

/// Portable kind of a Win32 code or `HRESULT_FROM_WIN32` value, if mapped.
pub fn classify(code: i32) -> Option<Errc> {
    let code = unpack_hresult(code);
    WIN32_CONDITIONS
        .binary_search_by_key(&code, |&(native, _)| native)
        .ok()
        .map(|index| WIN32_CONDITIONS[index].1)
}

/// Win32 error domain. Named `"system"` because it is the platform
/// category on Windows.
struct Win32Category {
    name: &'static str,
}

impl Category for Win32Category {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        os_message(value)
    }

    fn portable_condition(&self, value: i32) -> Option<ErrorCondition> {
        let condition = match classify(value) {
            Some(kind) => kind.condition(),
            None => ErrorCondition::new(unpack_hresult(value), win32_category()),
        };
        Some(condition)
    }
}

static WIN32: Win32Category = Win32Category { name: "system" };

/// The Win32 category. This is `system_category()` on Windows.
#[inline]
pub fn win32_category() -> ErrorCategory {
    ErrorCategory::new(&WIN32)
}

/// Message text from the OS message table, normalized.
#[cfg(windows)]
fn os_message(value: i32) -> String {
    use crate::message::{UNKNOWN_ERROR, normalize_message};

    match format_message(value) {
        Some(raw) => match normalize_message(&raw) {
            "" => UNKNOWN_ERROR.to_owned(),
            text => text.to_owned(),
        },
        None => UNKNOWN_ERROR.to_owned(),
    }
}

/// Off Windows there is no Win32 message table; describe the mapped kind.
#[cfg(not(windows))]
fn os_message(value: i32) -> String {
    classify(value)
        .map(Errc::description)
        .unwrap_or(crate::message::UNKNOWN_ERROR)
        .to_owned()
}

/// Largest buffer, in UTF-16 units, the retry loop will grow to.
#[cfg(windows)]
const MAX_MESSAGE_UNITS: usize = 64 * 1024;

/// Query `FormatMessageW`, growing the buffer by half on
/// `ERROR_INSUFFICIENT_BUFFER`.
#[cfg(windows)]
fn format_message(value: i32) -> Option<String> {
    use smallvec::SmallVec;
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::winbase::{
        FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS, FormatMessageW,
    };
    use winapi::um::winnt::{LANG_NEUTRAL, MAKELANGID, SUBLANG_DEFAULT};

    let mut buffer: SmallVec<[u16; 128]> = SmallVec::from_elem(0, 128);
    loop {
        // Safety: the pointer and length describe `buffer`, which outlives
        // the call; FormatMessageW writes at most `len` units.
        let written = unsafe {
            FormatMessageW(
                FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
                std::ptr::null(),
                value as u32,
                MAKELANGID(LANG_NEUTRAL, SUBLANG_DEFAULT) as u32,
                buffer.as_mut_ptr(),
                buffer.len() as u32,
                std::ptr::null_mut(),
            )
        };
        if written != 0 {
            return Some(String::from_utf16_lossy(&buffer[..written as usize]));
        }

        // Safety: reads thread-local error state only.
        let last = unsafe { GetLastError() };
        if last as i32 != ERROR_INSUFFICIENT_BUFFER || buffer.len() >= MAX_MESSAGE_UNITS {
            return None;
        }
        let grown = buffer.len() + buffer.len() / 2;
        buffer.resize(grown, 0);
    }
}
