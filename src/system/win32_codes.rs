//! Win32 and Winsock error numbers used by the Win32 mapping table.
//!
//! Values are the published constants from `winerror.h`. They are repeated
//! here as `i32` so the table compiles on every target; Windows builds
//! check them against `winapi::shared::winerror`.

#![allow(missing_docs)]

pub const ERROR_SUCCESS: i32 = 0;
pub const ERROR_INVALID_FUNCTION: i32 = 1;
pub const ERROR_FILE_NOT_FOUND: i32 = 2;
pub const ERROR_PATH_NOT_FOUND: i32 = 3;
pub const ERROR_TOO_MANY_OPEN_FILES: i32 = 4;
pub const ERROR_ACCESS_DENIED: i32 = 5;
pub const ERROR_INVALID_HANDLE: i32 = 6;
pub const ERROR_NOT_ENOUGH_MEMORY: i32 = 8;
pub const ERROR_INVALID_ACCESS: i32 = 12;
pub const ERROR_OUTOFMEMORY: i32 = 14;
pub const ERROR_INVALID_DRIVE: i32 = 15;
pub const ERROR_CURRENT_DIRECTORY: i32 = 16;
pub const ERROR_NOT_SAME_DEVICE: i32 = 17;
pub const ERROR_WRITE_PROTECT: i32 = 19;
pub const ERROR_BAD_UNIT: i32 = 20;
pub const ERROR_NOT_READY: i32 = 21;
pub const ERROR_SEEK: i32 = 25;
pub const ERROR_WRITE_FAULT: i32 = 29;
pub const ERROR_READ_FAULT: i32 = 30;
pub const ERROR_SHARING_VIOLATION: i32 = 32;
pub const ERROR_LOCK_VIOLATION: i32 = 33;
pub const ERROR_HANDLE_DISK_FULL: i32 = 39;
pub const ERROR_DEV_NOT_EXIST: i32 = 55;
pub const ERROR_FILE_EXISTS: i32 = 80;
pub const ERROR_CANNOT_MAKE: i32 = 82;
pub const ERROR_OPEN_FAILED: i32 = 110;
pub const ERROR_BUFFER_OVERFLOW: i32 = 111;
pub const ERROR_DISK_FULL: i32 = 112;
pub const ERROR_INSUFFICIENT_BUFFER: i32 = 122;
pub const ERROR_INVALID_NAME: i32 = 123;
pub const ERROR_NEGATIVE_SEEK: i32 = 131;
pub const ERROR_BUSY_DRIVE: i32 = 142;
pub const ERROR_DIR_NOT_EMPTY: i32 = 145;
pub const ERROR_BUSY: i32 = 170;
pub const ERROR_ALREADY_EXISTS: i32 = 183;
pub const ERROR_LOCKED: i32 = 212;
pub const ERROR_DIRECTORY: i32 = 267;
pub const ERROR_OPERATION_ABORTED: i32 = 995;
pub const ERROR_NOACCESS: i32 = 998;
pub const ERROR_CANTOPEN: i32 = 1011;
pub const ERROR_CANTREAD: i32 = 1012;
pub const ERROR_CANTWRITE: i32 = 1013;
pub const ERROR_RETRY: i32 = 1237;
pub const ERROR_OPEN_FILES: i32 = 2401;
pub const ERROR_DEVICE_IN_USE: i32 = 2404;

pub const WSAEINTR: i32 = 10004;
pub const WSAEBADF: i32 = 10009;
pub const WSAEACCES: i32 = 10013;
pub const WSAEFAULT: i32 = 10014;
pub const WSAEINVAL: i32 = 10022;
pub const WSAEMFILE: i32 = 10024;
pub const WSAEWOULDBLOCK: i32 = 10035;
pub const WSAEINPROGRESS: i32 = 10036;
pub const WSAEALREADY: i32 = 10037;
pub const WSAENOTSOCK: i32 = 10038;
pub const WSAEDESTADDRREQ: i32 = 10039;
pub const WSAEMSGSIZE: i32 = 10040;
pub const WSAEPROTOTYPE: i32 = 10041;
pub const WSAENOPROTOOPT: i32 = 10042;
pub const WSAEPROTONOSUPPORT: i32 = 10043;
pub const WSAEOPNOTSUPP: i32 = 10045;
pub const WSAEAFNOSUPPORT: i32 = 10047;
pub const WSAEADDRINUSE: i32 = 10048;
pub const WSAEADDRNOTAVAIL: i32 = 10049;
pub const WSAENETDOWN: i32 = 10050;
pub const WSAENETUNREACH: i32 = 10051;
pub const WSAENETRESET: i32 = 10052;
pub const WSAECONNABORTED: i32 = 10053;
pub const WSAECONNRESET: i32 = 10054;
pub const WSAENOBUFS: i32 = 10055;
pub const WSAEISCONN: i32 = 10056;
pub const WSAENOTCONN: i32 = 10057;
pub const WSAETIMEDOUT: i32 = 10060;
pub const WSAECONNREFUSED: i32 = 10061;
pub const WSAENAMETOOLONG: i32 = 10063;
pub const WSAEHOSTUNREACH: i32 = 10065;

/// Facility number of `HRESULT_FROM_WIN32` values.
pub const FACILITY_WIN32: i32 = 7;
