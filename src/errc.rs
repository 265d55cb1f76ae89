//! Portable condition registry and the generic category.
//!
//! [`Errc`] is the fixed vocabulary callers test against when they care
//! about the *kind* of failure ("permission denied", "file exists") and
//! not which subsystem reported it. Every platform category maps its
//! native codes onto these kinds through
//! [`Category::portable_condition`].
//!
//! # Numbering
//!
//! On Unix targets each value is the C library's `E*` constant, so an
//! errno is already a portable condition. Kinds the C library does not
//! define are numbered past its errno range. Every other target uses the
//! Linux errno numbering. Two pairs of kinds are exposed as aliases:
//!
//! - [`Errc::OperationWouldBlock`] is [`Errc::ResourceUnavailableTryAgain`] (`EAGAIN`)
//! - [`Errc::OperationNotSupported`] is [`Errc::NotSupported`] (`ENOTSUP`)
//!
//! # Zero-Allocation Guarantee
//!
//! Descriptions are `&'static str`. The generic category overrides
//! [`Category::write_message`], so bounded-buffer rendering of generic
//! codes never touches the heap.

use crate::category::{Category, ErrorCategory};
use crate::code::{ErrorCode, ErrorCodeEnum};
use crate::condition::{ErrorCondition, ErrorConditionEnum};
use crate::message::UNKNOWN_ERROR;
use std::fmt;

/// Errno numbers of the build target's C library.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris",
))]
mod errno {
    pub(super) const SUCCESS: i32 = 0;

    pub(super) use libc::{
        E2BIG, EACCES, EADDRINUSE, EADDRNOTAVAIL, EAFNOSUPPORT, EAGAIN, EALREADY,
        EBADF, EBADMSG, EBUSY, ECANCELED, ECHILD, ECONNABORTED, ECONNREFUSED,
        ECONNRESET, EDEADLK, EDESTADDRREQ, EDOM, EEXIST, EFAULT, EFBIG,
        EHOSTUNREACH, EIDRM, EILSEQ, EINPROGRESS, EINTR, EINVAL, EIO, EISCONN,
        EISDIR, ELOOP, EMFILE, EMLINK, EMSGSIZE, ENAMETOOLONG, ENETDOWN, ENETRESET,
        ENETUNREACH, ENFILE, ENOBUFS, ENODEV, ENOENT, ENOEXEC, ENOLCK, ENOMEM,
        ENOMSG, ENOPROTOOPT, ENOSPC, ENOSYS, ENOTCONN, ENOTDIR, ENOTEMPTY,
        ENOTRECOVERABLE, ENOTSOCK, ENOTSUP, ENOTTY, ENXIO, EOVERFLOW, EOWNERDEAD,
        EPERM, EPIPE, EPROTO, EPROTONOSUPPORT, EPROTOTYPE, ERANGE, EROFS, ESPIPE,
        ESRCH, ETIMEDOUT, ETXTBSY, EXDEV,
    };

    #[cfg(not(any(target_os = "freebsd", target_os = "dragonfly", target_os = "openbsd")))]
    pub(super) use libc::{ENODATA, ENOSR, ENOSTR, ETIME};

    // STREAMS errors are absent from these C libraries.
    #[cfg(any(target_os = "freebsd", target_os = "dragonfly", target_os = "openbsd"))]
    mod streams {
        pub(crate) const ENODATA: i32 = 9919;
        pub(crate) const ENOSR: i32 = 9920;
        pub(crate) const ENOSTR: i32 = 9921;
        pub(crate) const ETIME: i32 = 9935;
    }
    #[cfg(any(target_os = "freebsd", target_os = "dragonfly", target_os = "openbsd"))]
    pub(super) use streams::{ENODATA, ENOSR, ENOSTR, ETIME};

    #[cfg(not(target_os = "openbsd"))]
    pub(super) use libc::ENOLINK;
    #[cfg(target_os = "openbsd")]
    pub(super) const ENOLINK: i32 = 9924;
}

/// Linux errno numbers, for targets without a C library errno table.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_vendor = "apple",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris",
)))]
mod errno {
    pub(super) const SUCCESS: i32 = 0;
    pub(super) const EPERM: i32 = 1;
    pub(super) const ENOENT: i32 = 2;
    pub(super) const ESRCH: i32 = 3;
    pub(super) const EINTR: i32 = 4;
    pub(super) const EIO: i32 = 5;
    pub(super) const ENXIO: i32 = 6;
    pub(super) const E2BIG: i32 = 7;
    pub(super) const ENOEXEC: i32 = 8;
    pub(super) const EBADF: i32 = 9;
    pub(super) const ECHILD: i32 = 10;
    pub(super) const EAGAIN: i32 = 11;
    pub(super) const ENOMEM: i32 = 12;
    pub(super) const EACCES: i32 = 13;
    pub(super) const EFAULT: i32 = 14;
    pub(super) const EBUSY: i32 = 16;
    pub(super) const EEXIST: i32 = 17;
    pub(super) const EXDEV: i32 = 18;
    pub(super) const ENODEV: i32 = 19;
    pub(super) const ENOTDIR: i32 = 20;
    pub(super) const EISDIR: i32 = 21;
    pub(super) const EINVAL: i32 = 22;
    pub(super) const ENFILE: i32 = 23;
    pub(super) const EMFILE: i32 = 24;
    pub(super) const ENOTTY: i32 = 25;
    pub(super) const ETXTBSY: i32 = 26;
    pub(super) const EFBIG: i32 = 27;
    pub(super) const ENOSPC: i32 = 28;
    pub(super) const ESPIPE: i32 = 29;
    pub(super) const EROFS: i32 = 30;
    pub(super) const EMLINK: i32 = 31;
    pub(super) const EPIPE: i32 = 32;
    pub(super) const EDOM: i32 = 33;
    pub(super) const ERANGE: i32 = 34;
    pub(super) const EDEADLK: i32 = 35;
    pub(super) const ENAMETOOLONG: i32 = 36;
    pub(super) const ENOLCK: i32 = 37;
    pub(super) const ENOSYS: i32 = 38;
    pub(super) const ENOTEMPTY: i32 = 39;
    pub(super) const ELOOP: i32 = 40;
    pub(super) const ENOMSG: i32 = 42;
    pub(super) const EIDRM: i32 = 43;
    pub(super) const ENOSTR: i32 = 60;
    pub(super) const ENODATA: i32 = 61;
    pub(super) const ETIME: i32 = 62;
    pub(super) const ENOSR: i32 = 63;
    pub(super) const ENOLINK: i32 = 67;
    pub(super) const EPROTO: i32 = 71;
    pub(super) const EBADMSG: i32 = 74;
    pub(super) const EOVERFLOW: i32 = 75;
    pub(super) const EILSEQ: i32 = 84;
    pub(super) const ENOTSOCK: i32 = 88;
    pub(super) const EDESTADDRREQ: i32 = 89;
    pub(super) const EMSGSIZE: i32 = 90;
    pub(super) const EPROTOTYPE: i32 = 91;
    pub(super) const ENOPROTOOPT: i32 = 92;
    pub(super) const EPROTONOSUPPORT: i32 = 93;
    pub(super) const ENOTSUP: i32 = 95;
    pub(super) const EAFNOSUPPORT: i32 = 97;
    pub(super) const EADDRINUSE: i32 = 98;
    pub(super) const EADDRNOTAVAIL: i32 = 99;
    pub(super) const ENETDOWN: i32 = 100;
    pub(super) const ENETUNREACH: i32 = 101;
    pub(super) const ENETRESET: i32 = 102;
    pub(super) const ECONNABORTED: i32 = 103;
    pub(super) const ECONNRESET: i32 = 104;
    pub(super) const ENOBUFS: i32 = 105;
    pub(super) const EISCONN: i32 = 106;
    pub(super) const ENOTCONN: i32 = 107;
    pub(super) const ETIMEDOUT: i32 = 110;
    pub(super) const ECONNREFUSED: i32 = 111;
    pub(super) const EHOSTUNREACH: i32 = 113;
    pub(super) const EALREADY: i32 = 114;
    pub(super) const EINPROGRESS: i32 = 115;
    pub(super) const ECANCELED: i32 = 125;
    pub(super) const EOWNERDEAD: i32 = 130;
    pub(super) const ENOTRECOVERABLE: i32 = 131;
}

/// Expands the registry table into the enum, its lookup and its descriptions.
macro_rules! errc_table {
    ($( $(#[$meta:meta])* $name:ident = ($errno:ident, $text:literal) ),+ $(,)?) => {
        /// Portable error condition kinds.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(i32)]
        #[non_exhaustive]
        pub enum Errc {
            $( $(#[$meta])* $name = errno::$errno, )+
        }

        impl Errc {
            /// Every registered kind, in declaration order.
            pub const ALL: &'static [Errc] = &[ $( Errc::$name, )+ ];

            /// Look a kind up by its numeric value.
            pub const fn from_raw(value: i32) -> Option<Errc> {
                match value {
                    $( errno::$errno => Some(Errc::$name), )+
                    _ => None,
                }
            }

            /// Static description, in the style of `strerror`.
            pub const fn description(self) -> &'static str {
                match self {
                    $( Errc::$name => $text, )+
                }
            }
        }
    };
}

errc_table! {
    /// No error.
    Success = (SUCCESS, "Success"),
    /// `EPERM`
    OperationNotPermitted = (EPERM, "Operation not permitted"),
    /// `ENOENT`
    NoSuchFileOrDirectory = (ENOENT, "No such file or directory"),
    /// `ESRCH`
    NoSuchProcess = (ESRCH, "No such process"),
    /// `EINTR`
    Interrupted = (EINTR, "Interrupted system call"),
    /// `EIO`
    IoError = (EIO, "Input/output error"),
    /// `ENXIO`
    NoSuchDeviceOrAddress = (ENXIO, "No such device or address"),
    /// `E2BIG`
    ArgumentListTooLong = (E2BIG, "Argument list too long"),
    /// `ENOEXEC`
    ExecutableFormatError = (ENOEXEC, "Exec format error"),
    /// `EBADF`
    BadFileDescriptor = (EBADF, "Bad file descriptor"),
    /// `ECHILD`
    NoChildProcess = (ECHILD, "No child processes"),
    /// `EAGAIN` / `EWOULDBLOCK`
    ResourceUnavailableTryAgain = (EAGAIN, "Resource temporarily unavailable"),
    /// `ENOMEM`
    NotEnoughMemory = (ENOMEM, "Cannot allocate memory"),
    /// `EACCES`
    PermissionDenied = (EACCES, "Permission denied"),
    /// `EFAULT`
    BadAddress = (EFAULT, "Bad address"),
    /// `EBUSY`
    DeviceOrResourceBusy = (EBUSY, "Device or resource busy"),
    /// `EEXIST`
    FileExists = (EEXIST, "File exists"),
    /// `EXDEV`
    CrossDeviceLink = (EXDEV, "Invalid cross-device link"),
    /// `ENODEV`
    NoSuchDevice = (ENODEV, "No such device"),
    /// `ENOTDIR`
    NotADirectory = (ENOTDIR, "Not a directory"),
    /// `EISDIR`
    IsADirectory = (EISDIR, "Is a directory"),
    /// `EINVAL`
    InvalidArgument = (EINVAL, "Invalid argument"),
    /// `ENFILE`
    TooManyFilesOpenInSystem = (ENFILE, "Too many open files in system"),
    /// `EMFILE`
    TooManyFilesOpen = (EMFILE, "Too many open files"),
    /// `ENOTTY`
    InappropriateIoControlOperation = (ENOTTY, "Inappropriate ioctl for device"),
    /// `ETXTBSY`
    TextFileBusy = (ETXTBSY, "Text file busy"),
    /// `EFBIG`
    FileTooLarge = (EFBIG, "File too large"),
    /// `ENOSPC`
    NoSpaceOnDevice = (ENOSPC, "No space left on device"),
    /// `ESPIPE`
    InvalidSeek = (ESPIPE, "Illegal seek"),
    /// `EROFS`
    ReadOnlyFileSystem = (EROFS, "Read-only file system"),
    /// `EMLINK`
    TooManyLinks = (EMLINK, "Too many links"),
    /// `EPIPE`
    BrokenPipe = (EPIPE, "Broken pipe"),
    /// `EDOM`
    ArgumentOutOfDomain = (EDOM, "Numerical argument out of domain"),
    /// `ERANGE`
    ResultOutOfRange = (ERANGE, "Numerical result out of range"),
    /// `EDEADLK`
    ResourceDeadlockWouldOccur = (EDEADLK, "Resource deadlock avoided"),
    /// `ENAMETOOLONG`
    FilenameTooLong = (ENAMETOOLONG, "File name too long"),
    /// `ENOLCK`
    NoLockAvailable = (ENOLCK, "No locks available"),
    /// `ENOSYS`
    FunctionNotSupported = (ENOSYS, "Function not implemented"),
    /// `ENOTEMPTY`
    DirectoryNotEmpty = (ENOTEMPTY, "Directory not empty"),
    /// `ELOOP`
    TooManySymbolicLinkLevels = (ELOOP, "Too many levels of symbolic links"),
    /// `ENOMSG`
    NoMessage = (ENOMSG, "No message of desired type"),
    /// `EIDRM`
    IdentifierRemoved = (EIDRM, "Identifier removed"),
    /// `ENOSTR`
    NotAStream = (ENOSTR, "Device not a stream"),
    /// `ENODATA`
    NoMessageAvailable = (ENODATA, "No data available"),
    /// `ETIME`
    StreamTimeout = (ETIME, "Timer expired"),
    /// `ENOSR`
    NoStreamResources = (ENOSR, "Out of streams resources"),
    /// `ENOLINK`
    NoLink = (ENOLINK, "Link has been severed"),
    /// `EPROTO`
    ProtocolError = (EPROTO, "Protocol error"),
    /// `EBADMSG`
    BadMessage = (EBADMSG, "Bad message"),
    /// `EOVERFLOW`
    ValueTooLarge = (EOVERFLOW, "Value too large for defined data type"),
    /// `EILSEQ`
    IllegalByteSequence = (EILSEQ, "Invalid or incomplete multibyte or wide character"),
    /// `ENOTSOCK`
    NotASocket = (ENOTSOCK, "Socket operation on non-socket"),
    /// `EDESTADDRREQ`
    DestinationAddressRequired = (EDESTADDRREQ, "Destination address required"),
    /// `EMSGSIZE`
    MessageSize = (EMSGSIZE, "Message too long"),
    /// `EPROTOTYPE`
    WrongProtocolType = (EPROTOTYPE, "Protocol wrong type for socket"),
    /// `ENOPROTOOPT`
    NoProtocolOption = (ENOPROTOOPT, "Protocol not available"),
    /// `EPROTONOSUPPORT`
    ProtocolNotSupported = (EPROTONOSUPPORT, "Protocol not supported"),
    /// `ENOTSUP` / `EOPNOTSUPP`
    NotSupported = (ENOTSUP, "Operation not supported"),
    /// `EAFNOSUPPORT`
    AddressFamilyNotSupported = (EAFNOSUPPORT, "Address family not supported by protocol"),
    /// `EADDRINUSE`
    AddressInUse = (EADDRINUSE, "Address already in use"),
    /// `EADDRNOTAVAIL`
    AddressNotAvailable = (EADDRNOTAVAIL, "Cannot assign requested address"),
    /// `ENETDOWN`
    NetworkDown = (ENETDOWN, "Network is down"),
    /// `ENETUNREACH`
    NetworkUnreachable = (ENETUNREACH, "Network is unreachable"),
    /// `ENETRESET`
    NetworkReset = (ENETRESET, "Network dropped connection on reset"),
    /// `ECONNABORTED`
    ConnectionAborted = (ECONNABORTED, "Software caused connection abort"),
    /// `ECONNRESET`
    ConnectionReset = (ECONNRESET, "Connection reset by peer"),
    /// `ENOBUFS`
    NoBufferSpace = (ENOBUFS, "No buffer space available"),
    /// `EISCONN`
    AlreadyConnected = (EISCONN, "Transport endpoint is already connected"),
    /// `ENOTCONN`
    NotConnected = (ENOTCONN, "Transport endpoint is not connected"),
    /// `ETIMEDOUT`
    TimedOut = (ETIMEDOUT, "Connection timed out"),
    /// `ECONNREFUSED`
    ConnectionRefused = (ECONNREFUSED, "Connection refused"),
    /// `EHOSTUNREACH`
    HostUnreachable = (EHOSTUNREACH, "No route to host"),
    /// `EALREADY`
    ConnectionAlreadyInProgress = (EALREADY, "Operation already in progress"),
    /// `EINPROGRESS`
    OperationInProgress = (EINPROGRESS, "Operation now in progress"),
    /// `ECANCELED`
    OperationCanceled = (ECANCELED, "Operation canceled"),
    /// `EOWNERDEAD`
    OwnerDead = (EOWNERDEAD, "Owner died"),
    /// `ENOTRECOVERABLE`
    StateNotRecoverable = (ENOTRECOVERABLE, "State not recoverable"),
}

#[allow(non_upper_case_globals)]
impl Errc {
    /// Alias of [`Errc::ResourceUnavailableTryAgain`].
    pub const OperationWouldBlock: Errc = Errc::ResourceUnavailableTryAgain;

    /// Alias of [`Errc::NotSupported`].
    pub const OperationNotSupported: Errc = Errc::NotSupported;
}

impl Errc {
    /// Numeric value of this kind.
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// This kind as a condition in the generic category.
    #[inline]
    pub fn condition(self) -> ErrorCondition {
        ErrorCondition::new(self.value(), generic_category())
    }
}

impl fmt::Display for Errc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error returned when a number is not a registered [`Errc`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownErrc {
    /// The rejected value.
    pub value: i32,
}

impl fmt::Display for UnknownErrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a registered portable error condition", self.value)
    }
}

impl std::error::Error for UnknownErrc {}

impl TryFrom<i32> for Errc {
    type Error = UnknownErrc;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Errc::from_raw(value).ok_or(UnknownErrc { value })
    }
}

impl ErrorConditionEnum for Errc {
    #[inline]
    fn make_error_condition(self) -> ErrorCondition {
        self.condition()
    }
}

impl ErrorCodeEnum for Errc {
    #[inline]
    fn make_error_code(self) -> ErrorCode {
        ErrorCode::new(self.value(), generic_category())
    }
}

// ============================================================================
// Generic Category
// ============================================================================

/// The registry's own category: values are [`Errc`] numbers.
struct GenericCategory {
    name: &'static str,
}

impl Category for GenericCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        generic_description(value).to_owned()
    }

    fn write_message(&self, value: i32, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(generic_description(value))
    }
}

#[inline]
fn generic_description(value: i32) -> &'static str {
    Errc::from_raw(value).map_or(UNKNOWN_ERROR, Errc::description)
}

static GENERIC: GenericCategory = GenericCategory { name: "generic" };

/// The category of portable conditions.
#[inline]
pub fn generic_category() -> ErrorCategory {
    ErrorCategory::new(&GENERIC)
}
