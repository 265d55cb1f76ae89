//! Conversions between [`ErrorCode`] and [`std::io::Error`].
//!
//! - An `io::Error` that carries a raw OS error becomes
//!   `(raw, system_category())`.
//! - An `io::Error` built by this module from an `ErrorCode` yields that
//!   exact code back.
//! - Anything else is classified by its [`io::ErrorKind`] into an [`Errc`]
//!   under the generic category. Kinds without a counterpart become
//!   [`Errc::IoError`].
//!
//! Going the other way, system-category codes become
//! `io::Error::from_raw_os_error`. Other codes are wrapped as the payload of
//! an `io::Error` whose kind follows the code's portable condition.

use crate::code::ErrorCode;
use crate::errc::{Errc, generic_category};
use crate::system::system_category;
use std::io;

/// Portable kind for an `io::ErrorKind`.
pub const fn errc_for_kind(kind: io::ErrorKind) -> Errc {
    match kind {
        io::ErrorKind::NotFound => Errc::NoSuchFileOrDirectory,
        io::ErrorKind::PermissionDenied => Errc::PermissionDenied,
        io::ErrorKind::ConnectionRefused => Errc::ConnectionRefused,
        io::ErrorKind::ConnectionReset => Errc::ConnectionReset,
        io::ErrorKind::HostUnreachable => Errc::HostUnreachable,
        io::ErrorKind::NetworkUnreachable => Errc::NetworkUnreachable,
        io::ErrorKind::ConnectionAborted => Errc::ConnectionAborted,
        io::ErrorKind::NotConnected => Errc::NotConnected,
        io::ErrorKind::AddrInUse => Errc::AddressInUse,
        io::ErrorKind::AddrNotAvailable => Errc::AddressNotAvailable,
        io::ErrorKind::NetworkDown => Errc::NetworkDown,
        io::ErrorKind::BrokenPipe => Errc::BrokenPipe,
        io::ErrorKind::AlreadyExists => Errc::FileExists,
        io::ErrorKind::WouldBlock => Errc::OperationWouldBlock,
        io::ErrorKind::NotADirectory => Errc::NotADirectory,
        io::ErrorKind::IsADirectory => Errc::IsADirectory,
        io::ErrorKind::DirectoryNotEmpty => Errc::DirectoryNotEmpty,
        io::ErrorKind::ReadOnlyFilesystem => Errc::ReadOnlyFileSystem,
        io::ErrorKind::StorageFull => Errc::NoSpaceOnDevice,
        io::ErrorKind::NotSeekable => Errc::InvalidSeek,
        io::ErrorKind::FileTooLarge => Errc::FileTooLarge,
        io::ErrorKind::ResourceBusy => Errc::DeviceOrResourceBusy,
        io::ErrorKind::ExecutableFileBusy => Errc::TextFileBusy,
        io::ErrorKind::Deadlock => Errc::ResourceDeadlockWouldOccur,
        io::ErrorKind::TooManyLinks => Errc::TooManyLinks,
        io::ErrorKind::ArgumentListTooLong => Errc::ArgumentListTooLong,
        io::ErrorKind::InvalidInput => Errc::InvalidArgument,
        io::ErrorKind::InvalidData => Errc::BadMessage,
        io::ErrorKind::TimedOut => Errc::TimedOut,
        io::ErrorKind::Interrupted => Errc::Interrupted,
        io::ErrorKind::Unsupported => Errc::NotSupported,
        io::ErrorKind::OutOfMemory => Errc::NotEnoughMemory,
        _ => Errc::IoError,
    }
}

/// `io::ErrorKind` for a portable kind. Kinds without a counterpart map to
/// [`io::ErrorKind::Other`].
pub const fn kind_for_errc(kind: Errc) -> io::ErrorKind {
    match kind {
        Errc::NoSuchFileOrDirectory => io::ErrorKind::NotFound,
        Errc::PermissionDenied | Errc::OperationNotPermitted => io::ErrorKind::PermissionDenied,
        Errc::ConnectionRefused => io::ErrorKind::ConnectionRefused,
        Errc::ConnectionReset => io::ErrorKind::ConnectionReset,
        Errc::HostUnreachable => io::ErrorKind::HostUnreachable,
        Errc::NetworkUnreachable => io::ErrorKind::NetworkUnreachable,
        Errc::ConnectionAborted => io::ErrorKind::ConnectionAborted,
        Errc::NotConnected => io::ErrorKind::NotConnected,
        Errc::AddressInUse => io::ErrorKind::AddrInUse,
        Errc::AddressNotAvailable => io::ErrorKind::AddrNotAvailable,
        Errc::NetworkDown => io::ErrorKind::NetworkDown,
        Errc::BrokenPipe => io::ErrorKind::BrokenPipe,
        Errc::FileExists => io::ErrorKind::AlreadyExists,
        Errc::ResourceUnavailableTryAgain => io::ErrorKind::WouldBlock,
        Errc::NotADirectory => io::ErrorKind::NotADirectory,
        Errc::IsADirectory => io::ErrorKind::IsADirectory,
        Errc::DirectoryNotEmpty => io::ErrorKind::DirectoryNotEmpty,
        Errc::ReadOnlyFileSystem => io::ErrorKind::ReadOnlyFilesystem,
        Errc::NoSpaceOnDevice => io::ErrorKind::StorageFull,
        Errc::InvalidSeek => io::ErrorKind::NotSeekable,
        Errc::FileTooLarge => io::ErrorKind::FileTooLarge,
        Errc::DeviceOrResourceBusy => io::ErrorKind::ResourceBusy,
        Errc::TextFileBusy => io::ErrorKind::ExecutableFileBusy,
        Errc::ResourceDeadlockWouldOccur => io::ErrorKind::Deadlock,
        Errc::TooManyLinks => io::ErrorKind::TooManyLinks,
        Errc::ArgumentListTooLong => io::ErrorKind::ArgumentListTooLong,
        Errc::InvalidArgument => io::ErrorKind::InvalidInput,
        Errc::BadMessage => io::ErrorKind::InvalidData,
        Errc::TimedOut => io::ErrorKind::TimedOut,
        Errc::Interrupted => io::ErrorKind::Interrupted,
        Errc::NotSupported | Errc::FunctionNotSupported => io::ErrorKind::Unsupported,
        Errc::NotEnoughMemory => io::ErrorKind::OutOfMemory,
        _ => io::ErrorKind::Other,
    }
}

impl ErrorCode {
    /// Classify an `io::Error`. See the module docs for the rules.
    pub fn from_io_error(error: &io::Error) -> Self {
        if let Some(raw) = error.raw_os_error() {
            return Self::new(raw, system_category());
        }
        if let Some(code) = error.get_ref().and_then(|inner| inner.downcast_ref::<ErrorCode>()) {
            return *code;
        }
        Self::new(errc_for_kind(error.kind()).value(), generic_category())
    }

    /// The `io::ErrorKind` matching this code's portable condition.
    pub fn io_error_kind(&self) -> io::ErrorKind {
        let condition = self.default_error_condition();
        if condition.category() != generic_category() {
            return io::ErrorKind::Other;
        }
        match Errc::from_raw(condition.value()) {
            Some(kind) => kind_for_errc(kind),
            None => io::ErrorKind::Other,
        }
    }
}

impl From<ErrorCode> for io::Error {
    fn from(code: ErrorCode) -> Self {
        if !code.is_foreign() && code.category() == system_category() {
            return io::Error::from_raw_os_error(code.value());
        }
        io::Error::new(code.io_error_kind(), code)
    }
}
