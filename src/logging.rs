//! Structured log record for error codes.
//!
//! The crate carries no logger. [`ErrorLog`] borrows an [`ErrorCode`] for
//! the duration of a logging call and exposes its fields either one by one
//! (for structured sinks) or as a single line via [`ErrorLog::write_to`].
//!
//! Line format:
//!
//! ```text
//! [<category>:<value>] failed=<bool> condition=<category>:<value> message='<text>'
//! ```
//!
//! Codes holding a foreign payload render their bracket as
//! `[foreign:<category>:<value>]`. Message text longer than
//! [`MAX_FIELD_OUTPUT_LEN`] bytes is cut on a character boundary and marked
//! with [`TRUNCATION_INDICATOR`].

use crate::code::ErrorCode;
use crate::condition::ErrorCondition;
use std::borrow::Cow;
use std::fmt;

/// Maximum length of any single field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Appended to fields cut at [`MAX_FIELD_OUTPUT_LEN`].
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Log record borrowing an [`ErrorCode`].
///
/// ```rust
/// use portable_errors::{Errc, ErrorCode};
///
/// let code = ErrorCode::from(Errc::FileExists);
/// let mut line = String::new();
/// code.log_record().write_to(&mut line).unwrap();
/// assert_eq!(
///     line,
///     "[generic:17] failed=true condition=generic:17 message='File exists'"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorLog<'a> {
    code: &'a ErrorCode,
}

impl<'a> ErrorLog<'a> {
    #[inline]
    pub(crate) const fn new(code: &'a ErrorCode) -> Self {
        Self { code }
    }

    /// The code being logged.
    #[inline]
    pub const fn code(&self) -> &ErrorCode {
        self.code
    }

    /// Category name as reported by the code.
    #[inline]
    pub fn category_name(&self) -> &'static str {
        self.code.category().name()
    }

    /// `value()` of the code.
    #[inline]
    pub fn value(&self) -> i32 {
        self.code.value()
    }

    /// Failure verdict of the code.
    #[inline]
    pub fn failed(&self) -> bool {
        self.code.failed()
    }

    /// Whether the code holds a foreign payload.
    #[inline]
    pub fn is_foreign(&self) -> bool {
        self.code.is_foreign()
    }

    /// Portable classification of the code.
    #[inline]
    pub fn condition(&self) -> ErrorCondition {
        self.code.default_error_condition()
    }

    /// Untruncated message text. Truncation is left to the sink.
    #[inline]
    pub fn message(&self) -> String {
        self.code.message()
    }

    /// Write the record as one line.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let message = self.code.message();
        write!(
            f,
            "[{}] failed={} condition={} message='{}'",
            self.code,
            self.failed(),
            self.condition(),
            truncate_with_indicator(&message)
        )
    }

    /// Owned line with identity details for local debugging.
    ///
    /// Only built with the `trusted_debug` feature in debug builds, since it
    /// exposes category object identities.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        use crate::foreign::ForeignCategory as _;

        let mut output = String::new();
        let _ = self.write_to(&mut output);
        let category = self.code.category();
        output.push_str(&format!(
            " category_identity={:#x} hash={:#018x}",
            category.identity(),
            self.code.hash_value()
        ));
        if let Some(external) = self.code.to_foreign().external_category() {
            output.push_str(&format!(" foreign_category='{}'", external.name()));
        }
        output
    }
}

/// Cut `s` to [`MAX_FIELD_OUTPUT_LEN`] bytes, marking the cut.
///
/// Borrows when no cut is needed.
pub(crate) fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, ErrorCategory};
    use crate::errc::{Errc, generic_category};
    use crate::foreign::{ForeignCategory, ForeignErrorCode};

    struct VerboseCategory {
        name: &'static str,
    }

    impl Category for VerboseCategory {
        fn name(&self) -> &'static str {
            self.name
        }

        fn message(&self, value: i32) -> String {
            "x".repeat(value as usize)
        }
    }

    static VERBOSE: VerboseCategory = VerboseCategory { name: "verbose" };

    struct LibCategory {
        name: &'static str,
    }

    impl ForeignCategory for LibCategory {
        fn name(&self) -> &'static str {
            self.name
        }

        fn message(&self, _value: i32) -> String {
            "lib failure".to_owned()
        }
    }

    static LIB: LibCategory = LibCategory { name: "lib" };

    fn line(code: &ErrorCode) -> String {
        let mut out = String::new();
        code.log_record().write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn native_line_format() {
        let code = ErrorCode::new(13, generic_category());
        assert_eq!(
            line(&code),
            "[generic:13] failed=true condition=generic:13 message='Permission denied'"
        );
    }

    #[test]
    fn foreign_line_is_prefixed() {
        let code = ErrorCode::from_foreign(ForeignErrorCode::new(4, &LIB));
        let out = line(&code);
        assert!(out.starts_with("[foreign:lib:4] failed=true condition=interop:"));
        assert!(out.ends_with("message='lib failure'"));
    }

    #[test]
    fn accessors_mirror_code() {
        let code = ErrorCode::from(Errc::TimedOut);
        code.with_log_record(|log| {
            assert_eq!(log.category_name(), "generic");
            assert_eq!(log.value(), Errc::TimedOut.value());
            assert!(log.failed());
            assert!(!log.is_foreign());
            assert_eq!(log.condition(), Errc::TimedOut.condition());
            assert_eq!(log.message(), "Connection timed out");
            assert_eq!(*log.code(), code);
        });
    }

    #[test]
    fn long_message_is_truncated_in_line() {
        let code = ErrorCode::new(5000, ErrorCategory::new(&VERBOSE));
        let out = line(&code);
        assert!(out.ends_with("...[TRUNCATED]'"));
        assert!(out.len() < 5000);
    }

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 10);
        let truncated = truncate_with_indicator(&s);
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let truncated = truncate_with_indicator("short string");
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, "short string");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert!(!truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn truncate_utf8_boundary() {
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    #[test]
    fn trusted_debug_adds_identity() {
        let code = ErrorCode::from_foreign(ForeignErrorCode::new(1, &LIB));
        let out = code.log_record().format_for_trusted_debug();
        assert!(out.contains("category_identity=0x"));
        assert!(out.contains("foreign_category='lib'"));
    }
}
