//! Registration macros for domain enums.
//!
//! A domain with its own category usually also has a fieldless enum of its
//! codes. These macros implement [`ErrorCodeEnum`](crate::ErrorCodeEnum) or
//! [`ErrorConditionEnum`](crate::ErrorConditionEnum) for such an enum, binding
//! it to the category accessor, so values convert with `.into()`.
//!
//! ```rust
//! use portable_errors::{Category, ErrorCategory, ErrorCode, error_code_enum};
//!
//! #[derive(Debug, Clone, Copy)]
//! #[repr(i32)]
//! enum ParseError {
//!     UnexpectedEof = 1,
//!     BadToken = 2,
//! }
//!
//! struct ParseCategory {
//!     name: &'static str,
//! }
//!
//! impl Category for ParseCategory {
//!     fn name(&self) -> &'static str {
//!         self.name
//!     }
//!
//!     fn message(&self, value: i32) -> String {
//!         match value {
//!             1 => "unexpected end of input".into(),
//!             2 => "bad token".into(),
//!             _ => "unknown parse error".into(),
//!         }
//!     }
//! }
//!
//! static PARSE: ParseCategory = ParseCategory { name: "parse" };
//!
//! fn parse_category() -> ErrorCategory {
//!     ErrorCategory::new(&PARSE)
//! }
//!
//! error_code_enum!(ParseError => parse_category());
//!
//! let code: ErrorCode = ParseError::BadToken.into();
//! assert_eq!(code.value(), 2);
//! assert_eq!(code.message(), "bad token");
//! ```

/// Implement [`ErrorCodeEnum`](crate::ErrorCodeEnum) for a fieldless enum.
///
/// The enum's discriminant becomes the code value and `$category` is
/// evaluated on each conversion.
#[macro_export]
macro_rules! error_code_enum {
    ($($ty:ty => $category:expr),+ $(,)?) => {
        $(
            impl $crate::ErrorCodeEnum for $ty {
                #[inline]
                fn make_error_code(self) -> $crate::ErrorCode {
                    $crate::ErrorCode::new(self as i32, $category)
                }
            }
        )+
    };
}

/// Implement [`ErrorConditionEnum`](crate::ErrorConditionEnum) for a
/// fieldless enum.
#[macro_export]
macro_rules! error_condition_enum {
    ($($ty:ty => $category:expr),+ $(,)?) => {
        $(
            impl $crate::ErrorConditionEnum for $ty {
                #[inline]
                fn make_error_condition(self) -> $crate::ErrorCondition {
                    $crate::ErrorCondition::new(self as i32, $category)
                }
            }
        )+
    };
}
