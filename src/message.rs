//! Message rendering helpers shared by every category.
//!
//! Two concerns live here:
//!
//! - **Bounded rendering**: writing a message into a caller-supplied byte
//!   buffer without allocating, truncating on a UTF-8 character boundary
//!   and always leaving a NUL terminator after the text.
//! - **OS message normalization**: operating-system message catalogs end
//!   their text with `".\r\n"` (Windows) or similar. Callers comparing
//!   messages across platforms need the bare sentence.

use std::fmt;

/// Placeholder returned when a category has no text for a value.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Strip trailing carriage returns / line feeds, then a single trailing period.
///
/// ```rust
/// use portable_errors::message::normalize_message;
///
/// assert_eq!(normalize_message("Access is denied.\r\n"), "Access is denied");
/// assert_eq!(normalize_message("Wait..."), "Wait..");
/// ```
#[inline]
pub fn normalize_message(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(['\r', '\n']);
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}

/// Render text into `buffer` through a formatting closure.
///
/// The returned `&str` borrows from `buffer`. For any non-empty buffer the
/// byte immediately after the returned text is `0`, so the buffer can be
/// handed to C code as a terminated string. An empty buffer yields `""`
/// and is left untouched.
///
/// Formatting errors raised by `render` are swallowed: whatever was
/// written before the error is returned. This function never fails.
pub fn render_into<'b, F>(buffer: &'b mut [u8], render: F) -> &'b str
where
    F: FnOnce(&mut dyn fmt::Write) -> fmt::Result,
{
    let mut writer = BoundedWriter::new(buffer);
    let _ = render(&mut writer);
    writer.finish()
}

/// `fmt::Write` sink over a fixed byte slice.
///
/// One byte is always reserved for the terminator. Once a write would
/// overflow, the writer copies the longest char-aligned prefix that fits
/// and drops everything after it.
struct BoundedWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
    full: bool,
}

impl<'b> BoundedWriter<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            full: false,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    fn finish(self) -> &'b str {
        let BoundedWriter { buf, len, .. } = self;
        if buf.is_empty() {
            return "";
        }
        buf[len] = 0;
        let buf: &'b [u8] = buf;
        // Only whole characters are ever copied in.
        std::str::from_utf8(&buf[..len]).unwrap_or("")
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.full {
            return Ok(());
        }

        let room = self.capacity() - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.full = true;
            let mut cut = room;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}
