#![no_main]

use libfuzzer_sys::fuzz_target;
use portable_errors::{ErrorCode, generic_category, system::win32_category, system_category};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    let value = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let len = usize::from(u16::from_le_bytes([data[4], data[5]])) % 512;

    for category in [generic_category(), system_category(), win32_category()] {
        let code = ErrorCode::new(value, category);
        let full = code.message();

        let mut buffer = vec![0xA5u8; len + 16];
        let written = code.message_to(&mut buffer[..len]);
        assert!(full.starts_with(written));
        let written = written.len();

        if len == 0 {
            assert_eq!(written, 0);
            assert_eq!(buffer[0], 0xA5);
        } else {
            assert!(written < len);
            assert_eq!(buffer[written], 0);
        }
        assert!(buffer[len..].iter().all(|byte| *byte == 0xA5));
    }
});
