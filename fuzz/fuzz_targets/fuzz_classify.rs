#![no_main]

use libfuzzer_sys::fuzz_target;
use portable_errors::{ErrorCode, generic_category, system::win32, system::win32_category};

fuzz_target!(|data: &[u8]| {
    let Some(bytes) = data.get(..4) else {
        return;
    };
    let raw = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

    let unpacked = win32::unpack_hresult(raw);
    assert_eq!(win32::unpack_hresult(unpacked), unpacked);
    assert_eq!(win32::classify(raw), win32::classify(unpacked));

    let code = ErrorCode::new(raw, win32_category());
    let condition = code.default_error_condition();
    match win32::classify(raw) {
        Some(kind) => {
            assert_eq!(condition, kind.condition());
            assert_eq!(condition.category(), generic_category());
        }
        None => {
            assert_eq!(condition.value(), unpacked);
            assert_eq!(condition.category(), win32_category());
        }
    }
    assert!(code == condition);
});
