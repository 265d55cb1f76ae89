#![no_main]

use libfuzzer_sys::fuzz_target;
use portable_errors::{
    ErrorCategory, ErrorCode, ForeignCategory, ForeignErrorCode, generic_category,
    interop_category, system::win32_category, system_category,
};

struct FuzzCategory {
    name: &'static str,
}

impl ForeignCategory for FuzzCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        format!("fuzz {}", value)
    }
}

static FUZZ: FuzzCategory = FuzzCategory { name: "fuzz" };

fn pick_category(selector: u8) -> ErrorCategory {
    match selector % 3 {
        0 => generic_category(),
        1 => system_category(),
        _ => win32_category(),
    }
}

// Each 5-byte chunk is one operation on a single code: opcode, then an i32.
fuzz_target!(|data: &[u8]| {
    let mut code = ErrorCode::default();

    for chunk in data.chunks_exact(5) {
        let value = i32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        match chunk[0] % 5 {
            0 => code.assign(value, pick_category(chunk[0] / 5)),
            1 => code.clear(),
            2 => {
                let before = (code.value(), code.category(), code.failed());
                code.materialize_as_foreign();
                assert!(code.is_foreign());
                assert_eq!((code.value(), code.category(), code.failed()), before);
            }
            3 => {
                let payload = ForeignErrorCode::new(value, &FUZZ);
                code = ErrorCode::from_foreign(payload);
                assert_eq!(code.to_foreign(), payload);
                assert_eq!(code.category(), interop_category());
            }
            _ => {
                let cat = pick_category(chunk[0] / 5);
                code = ErrorCode::from_foreign(ForeignErrorCode::from_native(value, cat));
                assert_eq!(code.value(), value);
                assert_eq!(code.category(), cat);
            }
        }

        let back = ErrorCode::from_foreign(code.to_foreign());
        assert_eq!(back, code);
        assert_eq!(back.hash_value(), code.hash_value());
        assert_eq!(back.failed(), code.failed());
        let _ = code.to_string();
    }
});
