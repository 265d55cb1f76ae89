use portable_errors::system::{win32, win32_category, win32_codes};
use portable_errors::{ErrorCode, ForeignCategory, ForeignErrorCode};

struct SqliteLikeCategory {
    name: &'static str,
}

impl ForeignCategory for SqliteLikeCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        match value {
            5 => "database is locked".into(),
            _ => format!("database error {}", value),
        }
    }
}

static SQLITE_LIKE: SqliteLikeCategory = SqliteLikeCategory { name: "sqlite" };

fn main() {
    println!("--- Win32 Classification ---\n");

    let samples = [
        ("ERROR_SUCCESS", win32_codes::ERROR_SUCCESS),
        ("ERROR_ACCESS_DENIED", win32_codes::ERROR_ACCESS_DENIED),
        ("ERROR_FILE_EXISTS", win32_codes::ERROR_FILE_EXISTS),
        ("HRESULT_FROM_WIN32(ACCESS_DENIED)", 0x8007_0005u32 as i32),
        ("WSAECONNREFUSED", win32_codes::WSAECONNREFUSED),
        ("ERROR_INSUFFICIENT_BUFFER", win32_codes::ERROR_INSUFFICIENT_BUFFER),
    ];

    for (name, raw) in samples {
        let code = ErrorCode::new(raw, win32_category());
        let kind = win32::classify(raw)
            .map(|kind| format!("{:?}", kind))
            .unwrap_or_else(|| "unclassified".to_owned());
        println!(
            "{:<36} {:>11} -> {:<26} condition={}",
            name,
            raw,
            kind,
            code.default_error_condition()
        );
    }

    println!("\n--- Foreign Bridge ---\n");

    let foreign = ErrorCode::from_foreign(ForeignErrorCode::new(5, &SQLITE_LIKE));
    println!("display:   {}", foreign);
    println!("category:  {}", foreign.category());
    println!("value():   {} (hashed)", foreign.value());
    println!("message:   {}", foreign.message());
    println!("raw value: {}", foreign.to_foreign().value());

    let mut native = ErrorCode::new(win32_codes::ERROR_ACCESS_DENIED, win32_category());
    let before = native;
    native.materialize_as_foreign();
    println!(
        "\nmaterialized {} is_foreign={} unchanged={}",
        native,
        native.is_foreign(),
        native == before
    );
}
