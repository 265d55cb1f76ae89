use portable_errors::{Errc, ErrorCode, error_code_enum, Category, ErrorCategory};
use std::fs::File;

// A small domain with its own category.
#[derive(Debug, Clone, Copy)]
#[repr(i32)]
enum ConfigError {
    Missing = 1,
    Malformed = 2,
}

struct ConfigCategory {
    name: &'static str,
}

impl Category for ConfigCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        match value {
            1 => "configuration file missing".into(),
            2 => "configuration file malformed".into(),
            _ => "unknown configuration error".into(),
        }
    }
}

static CONFIG: ConfigCategory = ConfigCategory { name: "config" };

fn config_category() -> ErrorCategory {
    ErrorCategory::new(&CONFIG)
}

error_code_enum!(ConfigError => config_category());

fn open_config(path: &str) -> Result<File, ErrorCode> {
    File::open(path).map_err(|err| ErrorCode::from_io_error(&err))
}

fn parse_config(text: &str) -> Result<(), ErrorCode> {
    if text.trim().is_empty() {
        return Err(ConfigError::Missing.into());
    }
    if !text.contains('=') {
        return Err(ConfigError::Malformed.into());
    }
    Ok(())
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // SCENARIO 1: an OS error, tested portably.
    match open_config("/definitely/not/here.toml") {
        Ok(_) => println!("Unexpectedly opened the file"),
        Err(code) => {
            println!("1. [OS ERROR]");
            println!("   Code:      {}", code);
            println!("   Message:   {}", code.message());
            println!("   Condition: {}", code.default_error_condition());
            println!("   Not found? {}", code == Errc::NoSuchFileOrDirectory);
        }
    }

    // SCENARIO 2: a domain error from a registered enum.
    if let Err(code) = parse_config("just some words") {
        println!("\n2. [DOMAIN ERROR]");
        code.with_log_record(|log| {
            let mut line = String::new();
            if log.write_to(&mut line).is_ok() {
                println!("   {}", line);
            }
        });
        println!("   Malformed? {}", code == ErrorCode::from(ConfigError::Malformed));
    }

    // SCENARIO 3: success is the empty code.
    let ok = ErrorCode::default();
    println!("\n3. [SUCCESS]");
    println!("   {} failed={}", ok, ok.failed());
}
