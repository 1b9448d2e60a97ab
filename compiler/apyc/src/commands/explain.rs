//! The `explain` command: describe a diagnostic code.

use apy_diagnostic::ErrorCode;

/// Print the description of the code named by `code_str`.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.description());
        }
        std::process::exit(1);
    };

    println!("{code}: {}", code.description());
}
