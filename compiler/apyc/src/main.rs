//! apy token dump tool CLI.

use apyc::commands::{explain_error, parse_tokens_options, tokens_file};

fn main() {
    apyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: apyc tokens <lexeme-file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --error-limit=<n>   Stop collecting after n errors (0 = no limit)");
                eprintln!("  --no-dedup          Report repeated diagnostics");
                eprintln!("  --color=<mode>      Color mode: auto, always, never");
                eprintln!("  --concat            Merge adjacent string literals");
                std::process::exit(1);
            }

            match parse_tokens_options(&args[2..]) {
                Ok(options) => tokens_file(&options),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: apyc explain <ERROR_CODE>");
                eprintln!("Example: apyc explain E0002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("apyc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("apy token dump tool");
    println!();
    println!("Usage: apyc <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <lexeme-file>  Build tokens from a lexeme file and dump them");
    println!("  explain <code>        Explain a diagnostic code (e.g., E0001)");
    println!("  help                  Show this help message");
    println!("  version               Show version information");
    println!();
    println!("Tokens options:");
    println!("  --error-limit=<n>   Stop collecting after n errors (default 10, 0 = no limit)");
    println!("  --no-dedup          Report repeated diagnostics");
    println!("  --color=<mode>      Color mode: auto (default), always, never");
    println!("  --concat            Merge adjacent string literals");
    println!();
    println!("Lexeme files hold one record per line: <line>\\t<category>\\t<text>");
    println!("Categories: id, type_var, int_literal, string, raw_string, symbol");
    println!();
    println!("Examples:");
    println!("  apyc tokens lexemes.tsv");
    println!("  apyc tokens lexemes.tsv --concat --color=never");
    println!("  RUST_LOG=apy_token=trace apyc tokens lexemes.tsv");
    println!("  apyc explain E0002");
}
