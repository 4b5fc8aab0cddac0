//! rulex CLI
//!
//! Scans files with a JSON rule set and prints the resulting tokens.

use std::path::Path;

use rulexc::commands::lex_file;

fn main() {
    rulexc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let mut file = None;
            let mut rules = None;
            let mut i = 2;
            while i < args.len() {
                if args[i] == "--rules" && i + 1 < args.len() {
                    rules = Some(args[i + 1].as_str());
                    i += 2;
                } else if let Some(path) = args[i].strip_prefix("--rules=") {
                    rules = Some(path);
                    i += 1;
                } else {
                    if !args[i].starts_with('-') && file.is_none() {
                        file = Some(args[i].as_str());
                    }
                    i += 1;
                }
            }

            let (Some(file), Some(rules)) = (file, rules) else {
                eprintln!("Usage: rulex lex <file> --rules <rules.json>");
                std::process::exit(1);
            };

            match lex_file(Path::new(file), Path::new(rules)) {
                Ok(listing) => print!("{listing}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("rulex {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("rulex - rule-driven lexer");
    println!();
    println!("Usage: rulex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file> --rules <rules.json>   Print the tokens of <file>");
    println!("  help                              Show this help message");
    println!("  version                           Show version information");
    println!();
    println!("Environment:");
    println!("  RULEX_LOG    Tracing filter (falls back to RUST_LOG)");
}
