//! Quill CLI
//!
//! REPL, file runner and front-end debug commands.

use quillc::commands::{explain_error, lex_file, parse_file, run_file, run_repl};
use quillc::{init_tracing, Config};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let parsed = Config::from_env()
        .and_then(|config| config.with_args(args.iter().map(String::as_str)));
    let (config, args) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing();

    let Some(command) = args.first().copied() else {
        run_repl(&config);
        return;
    };

    match command {
        "repl" => run_repl(&config),
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: quill run <file.quill> [options]");
                std::process::exit(1);
            };
            run_file(path, &config);
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: quill lex <file.quill>");
                std::process::exit(1);
            };
            lex_file(path, &config);
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: quill parse <file.quill>");
                std::process::exit(1);
            };
            parse_file(path, &config);
        }
        "explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: quill explain <ERROR_CODE>");
                eprintln!("Example: quill explain E2002");
                std::process::exit(1);
            };
            explain_error(code);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("quill"))
            {
                run_file(command, &config);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Quill interpreter");
    println!();
    println!("Usage: quill [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive prompt (default)");
    println!("  run <file.quill>     Evaluate a file and print its result");
    println!("  lex <file.quill>     Print the token stream");
    println!("  parse <file.quill>   Print the syntax tree");
    println!("  explain <code>       Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!(
        "  --max-call-depth=N     Nested call limit (default 1024, env {})",
        quillc::MAX_CALL_DEPTH_VAR
    );
    println!(
        "  --max-nesting-depth=N  Syntax nesting limit (default 256, env {})",
        quillc::MAX_NESTING_DEPTH_VAR
    );
    println!("  --color=MODE           Diagnostics color: auto, always, never");
    println!("  --skip-unknown-chars   Warn about and skip unrecognized characters");
    println!();
    println!("The REPL exits on an empty line, end of input, or a line containing `exit`.");
    println!();
    println!("Examples:");
    println!("  quill");
    println!("  quill run main.quill");
    println!("  quill main.quill --max-call-depth=64");
    println!("  quill explain E2005");
    println!("  RUST_LOG=quill_parse=trace quill parse main.quill");
}
