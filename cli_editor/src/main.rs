//! # CLI Editor
//!
//! Main entry point for the line-ingesting editor driver.

use cli_editor::{EditorRuntime, RuntimeConfig, INPUT_SENTINEL};
use std::env;
use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let script = config.script.clone();
    let mut runtime = EditorRuntime::new(config);

    let outcome = match script {
        Some(text) => runtime.run(Cursor::new(text)),
        None => runtime.run(io::stdin().lock()),
    };

    match outcome {
        Ok(summary) => {
            println!(
                "Saved {} lines to {}",
                summary.lines_inserted,
                summary.path.display()
            );
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> Result<RuntimeConfig, String> {
    let mut config = RuntimeConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --file".to_string());
                }
                config.file = PathBuf::from(&args[i]);
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--quiet" | "-q" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!(
        "Reads lines from stdin until a line equal to {}, inserts each at",
        INPUT_SENTINEL
    );
    eprintln!("the next index, then saves the buffer to the target file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --file <PATH>        Save target (default: scratch.txt)");
    eprintln!("  -s, --script <FILE>      Read input lines from a file instead of stdin");
    eprintln!("  -q, --quiet              Suppress per-event console logging");
    eprintln!("  -h, --help               Show this help message");
}
