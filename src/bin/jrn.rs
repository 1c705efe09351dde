//! Command-line interface for jrn
//! This binary is used to inspect and rewrite jrn journal files.
//!
//! Usage:
//!   jrn inspect `<path>` [--format `<format>`]      - Print the parsed line structure
//!   jrn roundtrip `<path>`                        - Verify byte-identical reserialization
//!   jrn clean `<path>` --output `<out>`             - Rewrite a journal, optionally dropping blank lines

use clap::{Arg, ArgAction, Command};
use jrn_parser::jrn::ast::{Document, DocumentConfig, LineEnding};
use jrn_parser::jrn::loader::DocumentLoader;

fn main() {
    let eol_arg = Arg::new("eol")
        .long("eol")
        .help("Line separator the file was produced with (crlf, lf, platform)")
        .default_value("crlf");

    let matches = Command::new("jrn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and rewriting jrn journal files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed line structure")
                .arg(
                    Arg::new("path")
                        .help("Path to the journal file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'text', 'json')")
                        .default_value("text"),
                )
                .arg(eol_arg.clone()),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Verify that parse + reserialize reproduces the file byte-identically")
                .arg(
                    Arg::new("path")
                        .help("Path to the journal file")
                        .required(true)
                        .index(1),
                )
                .arg(eol_arg.clone()),
        )
        .subcommand(
            Command::new("clean")
                .about("Reserialize a journal file")
                .arg(
                    Arg::new("path")
                        .help("Path to the journal file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Path to write the rewritten journal to")
                        .required(true),
                )
                .arg(
                    Arg::new("skip-empty")
                        .long("skip-empty")
                        .help("Drop blank lines while rewriting")
                        .action(ArgAction::SetTrue),
                )
                .arg(eol_arg),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => {
            let path = inspect_matches.get_one::<String>("path").unwrap();
            let format = inspect_matches.get_one::<String>("format").unwrap();
            let config = config_from_eol(inspect_matches.get_one::<String>("eol").unwrap(), false);
            handle_inspect_command(path, format, &config);
        }
        Some(("roundtrip", roundtrip_matches)) => {
            let path = roundtrip_matches.get_one::<String>("path").unwrap();
            let config = config_from_eol(roundtrip_matches.get_one::<String>("eol").unwrap(), false);
            handle_roundtrip_command(path, &config);
        }
        Some(("clean", clean_matches)) => {
            let path = clean_matches.get_one::<String>("path").unwrap();
            let output = clean_matches.get_one::<String>("output").unwrap();
            let skip_empty = clean_matches.get_flag("skip-empty");
            let config = config_from_eol(clean_matches.get_one::<String>("eol").unwrap(), skip_empty);
            handle_clean_command(path, output, &config);
        }
        _ => unreachable!(),
    }
}

fn config_from_eol(eol: &str, skip_empty_lines: bool) -> DocumentConfig {
    let line_ending = match eol {
        "crlf" => LineEnding::Crlf,
        "lf" => LineEnding::Lf,
        "platform" => LineEnding::Platform,
        other => {
            eprintln!("Unknown line separator '{}'; expected crlf, lf or platform", other);
            std::process::exit(2);
        }
    };
    DocumentConfig {
        line_ending,
        skip_empty_lines,
    }
}

fn load(path: &str) -> DocumentLoader {
    DocumentLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, format: &str, config: &DocumentConfig) {
    let document = load(path).parse(config);
    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&document.lines).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "text" => print_summary(&document),
        other => {
            eprintln!("Unknown format '{}'; expected text or json", other);
            std::process::exit(2);
        }
    }
}

fn print_summary(document: &Document) {
    for (index, line) in document.lines.iter().enumerate() {
        match line.as_parameterized() {
            Some(call) => {
                println!(
                    "{:5}  {}.{}  {} parameter(s){}",
                    index + 1,
                    call.module,
                    call.action,
                    call.parameters.len(),
                    if call.prefix.is_empty() {
                        String::new()
                    } else {
                        format!("  @ {}", call.prefix)
                    }
                );
            }
            None => println!("{:5}  raw: {}", index + 1, line.literal()),
        }
    }
    let calls = document.iter_parameterized().count();
    println!("\n{} line(s), {} parameterized", document.lines.len(), calls);
}

/// Handle the roundtrip command
fn handle_roundtrip_command(path: &str, config: &DocumentConfig) {
    let loader = load(path);
    let document = loader.parse(config);
    let reserialized = document.to_text(config);
    if reserialized == loader.source_ref() {
        println!("OK: {} reserializes byte-identically", path);
    } else {
        eprintln!("MISMATCH: {} does not reserialize byte-identically", path);
        eprintln!("(check that --eol matches the file's line separator)");
        std::process::exit(1);
    }
}

/// Handle the clean command
fn handle_clean_command(path: &str, output: &str, config: &DocumentConfig) {
    let document = load(path).parse(config);
    document.save_as(output, config).unwrap_or_else(|e| {
        eprintln!("Error writing file: {}", e);
        std::process::exit(1);
    });
    println!("Wrote {}", output);
}
