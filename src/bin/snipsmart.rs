//! Command-line interface for snipsmart
//! This binary extracts balanced tag or JSON fragments from noisy text and
//! can run the HTTP extraction service.
//!
//! Usage:
//!   snipsmart clean `<path>` [--format `<format>`] [--case-sensitive]  - Extract from a file ('-' for stdin)
//!   snipsmart serve [--host `<host>`] [--port `<port>`]              - Run the HTTP service
//!   snipsmart list-formats                                       - List supported formats

use clap::{Arg, ArgAction, Command};
use std::io::Read;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snipsmart::snip::{snip_by_tag, snip_smart, Format, SnipOutcome, TagOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = Command::new("snipsmart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts balanced tag and JSON fragments from noisy text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("clean")
                .about("Extract a fragment from a file or stdin")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Expected format ('tag' or 'json')")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("case-sensitive")
                        .long("case-sensitive")
                        .help("Compare tag names with their original casing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP extraction service")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("Address to bind")
                        .default_value("0.0.0.0"),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .help("Port to listen on")
                        .env("PORT")
                        .default_value("3000"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List supported format selectors"))
        .get_matches();

    match matches.subcommand() {
        Some(("clean", clean_matches)) => {
            let path = clean_matches.get_one::<String>("path").unwrap();
            let format = clean_matches.get_one::<String>("format").unwrap();
            let case_sensitive = clean_matches.get_flag("case-sensitive");
            handle_clean_command(path, format, case_sensitive);
            Ok(())
        }
        Some(("serve", serve_matches)) => {
            let host = serve_matches.get_one::<String>("host").unwrap();
            let port: u16 = serve_matches
                .get_one::<String>("port")
                .unwrap()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid port: {e}"))?;
            snipsmart::server::serve(host, port).await
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    }
}

/// Handle the clean command
fn handle_clean_command(path: &str, format: &str, case_sensitive: bool) {
    let content = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let outcome = if format == Format::Tag.as_str() {
        snip_by_tag(&content, &TagOptions { case_sensitive })
    } else {
        snip_smart(&content, format)
    };

    match outcome {
        SnipOutcome::Success { data, .. } => println!("{}", data),
        SnipOutcome::Fail { comments, raw } => {
            eprintln!("Extraction failed: {}", comments);
            if let Some(raw) = raw {
                eprintln!("Partial fragment:\n{}", raw);
            }
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Supported formats:\n");
    for format in Format::ALL {
        println!("  {}", format);
    }
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}
