//! gsimql query runner
//!
//! A thin local boundary over the catalog engine: reads a JSON
//! `CatalogRequest` from a file or stdin, executes it against the embedded
//! catalog, and prints the JSON response.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gsimql::{Catalog, CatalogRequest, QueryExecutor};

#[derive(Default)]
struct Config {
    /// Request file; stdin when absent.
    request_path: Option<PathBuf>,
    /// Emit compact rather than pretty JSON.
    compact: bool,
}

fn usage() -> ! {
    eprintln!("usage: gsimql-query [--request <file>] [--compact]");
    eprintln!();
    eprintln!("Reads a JSON catalog request from <file> (or stdin) and prints");
    eprintln!("the response. Set RUST_LOG for diagnostics.");
    std::process::exit(2);
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--request" | "-r" => {
                if i + 1 < args.len() {
                    config.request_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("error: --request requires a value");
                    std::process::exit(2);
                }
            }
            "--compact" | "-c" => {
                config.compact = true;
                i += 1;
            }
            "--help" | "-h" => usage(),
            other => {
                eprintln!("error: unknown argument: {other}");
                usage();
            }
        }
    }

    config
}

fn read_request(config: &Config) -> Result<String, std::io::Error> {
    match &config.request_path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = parse_args();

    let raw = match read_request(&config) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("error: failed to read request: {err}");
            std::process::exit(1);
        }
    };

    let request: CatalogRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("error: invalid request: {err}");
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::embedded() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            eprintln!("error: failed to load catalog: {err}");
            std::process::exit(1);
        }
    };

    let executor = QueryExecutor::new(catalog);
    let response = match executor.execute(&request) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let rendered = if config.compact {
        serde_json::to_string(&response)
    } else {
        serde_json::to_string_pretty(&response)
    };

    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize response: {err}");
            std::process::exit(1);
        }
    }
}
