//! Print the OpenAPI document as JSON, or write it to a file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use bestie_backend::doc::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Emit the Borrowed Bestie OpenAPI document",
    version
)]
struct CliArgs {
    /// Write to this path instead of stdout.
    #[arg(long, short, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|error| io::Error::other(format!("serialise OpenAPI document: {error}")))?;
    match args.output {
        Some(path) => fs::write(path, format!("{json}\n")),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}
