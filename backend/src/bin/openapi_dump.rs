//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use personnel::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the dump.
#[derive(Debug, Parser)]
#[command(about = "Print the registry OpenAPI document")]
struct Args {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()?
    } else {
        doc.to_json()?
    };
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}
