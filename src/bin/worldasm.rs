use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use worldasm::Assembler;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble world64 source into a raw binary image"
)]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(value_name = "SOURCE")]
    input: PathBuf,
    /// Output binary file
    #[arg(value_name = "DEST")]
    output: PathBuf,
    /// Fail on unknown mnemonics instead of skipping them
    #[arg(long)]
    strict: bool,
    /// Write a JSON listing (line, source, offset, bytes) next to the binary
    #[arg(long, value_name = "FILE")]
    listing: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ListingRow {
    line: usize,
    source: String,
    offset: usize,
    bytes: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = fs::read_to_string(&opts.input)?;
    let asm = Assembler::new().strict(opts.strict);

    let image = asm.assemble_str(&text)?;
    fs::write(&opts.output, &image)?;

    if let Some(path) = &opts.listing {
        let rows = listing_rows(&asm, &text)?;
        fs::write(path, serde_json::to_string_pretty(&rows)?)?;
    }

    Ok(())
}

// Every line is self-contained, so the listing re-encodes line by line and
// tracks the running offset into the image.
fn listing_rows(asm: &Assembler, text: &str) -> Result<Vec<ListingRow>> {
    let mut rows = Vec::new();
    let mut offset = 0usize;
    for (i, line) in text.lines().enumerate() {
        let bytes = asm.assemble([line])?;
        if bytes.is_empty() {
            continue;
        }
        let hex = bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        rows.push(ListingRow {
            line: i + 1,
            source: line.trim().to_string(),
            offset,
            bytes: hex,
        });
        offset += bytes.len();
    }
    Ok(rows)
}
