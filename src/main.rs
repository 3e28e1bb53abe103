//! gridfmt - evaluate aggregate directives in delimited text and render an
//! aligned table.

use anyhow::Context;
use gridfmt_core::Document;
use std::env;
use std::path::Path;

fn print_usage() {
    eprintln!("Usage: gridfmt <INPUT> <OUTPUT>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <INPUT>     Comma-delimited text file to load");
    eprintln!("  <OUTPUT>    Destination for the rendered table");
}

fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    let mut doc = Document::open(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    doc.evaluate();

    doc.export(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_usage();
        return;
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    if let Err(e) = run(input, output) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    println!("Wrote {}", output.display());
}
