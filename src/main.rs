use clap::Parser;
use gotchi_svg::{inline, logger};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert SVG CSS classes to inline fill attributes
///
/// Reads an SVG document from INPUT, or stdin when no path is given, and
/// writes the converted document to stdout.
#[derive(Parser, Debug)]
#[command(name = "svg-inline", version, about)]
struct Cli {
    /// SVG file to convert (default: stdin)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(env!("CARGO_CRATE_NAME"), cli.verbose);

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| (path.display().to_string(), e)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
                .map_err(|e| ("stdin".to_string(), e))
        }
    };

    match input {
        Ok(svg) => {
            println!("{}", inline(&svg));
            ExitCode::SUCCESS
        }
        Err((source, e)) => {
            eprintln!("Error: cannot read {}: {}", source, e);
            ExitCode::FAILURE
        }
    }
}
