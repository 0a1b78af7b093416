use anyhow::Result;
use clap::Parser;
use gotchi_svg::batch::{self, BatchConfig, BatchEvent, FileStatus};
use gotchi_svg::{logger, Palette, TEMPLATE_CHEEK, TEMPLATE_PRIMARY, TEMPLATE_SECONDARY};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;

/// Update primary, secondary and cheek colors in every body JSON file
///
/// The template file sets the palette and is never rewritten itself.
#[derive(Parser, Debug)]
#[command(name = "restyle-bodies", version, about)]
struct Cli {
    /// Directory holding the body JSON files
    #[arg(long, default_value = batch::DEFAULT_DIR, value_hint = clap::ValueHint::DirPath)]
    dir: PathBuf,

    /// Template file name inside the directory
    #[arg(long, default_value = batch::DEFAULT_TEMPLATE)]
    template: String,

    #[arg(long, default_value = TEMPLATE_PRIMARY)]
    primary: String,

    #[arg(long, default_value = TEMPLATE_SECONDARY)]
    secondary: String,

    #[arg(long, default_value = TEMPLATE_CHEEK)]
    cheek: String,

    /// Take the palette from the template file's style rules
    #[arg(long)]
    from_template: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logger::init(env!("CARGO_CRATE_NAME"), cli.verbose);

    let mut config = BatchConfig {
        dir: cli.dir,
        template: cli.template,
        palette: Palette::new(&cli.primary, &cli.secondary, &cli.cheek)?,
    };

    if cli.from_template && config.template_path().is_file() {
        match batch::template_palette(&config.template_path())? {
            Some(palette) => config.palette = palette,
            None => warn!("template has no palette rules, using the configured colors"),
        }
    }

    let palette = config.palette.clone();
    let report = batch::run_with(&config, |event| match event {
        BatchEvent::Found(0) => println!("No JSON files found to update."),
        BatchEvent::Found(n) => {
            println!("Found {} files to update.", n);
            println!("Template colors:");
            println!("  Primary: {}", palette.primary);
            println!("  Secondary: {}", palette.secondary);
            println!("  Cheek: {}", palette.cheek);
            println!();
        }
        BatchEvent::Processing(path) => println!("Processing {}...", file_name(path)),
        BatchEvent::Finished(path, FileStatus::Updated) => {
            println!("  ✓ Updated {}", file_name(path))
        }
        BatchEvent::Finished(path, FileStatus::Unchanged) => {
            println!("  - No changes needed for {}", file_name(path))
        }
        BatchEvent::Finished(path, FileStatus::Failed(msg)) => {
            println!("  ✗ Skipped {}: {}", file_name(path), msg)
        }
    });

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if report.files.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    println!();
    println!("Update complete! {} file(s) updated.", report.updated());
    if report.failed() > 0 {
        println!("{} file(s) could not be processed.", report.failed());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
