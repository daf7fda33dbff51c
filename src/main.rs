use anyhow::{Context, Result};
use clap::Parser;
use rangesplit::{DirSink, Splitter};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

/// Splits a pwned-passwords export (ordered by hash) into hash-prefix
/// range files, the same way the Pwned Passwords API serves them.
#[derive(Parser)]
#[command(name = "rangesplit", version, about)]
struct Cli {
    /// The pwned passwords file, *ordered by hash*
    #[arg(short, long)]
    file: PathBuf,

    /// The output folder the range files should be written to
    #[arg(short, long, default_value = "range")]
    output_folder: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Instant::now();

    if !cli.output_folder.exists() {
        println!("Creating output folder");
    }
    let mut sink = DirSink::create(&cli.output_folder)?;

    let file = File::open(&cli.file)
        .with_context(|| format!("Failed to open {}", cli.file.display()))?;
    let reader = BufReader::new(file);

    // Each prefix is printed as its range opens; the last repeats at the end
    let stats = Splitter::new().split(reader, &mut sink, |prefix| println!("{}", prefix))?;

    println!(
        "\n✓ Wrote {} range files from {} lines ({} skipped) [{:.2}s]",
        stats.ranges_written,
        stats.lines_read,
        stats.lines_skipped,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
