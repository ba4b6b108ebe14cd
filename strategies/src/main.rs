use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use corpus::{highlighted_name, load_document, strip_markup, write_document};
use strategies::highlight::highlight_spans;
use strategies::tables::{BadCharTable, SuffixTables, TableSink};
use strategies::{BoyerMoore, Horspool, Naive, SearchOutcome, SearchStrategy};

#[derive(Debug, Clone, clap::ValueEnum)]
enum Algorithm {
    Naive,
    BoyerMoore,
    Horspool,
}

/// Example:
/// cargo run --release -- -a horspool -t docs/war_and_peace.html --strip-markup \
///     --pattern "the" --pattern "Tchaikovsky" --measure-time
#[derive(Debug, clap::Parser)]
#[command(
    name = "substring-scan",
    about = "Run comparison-counted substring searches over one or more documents"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    /// Pattern to search for; repeat the flag for several patterns
    #[arg(long = "pattern", value_name = "PATTERN", required = true)]
    patterns: Vec<String>,

    /// Strip HTML markup from the documents before searching
    #[arg(long)]
    strip_markup: bool,

    /// Print the preprocessing tables once per search
    #[arg(long)]
    dump_tables: bool,

    /// Measure and print execution time for each search
    #[arg(long)]
    measure_time: bool,

    /// Write a highlighted copy of each document into this directory
    #[arg(long = "highlight-dir", value_name = "DIR")]
    highlight_dir: Option<PathBuf>,

    /// Optional output file for the report; if omitted, stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={:?}, patterns={}",
        cli.algo,
        cli.patterns.len()
    )?;

    for text_path in &cli.texts {
        let raw = load_document(text_path)?;
        let text = if cli.strip_markup {
            strip_markup(&raw)
        } else {
            raw
        };

        writeln!(out, "text={:?}", text_path)?;

        let mut spans: Vec<(usize, usize)> = Vec::new();

        for pattern in &cli.patterns {
            let started = Instant::now();
            let outcome = run_search(&cli, &text, pattern)?;
            let elapsed = started.elapsed();

            report(
                &mut out,
                pattern,
                &outcome,
                cli.measure_time.then_some(elapsed),
            )?;

            spans.extend(outcome.occurrences.iter().map(|&occ| (occ, pattern.len())));
        }

        if let Some(ref dir) = cli.highlight_dir {
            let marked = highlight_spans(text.as_bytes(), &spans);
            let target = dir.join(highlighted_name(text_path));
            write_document(&target, &marked)?;
            writeln!(out, "highlighted={:?}", target)?;
        }

        writeln!(out)?;
    }

    Ok(())
}

fn run_search(
    cli: &Cli,
    text: &str,
    pattern: &str,
) -> Result<SearchOutcome, Box<dyn std::error::Error>> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();

    let outcome = if cli.dump_tables {
        let mut sink = PrintSink;
        match cli.algo {
            Algorithm::Naive => Naive.search_bytes(text, pattern)?,
            Algorithm::BoyerMoore => BoyerMoore.search_with_tables(text, pattern, &mut sink)?,
            Algorithm::Horspool => Horspool.search_with_tables(text, pattern, &mut sink)?,
        }
    } else {
        match cli.algo {
            Algorithm::Naive => Naive.search_bytes(text, pattern)?,
            Algorithm::BoyerMoore => BoyerMoore.search_bytes(text, pattern)?,
            Algorithm::Horspool => Horspool.search_bytes(text, pattern)?,
        }
    };

    Ok(outcome)
}

fn report(
    out: &mut dyn Write,
    pattern: &str,
    outcome: &SearchOutcome,
    elapsed: Option<Duration>,
) -> io::Result<()> {
    writeln!(out, "pattern: {}", pattern)?;
    writeln!(out, "occurrences: {}", outcome.occurrences.len())?;
    writeln!(out, "comparisons: {}", outcome.comparisons)?;
    if let Some(d) = elapsed {
        writeln!(out, "elapsed: {}ns", d.as_nanos())?;
    }
    Ok(())
}

/// Prints each preprocessing table to stdout, one entry per line.
struct PrintSink;

impl TableSink for PrintSink {
    fn bad_char(&mut self, _pattern: &[u8], table: &BadCharTable) {
        println!("bad character table:");
        for (byte, last) in table.entries() {
            println!("  {}: {}", byte.escape_ascii(), last);
        }
    }

    fn suffix(&mut self, pattern: &[u8], tables: &SuffixTables) {
        println!("good suffix shifts:");
        for i in 0..pattern.len() {
            println!(
                "  {}: {}",
                String::from_utf8_lossy(&pattern[i..]),
                tables.shift[i + 1]
            );
        }
    }
}
