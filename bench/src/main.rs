use std::path::Path;
use std::process::Command;

// Configuration
const BINARY_NAME: &str = "strategies";
const TEXT_FILES: &[&str] = &[
    "data/shakespeare.html",
    "data/war_and_peace.html",
    "data/us_cities_by_population.html",
];

const PATTERNS: &[(&str, &str)] = &[
    ("the", "Common Word"),
    ("population", "Long Word"),
    ("Et tu, Brute?", "Phrase"),
    ("Tchaikovsky", "Rare Name"),
    ("New York", "Two Words"),
    ("XYZXYZMISSING", "Not Present"),
];

const ALGORITHMS: &[&str] = &["naive", "boyer-moore", "horspool"];

#[derive(Debug)]
struct ResultEntry {
    algo: String,
    pattern: String,
    file: String,
    comparisons: u64,
    duration_ns: u128,
}

fn main() {
    println!("--- Starting Benchmark Script ---");

    println!("> Building project in release mode...");
    let build_status = Command::new("cargo")
        .args(&["build", "--release"])
        .status()
        .expect("Failed to execute cargo build");

    if !build_status.success() {
        eprintln!("Error: Cargo build failed.");
        std::process::exit(1);
    }

    let binary_path = Path::new("target").join("release").join(BINARY_NAME);
    if !binary_path.exists() {
        eprintln!(
            "Error: Binary not found at {:?}. Check crate name.",
            binary_path
        );
        std::process::exit(1);
    }

    let mut results: Vec<ResultEntry> = Vec::new();

    for (pattern, pat_desc) in PATTERNS {
        for algo in ALGORITHMS {
            println!("> Running {} on pattern '{}' ({})", algo, pattern, pat_desc);

            let mut args = vec![
                "--measure-time".to_string(),
                "--strip-markup".to_string(),
                "--pattern".to_string(),
                pattern.to_string(),
                "--algo".to_string(),
                algo.to_string(),
            ];

            for txt in TEXT_FILES {
                args.push("-t".to_string());
                args.push(txt.to_string());
            }

            let output = Command::new(&binary_path)
                .args(&args)
                .output()
                .expect("Failed to run binary");

            if !output.status.success() {
                eprintln!("  ! Algorithm {} failed on pattern {}", algo, pattern);
                let stderr = String::from_utf8_lossy(&output.stderr);
                eprintln!("  ! Error: {}", stderr);
                continue;
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            let parsed_results = parse_output(&stdout, algo, pattern);
            results.extend(parsed_results);
        }
    }

    print_summary_table(&results);
}

fn parse_output(output: &str, algo: &str, pattern: &str) -> Vec<ResultEntry> {
    let mut entries = Vec::new();
    let mut current_file = String::new();
    let mut comparisons = 0u64;

    for line in output.lines() {
        let line = line.trim();

        if line.starts_with("text=") {
            current_file = line
                .trim_start_matches("text=\"")
                .trim_end_matches('"')
                .to_string();
        }

        if line.starts_with("comparisons:") {
            if let Some(value) = line.split_whitespace().nth(1) {
                comparisons = value.parse::<u64>().unwrap_or(0);
            }
        }

        if line.starts_with("elapsed:") {
            if let Some(ns_str) = line.split_whitespace().nth(1) {
                let ns_val = ns_str.trim_end_matches("ns");
                if let Ok(ns) = ns_val.parse::<u128>() {
                    entries.push(ResultEntry {
                        algo: algo.to_string(),
                        pattern: pattern.to_string(),
                        file: current_file.clone(),
                        comparisons,
                        duration_ns: ns,
                    });
                }
            }
        }
    }
    entries
}

fn print_summary_table(results: &[ResultEntry]) {
    println!("\n\n{:=^96}", " RESULTS SUMMARY ");
    println!(
        "{:<12} | {:<15} | {:<28} | {:>14} | {:>12}",
        "Algorithm", "Pattern", "File", "Comparisons", "Time (µs)"
    );
    println!("{:-^96}", "");

    for entry in results {
        let micros = entry.duration_ns as f64 / 1000.0;

        let short_file = Path::new(&entry.file)
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{:<12} | {:<15} | {:<28} | {:>14} | {:>12.2}",
            entry.algo,
            entry.pattern.chars().take(12).collect::<String>(),
            short_file,
            entry.comparisons,
            micros
        );
    }
    println!("{:=^96}", " END ");
}
