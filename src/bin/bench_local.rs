//! Quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of anagram phrases and letter-boxed puzzles.
//! - Loads the word list and builds the anagram index once, then runs each case
//!   several times and reports the median.
//! - Anagram cases stop after `NUM_RESULTS` phrases; letter-boxed cases run to completion.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release -- -d words.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -d words.txt -r 5`
//! - Print a few results:            `cargo run --bin bench_local --release -- -d words.txt -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous. Use the same machine and `--release` for comparable numbers.
//! - One warm-up run per case is done (not included in timing).
//! - Printing happens outside the timed section.

use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use wordtools::anagram::{AnagramOptions, Anagrammer};
use wordtools::letter_boxed::{find_chains, Sides};
use wordtools::word_bag::WordBag;
use wordtools::word_list::{FileFormat, WordList};

/// Simple local benchmark runner: load the word list once, time several cases.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list (one word per line)
    #[arg(short = 'd', long, env = "WORDTOOLS_WORD_LIST")]
    word_list: PathBuf,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many results per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// Anagram phrases are cut off after this many results.
const NUM_RESULTS: usize = 100;

#[derive(Clone)]
enum Case {
    Anagram { phrase: &'static str, max_words: usize },
    LetterBoxed { sides: [&'static str; 4] },
}

impl Case {
    fn name(&self) -> String {
        match self {
            Case::Anagram { phrase, max_words } => format!("anagram \"{phrase}\" (≤{max_words} words)"),
            Case::LetterBoxed { sides } => format!("letter-boxed {}", sides.join(" ")),
        }
    }

    fn run(&self, anagrammer: &Anagrammer, boxed: &Anagrammer) -> Vec<String> {
        match self {
            Case::Anagram { phrase, max_words } => {
                let options = AnagramOptions { max_words: *max_words, ..AnagramOptions::default() };
                anagrammer
                    .anagram_phrase(black_box(phrase), &options)
                    .take(NUM_RESULTS)
                    .collect()
            }
            Case::LetterBoxed { sides } => match Sides::parse(sides) {
                Ok(sides) => find_chains(boxed, &sides, 0).map(|chain| chain.join(" ")).collect(),
                Err(e) => {
                    eprintln!("  ✗ {}", e.display_detailed());
                    Vec::new()
                }
            },
        }
    }
}

/// Edit/add cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case::Anagram { phrase: "dormitory", max_words: 2 },
        Case::Anagram { phrase: "the eyes", max_words: 3 },
        Case::Anagram { phrase: "astronomer", max_words: 3 },
        Case::Anagram { phrase: "clint eastwood", max_words: 2 },
        Case::LetterBoxed { sides: ["rme", "wcl", "tgk", "api"] },
        Case::LetterBoxed { sides: ["nur", "ohm", "fsi", "adt"] },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 48;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load and index once; this is *not* included in per-case timing.
    eprintln!("Loading word list from: {}", cli.word_list.display());
    let t_load = Instant::now();
    let wl = WordList::load_from_path(&cli.word_list, FileFormat::Plain)?;
    let anagrammer = Anagrammer::from_word_list(wl.iter());
    let boxed = Anagrammer::from_word_list(WordBag::with_words(wl.iter(), Vec::<&str>::new(), 3).iter());
    eprintln!(
        "Loaded {} words ({} keys) in {:.3}s",
        wl.len(),
        anagrammer.num_groups(),
        t_load.elapsed().as_secs_f64()
    );

    let cases = get_cases();
    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let name = case.name();
        eprintln!("\n[{:02}] {}", idx + 1, name);

        let _warmup = case.run(&anagrammer, &boxed);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_results: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let results = case.run(&anagrammer, &boxed);
            let solve_secs = t_solve.elapsed().as_secs_f64();

            let _keep = black_box(results.len());
            times.push(solve_secs);
            last_results = results;

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} {})",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_results.len(),
                pluralizer(last_results.len(), "result".into(), None)
            );
        }

        let med = median(times);

        for result in last_results.iter().take(cli.print_limit) {
            println!("{result}");
        }

        eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);
        summary.push((name, med, last_results.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>9}", "case", "median (s)", "# results");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}", "", "", "");
    for (name, med, num_results) in &summary {
        let display = if name.chars().count() > MAX_NAME_LEN {
            format!("{}…", name.chars().take(MAX_NAME_LEN - 1).collect::<String>())
        } else {
            name.clone()
        };
        eprintln!("{display:<MAX_NAME_LEN$} | {med:>10.3} | {num_results:>9}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
