use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};

use wordtools::anagram::{AnagramOptions, Anagrammer};
use wordtools::errors::ParseError;
use wordtools::grouper::{LengthGrouper, LengthKey, WordGrouper};
use wordtools::letter_boxed::{find_chains, Sides};
use wordtools::spelling_bee::spelling_bee;
use wordtools::word_bag::WordBag;
use wordtools::word_list::{FileFormat, WordList, WordListError};
use wordtools::wordle::{self, Guess};

/// Word-puzzle helpers: anagrams, letter-boxed, wordle and spelling bee
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find multi-word anagrams of a phrase
    Anagram {
        /// The phrase to rearrange (case, spaces and punctuation are ignored)
        phrase: String,

        #[command(flatten)]
        words: WordListArgs,

        /// Maximum number of words per anagram (0 = no limit)
        #[arg(short = 'W', long, default_value_t = 0)]
        max_words: usize,

        /// Minimum number of words per anagram (0 = no limit)
        #[arg(short = 'w', long, default_value_t = 0)]
        min_words: usize,

        /// Maximum letters per word (0 = no limit)
        #[arg(short = 'L', long, default_value_t = 0)]
        max_word_length: usize,

        /// Minimum letters per word (0 = no limit)
        #[arg(short = 'l', long, default_value_t = 0)]
        min_word_length: usize,

        /// A word every anagram must contain (repeatable)
        #[arg(short = 'i', long)]
        include_word: Vec<String>,

        /// A word no anagram may contain (repeatable)
        #[arg(short = 'x', long)]
        exclude_word: Vec<String>,

        /// Stop after this many anagrams
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Solve a letter-boxed puzzle, shortest chains first
    #[command(name = "letter-boxed")]
    LetterBoxed {
        /// The puzzle's sides, e.g. `abc def ghi jkl`
        #[arg(required = true)]
        sides: Vec<String>,

        #[command(flatten)]
        words: WordListArgs,

        /// Ignore dictionary words shorter than this
        #[arg(short = 'l', long, default_value_t = 3)]
        min_word_length: usize,

        /// Longest chain to consider (0 = stop at the shortest solutions)
        #[arg(long, default_value_t = 0)]
        max_chain: usize,

        /// Stop after this many chains
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Narrow down wordle answers.
    ///
    /// Grey (no match): lowercase letters. Yellow (right letter, wrong place):
    /// uppercase letters. Green (correct place): letters prefixed with a dot.
    /// Example: 'gUe.ss' matches 'blush' and 'crust'.
    Wordle {
        #[arg(required = true)]
        guesses: Vec<String>,

        #[command(flatten)]
        words: WordListArgs,
    },

    /// List spelling-bee words by score
    #[command(name = "spelling-bee")]
    SpellingBee {
        /// The outer letters
        letters: String,

        /// The centre letter every word must use
        required_letter: String,

        #[command(flatten)]
        words: WordListArgs,
    },
}

#[derive(Args, Debug)]
struct WordListArgs {
    /// Path to the word list
    #[arg(short = 'd', long, env = "WORDTOOLS_WORD_LIST")]
    word_list: PathBuf,

    /// Layout of the word-list file
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Minimum score filter (scored lists only)
    #[arg(short = 'm', long, default_value_t = 50)]
    min_score: i32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// One word per line
    Plain,
    /// A JSON array of strings
    Json,
    /// `word;score` lines
    Scored,
}

impl WordListArgs {
    fn load(&self) -> Result<WordList, WordListError> {
        let format = match self.format {
            Format::Plain => FileFormat::Plain,
            Format::Json => FileFormat::Json,
            Format::Scored => FileFormat::Scored { min_score: self.min_score },
        };
        let t_load = Instant::now();
        let list = WordList::load_from_path(&self.word_list, format)?;
        log::info!(
            "Loaded {} words in {:.3}s",
            list.len(),
            t_load.elapsed().as_secs_f64()
        );
        Ok(list)
    }
}

/// Entry point of the wordtools CLI.
///
/// Delegates to [`try_main`], printing any error (with its code and help
/// text when it is one of ours) before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDTOOLS_DEBUG").is_ok();
    wordtools::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else if let Some(list_err) = e.downcast_ref::<WordListError>() {
            eprintln!("Error: {}", list_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Anagram {
            phrase,
            words,
            max_words,
            min_words,
            max_word_length,
            min_word_length,
            include_word,
            exclude_word,
            limit,
        } => {
            let list = words.load()?;
            let anagrammer = Anagrammer::from_word_list(list.iter());
            let options = AnagramOptions {
                max_words,
                min_words,
                min_word_length,
                max_word_length,
                include_words: include_word,
                exclude_words: exclude_word.into_iter().collect::<HashSet<_>>(),
            };

            let t_solve = Instant::now();
            let mut found = 0;
            for anagram in anagrammer
                .anagram_phrase(&phrase, &options)
                .take(limit.unwrap_or(usize::MAX))
            {
                println!("{anagram}");
                found += 1;
            }
            log::info!("Found {found} anagrams in {:.3}s", t_solve.elapsed().as_secs_f64());
        }

        Command::LetterBoxed { sides, words, min_word_length, max_chain, limit } => {
            let sides = Sides::parse(&sides).map_err(|pe| *pe)?;
            let list = words.load()?;
            let bag = WordBag::with_words(list.iter(), Vec::<&str>::new(), min_word_length);
            let anagrammer = Anagrammer::from_word_list(bag.iter());

            let t_solve = Instant::now();
            let mut solutions: Vec<String> = find_chains(&anagrammer, &sides, max_chain)
                .take(limit.unwrap_or(usize::MAX))
                .map(|chain| chain.join(" "))
                .collect();
            solutions.sort_by_key(String::len);
            for solution in &solutions {
                println!("{solution}");
            }
            log::info!(
                "Found {} chains in {:.3}s",
                solutions.len(),
                t_solve.elapsed().as_secs_f64()
            );
        }

        Command::Wordle { guesses, words } => {
            let guesses = guesses
                .iter()
                .map(|g| g.parse::<Guess>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|pe| *pe)?;
            let list = words.load()?;
            let by_length: LengthGrouper = WordGrouper::from_words(list.iter(), LengthKey);

            let candidates = wordle::solve(&guesses, &by_length).map_err(|pe| *pe)?;
            for candidate in &candidates {
                println!("{candidate}");
            }
            println!();
            println!("{}", wordle::summarise(&candidates));
        }

        Command::SpellingBee { letters, required_letter, words } => {
            let list = words.load()?;
            let solutions = spelling_bee(list.iter(), &letters, &required_letter).map_err(|pe| *pe)?;
            for (score, group) in solutions.iter().rev() {
                println!("===== {score} =====");
                for word in group {
                    println!("{word}");
                }
                println!();
            }
        }
    }

    Ok(())
}
