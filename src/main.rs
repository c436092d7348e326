// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};

use backtrack_search::combinatorics;
use backtrack_search::grid::{word_path, Grid};
use backtrack_search::keypad::letter_combinations;
use backtrack_search::lexical::lexical_order;
use backtrack_search::words::find_words_in_order;
use backtrack_search::Trie;

const WORD_BOARD: [&str; 3] = ["ABCE", "SFCS", "ADEE"];
const DICTIONARY_BOARD: [&str; 4] = ["oaan", "etae", "ihkr", "iflv"];
const DICTIONARY: [&str; 4] = ["oath", "pea", "eat", "rain"];

/// Run a backtracking search and print the result as JSON.
///
/// Each command runs the classic example for its problem when given no input.
#[derive(Parser, Debug)]
#[command(name = "backtrack", version, about)]
struct Cli {
    /// Log search progress to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every subset of the values.
    Subsets {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Suppress subsets that repeat because of repeated values.
        #[arg(long)]
        unique: bool,
    },
    /// Every combination of candidates adding up to the target.
    CombinationSum {
        #[arg(long, default_value_t = 7)]
        target: u32,
        candidates: Vec<u32>,
        /// Use each candidate position at most once.
        #[arg(long)]
        unique: bool,
    },
    /// Every set of `k` distinct digits 1 to 9 adding up to the target.
    FixedSize {
        #[arg(default_value_t = 3)]
        k: usize,
        #[arg(default_value_t = 7)]
        target: u32,
    },
    /// Every ordering of the values.
    Permutations {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        #[arg(long)]
        unique: bool,
    },
    /// Whether a word can be read along adjacent grid cells.
    WordExists {
        #[arg(default_value = "ABCCED")]
        word: String,
        /// A grid row; repeat once per row.
        #[arg(long = "row")]
        rows: Vec<String>,
    },
    /// The dictionary words readable in a grid.
    FindWords {
        words: Vec<String>,
        #[arg(long = "row")]
        rows: Vec<String>,
    },
    /// Letter combinations for phone-keypad digits.
    Letters {
        #[arg(default_value = "23")]
        digits: String,
    },
    /// The integers 1 to the limit in dictionary order.
    Lexical {
        #[arg(default_value_t = 13)]
        limit: u32,
    },
}

#[derive(Serialize, Debug)]
struct Report<I: Serialize, R: Serialize> {
    operation: &'static str,
    input: I,
    result: R,
}

#[derive(Serialize, Debug)]
struct WordSearch {
    found: bool,
    path: Option<Vec<(usize, usize)>>,
}

fn print<I: Serialize, R: Serialize>(operation: &'static str, input: I, result: R) -> anyhow::Result<()> {
    let report = Report {
        operation,
        input,
        result,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn or_default<T: Clone>(given: Vec<T>, default: &[T]) -> Vec<T> {
    if given.is_empty() {
        default.to_vec()
    } else {
        given
    }
}

fn grid(rows: Vec<String>, default: &[&str]) -> anyhow::Result<Grid> {
    if rows.is_empty() {
        Ok(Grid::from_rows(default)?)
    } else {
        Ok(Grid::from_rows(&rows)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    info!(command = ?cli.command, "starting");

    match cli.command {
        Command::Subsets { values, unique } => {
            let values = or_default(values, &[1, 2, 3]);
            let result = if unique {
                combinatorics::subsets_unique(&values)
            } else {
                combinatorics::subsets(&values)
            };
            print("subsets", values, result)
        }
        Command::CombinationSum {
            target,
            candidates,
            unique,
        } => {
            let candidates = or_default(candidates, &[2, 3, 6, 7]);
            let result = if unique {
                combinatorics::combination_sum_unique(&candidates, target)
            } else {
                combinatorics::combination_sum(&candidates, target)
            };
            print("combination-sum", (candidates, target), result)
        }
        Command::FixedSize { k, target } => print(
            "fixed-size",
            (k, target),
            combinatorics::combination_sum_fixed_size(k, target),
        ),
        Command::Permutations { values, unique } => {
            let values = or_default(values, &[1, 2, 3]);
            let result = if unique {
                combinatorics::permutations_unique(&values)
            } else {
                combinatorics::permutations(&values)
            };
            print("permutations", values, result)
        }
        Command::WordExists { word, rows } => {
            let mut grid = grid(rows, &WORD_BOARD)?;
            let path = word_path(&mut grid, &word);
            let result = WordSearch {
                found: path.is_some(),
                path,
            };
            print("word-exists", (grid.to_rows(), word), result)
        }
        Command::FindWords { words, rows } => {
            let mut grid = grid(rows, &DICTIONARY_BOARD)?;
            let words = if words.is_empty() {
                DICTIONARY.iter().map(|w| w.to_string()).collect()
            } else {
                words
            };
            let trie = Trie::from_words(&words);
            let result = find_words_in_order(&mut grid, &trie);
            print("find-words", (grid.to_rows(), words), result)
        }
        Command::Letters { digits } => {
            let result = letter_combinations(&digits)?;
            print("letters", digits, result)
        }
        Command::Lexical { limit } => print("lexical", limit, lexical_order(limit)),
    }
}
