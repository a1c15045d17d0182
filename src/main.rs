use anyhow::Context;
use clap::{ArgEnum, Parser};
use hangman_solver::{Corpus, Options, Report, Status, Word};
use mimalloc::MiMalloc;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Play Hangman against every given word (or against the dictionary itself).
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The secret words to solve.
    ///
    /// If none are given, words are drawn from the dictionary.
    words: Vec<String>,

    /// Read the dictionary from this file (whitespace-separated words) instead of using the
    /// built-in one.
    #[clap(short, long)]
    dictionary: Option<PathBuf>,

    /// The most guesses allowed per word.
    #[clap(short, long, default_value_t = hangman_solver::DEFAULT_CAP)]
    cap: usize,

    /// Set how letters are ranked at each step of the solver.
    #[clap(short, long, arg_enum, default_value = "occurrences")]
    rank_by: Rank,

    /// When drawing words from the dictionary, only use words of this length.
    #[clap(short, long)]
    length: Option<usize>,

    /// When drawing words from the dictionary, only use every n-th word.
    #[clap(short, long, default_value = "1")]
    every: usize,

    /// The number of games to run.
    ///
    /// If not passed, every selected word is played.
    #[clap(short, long)]
    games: Option<usize>,

    /// Sets the number of threads to use in thread pool.
    ///
    /// By default, only one thread is used.
    ///
    /// Specifying this with no value or a value of 0 uses the
    /// default number of threads for rayon.
    #[clap(short, long, default_value = "1", default_missing_value = "0")]
    threads: usize,

    /// Print every guess as it is made.
    #[clap(short, long)]
    verbose: bool,
}

#[derive(ArgEnum, Debug, Clone, Copy)]
enum Rank {
    /// Total occurrences of each letter across the remaining candidates.
    Occurrences,

    /// Number of remaining candidates containing each letter.
    Presence,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let start = Instant::now();
    let loaded;
    let corpus = match &args.dictionary {
        Some(path) => {
            loaded = Corpus::from_path(path)
                .with_context(|| format!("could not load dictionary '{}'", path.display()))?;
            &loaded
        }
        None => Corpus::builtin(),
    };
    eprintln!(
        "loaded {} words in {:.3}ms",
        corpus.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let mut options = Options::default();
    options.cap = args.cap;
    options.rank_by = match args.rank_by {
        Rank::Occurrences => hangman_solver::Rank::Occurrences,
        Rank::Presence => hangman_solver::Rank::Presence,
    };

    let answers: Vec<String> = if args.words.is_empty() {
        let words: Box<dyn Iterator<Item = &Word> + '_> = match args.length {
            Some(n) => Box::new(corpus.bucket(n).iter()),
            None => Box::new(corpus.words()),
        };
        words
            .step_by(args.every.max(1))
            .take(args.games.unwrap_or(usize::MAX))
            .map(|w| w.to_string())
            .collect()
    } else {
        args.words
            .iter()
            .map(|w| w.to_lowercase())
            .take(args.games.unwrap_or(usize::MAX))
            .collect()
    };

    // Words drawn from the dictionary are in it by construction.
    if !args.words.is_empty() {
        for answer in &answers {
            let known = if args.dictionary.is_some() {
                corpus.contains(answer)
            } else {
                hangman_solver::WORDS.contains(answer.as_str())
            };
            if !known {
                eprintln!("warning: '{}' is not in the dictionary", answer);
            }
        }
    }

    ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("could not build the thread pool")?;

    let games = play_all(corpus, &answers, options, args.verbose);
    for game in &games {
        let ms = game.elapsed.as_secs_f64() * 1000.0;
        match &game.outcome {
            Ok(report) => println!("{} ({:.3}ms)", report, ms),
            Err(e) => println!("error playing '{}': {:#} ({:.3}ms)", game.answer, e, ms),
        }
    }
    summarize(&games);
    Ok(())
}

struct Game {
    answer: String,
    outcome: anyhow::Result<Report>,
    elapsed: Duration,
}

/// Plays every answer as its own session; a failure in one game does not affect the others.
fn play_all(corpus: &Corpus, answers: &[String], options: Options, verbose: bool) -> Vec<Game> {
    answers
        .par_iter()
        .map(|answer| {
            let start = Instant::now();
            let outcome = options
                .session(corpus, answer)
                .map_err(anyhow::Error::from)
                .and_then(|session| {
                    session
                        .run(|round| {
                            if verbose {
                                eprintln!("{}: {}", answer, round);
                            }
                        })
                        .map_err(anyhow::Error::from)
                });
            Game {
                answer: answer.clone(),
                outcome,
                elapsed: start.elapsed(),
            }
        })
        .collect()
}

fn summarize(games: &[Game]) {
    let mut score = 0;
    let mut solved = 0;
    let mut exhausted = 0;
    let mut stuck = 0;
    let mut failed = 0;
    let mut histogram = Vec::new();
    for game in games {
        let report = match &game.outcome {
            Ok(report) => report,
            Err(_) => {
                failed += 1;
                continue;
            }
        };
        match report.status {
            Status::Solved => {
                let s = report.attempts;
                solved += 1;
                score += s;
                if s >= histogram.len() {
                    histogram.resize(s + 1, 0);
                }
                histogram[s] += 1;
            }
            Status::Exhausted => exhausted += 1,
            Status::Stuck => stuck += 1,
            Status::InProgress => unreachable!("run only returns finished sessions"),
        }
    }
    print_histogram(&histogram);
    if solved > 0 {
        eprintln!("average attempts: {:.4}", score as f64 / solved as f64);
    }
    if exhausted + stuck + failed > 0 {
        eprintln!(
            "exhausted: {}, stuck: {}, failed: {}",
            exhausted, stuck, failed
        );
    }
}

/// One bar per attempt count that occurred, scaled to 30 columns.
fn print_histogram(histogram: &[usize]) {
    const WIDTH: f64 = 30.0;
    let total: usize = histogram.iter().sum();
    for (attempts, &count) in histogram.iter().enumerate().filter(|&(_, &c)| c > 0) {
        let bar = (WIDTH * count as f64 / total as f64).round() as usize;
        eprintln!(
            "{:>2}: {:<width$} ({})",
            attempts,
            "#".repeat(bar),
            count,
            width = WIDTH as usize
        );
    }
}

#[cfg(test)]
mod tests {
    use super::play_all;
    use hangman_solver::{Corpus, Options, Status};

    #[test]
    fn bad_secret_only_fails_its_own_game() {
        let answers = ["cat", "x-ray", "jazz"].map(String::from);
        let games = play_all(Corpus::builtin(), &answers, Options::default(), false);
        assert_eq!(games.len(), 3);
        assert_eq!(games[1].answer, "x-ray");
        let err = games[1].outcome.as_ref().unwrap_err();
        assert!(err.to_string().contains("x-ray"));
        for i in [0, 2] {
            let report = games[i].outcome.as_ref().unwrap();
            assert_eq!(report.status, Status::Solved);
            assert_eq!(report.secret, answers[i]);
        }
    }
}
