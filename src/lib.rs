//! A Hangman solver.
//!
//! Given a secret word and a [`Corpus`] of candidate words, a [`Session`] repeatedly narrows the
//! words of the secret's length down to those consistent with everything learned so far, guesses
//! the letter that occurs most often among them, and records whether (and where) it appeared.

/// Builds [`Constraints`] from a `_`-for-unknown pattern and a string of rejected letters.
#[cfg(test)]
macro_rules! state {
    ($knowns:literal / $rejects:literal) => {{
        let knowns: &str = $knowns;
        let mut state = $crate::Constraints::new(knowns.len());
        let mut seen = $crate::LetterSet::new();
        for c in knowns.bytes().filter(|&c| c != b'_') {
            if seen.insert(c) {
                let positions: Vec<usize> = knowns
                    .bytes()
                    .enumerate()
                    .filter(|&(_, k)| k == c)
                    .map(|(i, _)| i)
                    .collect();
                state.apply(c, &positions).unwrap();
            }
        }
        for c in $rejects.bytes() {
            state.apply(c, &[]).unwrap();
        }
        state
    }};
}

pub mod constraints;
pub mod corpus;
pub mod filter;
pub mod letters;
pub mod session;
pub mod suggest;

pub use constraints::Constraints;
pub use corpus::{Corpus, Word};
pub use filter::filter;
pub use letters::LetterSet;
pub use session::{Aborted, Options, Report, Round, Session, Status};
pub use suggest::{suggest, Rank};

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// The default number of guesses a session may make before it is declared exhausted.
pub const DEFAULT_CAP: usize = 30;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dictionary entry that is empty or contains something other than `a-z`.
    #[error("dictionary entry {index} ('{entry}') is not a lowercase a-z word")]
    InvalidEntry { index: usize, entry: String },

    /// A letter was guessed a second time.
    #[error("letter '{letter}' has already been guessed")]
    InvalidGuess { letter: char },

    #[error("secret '{secret}' is not a lowercase a-z word")]
    InvalidSecret { secret: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
