use crate::letters::LetterSet;
use crate::{Error, Result};
use std::fmt;

/// Everything learned so far about one secret word.
///
/// A letter only ever moves into `known` or `rejects`, never out of them, and never into both.
/// Slots in `knowns` only ever go from unknown to a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    knowns: Vec<Option<u8>>,
    known: LetterSet,
    rejects: LetterSet,
}

impl Constraints {
    /// Fresh state for a secret of length `len`: all slots unknown, nothing guessed.
    pub fn new(len: usize) -> Self {
        Self {
            knowns: vec![None; len],
            known: LetterSet::new(),
            rejects: LetterSet::new(),
        }
    }

    /// Records the outcome of guessing `letter`.
    ///
    /// A non-empty `positions` reveals `letter` at exactly those slots; an empty one means the
    /// letter is absent from the secret.
    pub fn apply(&mut self, letter: u8, positions: &[usize]) -> Result<()> {
        assert!(letter.is_ascii_lowercase(), "guess '{}' is not a-z", letter as char);
        if self.is_guessed(letter) {
            return Err(Error::InvalidGuess {
                letter: letter as char,
            });
        }

        if positions.is_empty() {
            self.rejects.insert(letter);
            return Ok(());
        }
        for &i in positions {
            assert!(
                self.knowns[i].is_none(),
                "slot {} is already revealed",
                i
            );
            self.knowns[i] = Some(letter);
        }
        self.known.insert(letter);
        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.knowns.iter().all(Option::is_some)
    }

    /// Whether `letter` has been guessed already, hit or miss.
    pub fn is_guessed(&self, letter: u8) -> bool {
        self.known.contains(letter) || self.rejects.contains(letter)
    }

    pub fn len(&self) -> usize {
        self.knowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knowns.is_empty()
    }

    /// The per-position state; `None` is an unknown slot.
    pub fn knowns(&self) -> &[Option<u8>] {
        &self.knowns
    }

    /// Letters confirmed present.
    pub fn known(&self) -> LetterSet {
        self.known
    }

    /// Letters confirmed absent.
    pub fn rejects(&self) -> LetterSet {
        self.rejects
    }

    pub fn unknown_slots(&self) -> usize {
        self.knowns.iter().filter(|k| k.is_none()).count()
    }
}

/// Renders the knowns with `_` for unknown slots, e.g. `_a_`.
impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in &self.knowns {
            match k {
                Some(c) => write!(f, "{}", *c as char)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
