use crate::letters::LetterSet;
use crate::{filter, suggest, Constraints, Corpus, Error, Rank, Result, Word, DEFAULT_CAP};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    /// Every slot has been revealed.
    Solved,
    /// The attempt cap was reached first.
    Exhausted,
    /// No letter was left to suggest while slots were still unknown. Usually this means the
    /// secret is not in the corpus.
    Stuck,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::InProgress => "in progress",
            Status::Solved => "solved",
            Status::Exhausted => "exhausted",
            Status::Stuck => "stuck",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// The most guesses a session may make.
    pub cap: usize,

    /// How candidate letters are scored.
    pub rank_by: Rank,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            rank_by: Rank::default(),
        }
    }
}

impl Options {
    pub fn session<'c>(self, corpus: &'c Corpus, secret: &str) -> Result<Session<'c>> {
        Session::new(corpus, secret, self)
    }
}

/// What happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub attempt: usize,
    pub guess: u8,
    pub hit: bool,
    /// The knowns after this guess, `_` for unknown slots.
    pub knowns: String,
    pub rejects: LetterSet,
    /// Candidates the guess was chosen from.
    pub candidates: usize,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempt: {}, guess: {}, knowns: {}, rejects: {} ({} candidates)",
            self.attempt, self.guess as char, self.knowns, self.rejects, self.candidates
        )
    }
}

/// The outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub secret: String,
    pub status: Status,
    pub attempts: usize,
    pub knowns: String,
    pub rejects: LetterSet,
    pub remaining: usize,
}

impl Report {
    pub fn solved(&self) -> bool {
        self.status == Status::Solved
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solved() {
            write!(f, "solved {}", self.secret)?;
        } else {
            write!(f, "failed to solve {} ({}, at {})", self.secret, self.status, self.knowns)?;
        }
        write!(
            f,
            " in {} attempts, rejects: {}",
            self.attempts, self.rejects
        )
    }
}

/// A session that stopped on an error, with the state it had reached.
#[derive(Debug, thiserror::Error)]
#[error("{error}: {report}")]
pub struct Aborted {
    #[source]
    pub error: Error,
    pub report: Report,
}

/// One game against one secret word.
///
/// The session only borrows the corpus; the candidate pool it narrows is its own.
pub struct Session<'c> {
    secret: Box<str>,
    state: Constraints,
    remaining: Vec<&'c Word>,
    attempts: usize,
    status: Status,
    options: Options,
}

impl<'c> Session<'c> {
    pub fn new(corpus: &'c Corpus, secret: &str, options: Options) -> Result<Self> {
        if secret.is_empty() || !secret.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(Error::InvalidSecret {
                secret: secret.to_string(),
            });
        }
        Ok(Self {
            secret: secret.into(),
            state: Constraints::new(secret.len()),
            remaining: corpus.bucket(secret.len()).iter().collect(),
            attempts: 0,
            status: if options.cap == 0 {
                Status::Exhausted
            } else {
                Status::InProgress
            },
            options,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn constraints(&self) -> &Constraints {
        &self.state
    }

    /// The candidate pool as of the last filtering pass.
    pub fn candidates(&self) -> &[&'c Word] {
        &self.remaining
    }

    /// Plays one round.
    ///
    /// Returns `None` without guessing if the session is already over, or if there is nothing
    /// left to suggest (in which case the session is now [`Status::Stuck`]).
    pub fn step(&mut self) -> Result<Option<Round>> {
        let rank = self.options.rank_by;
        self.step_with(|pool, state| suggest(pool, state, rank))
    }

    /// Like [`Session::step`], but the letter is chosen by `pick` from the freshly filtered pool.
    ///
    /// If the picked letter was already guessed the attempt still counts, the session becomes
    /// [`Status::Stuck`], and the [`Error::InvalidGuess`] is returned.
    pub fn step_with<F>(&mut self, pick: F) -> Result<Option<Round>>
    where
        F: FnOnce(&[&'c Word], &Constraints) -> Option<u8>,
    {
        if self.status.is_terminal() {
            return Ok(None);
        }

        let state = &self.state;
        self.remaining.retain(|w| w.matches(state));

        let guess = match pick(&self.remaining, &self.state) {
            Some(guess) => guess,
            None => {
                self.status = Status::Stuck;
                return Ok(None);
            }
        };
        self.attempts += 1;

        let positions: Vec<usize> = self
            .secret
            .bytes()
            .enumerate()
            .filter(|&(_, c)| c == guess)
            .map(|(i, _)| i)
            .collect();
        let hit = !positions.is_empty();
        if let Err(e) = self.state.apply(guess, &positions) {
            self.status = Status::Stuck;
            return Err(e);
        }

        if self.state.is_solved() {
            self.status = Status::Solved;
        } else if self.attempts >= self.options.cap {
            self.status = Status::Exhausted;
        }

        Ok(Some(Round {
            attempt: self.attempts,
            guess,
            hit,
            knowns: self.state.to_string(),
            rejects: self.state.rejects(),
            candidates: self.remaining.len(),
        }))
    }

    /// Plays until the session is over, handing every round to `observe`.
    pub fn run(self, observe: impl FnMut(&Round)) -> Result<Report, Aborted> {
        let rank = self.options.rank_by;
        self.run_with(|pool, state| suggest(pool, state, rank), observe)
    }

    /// Like [`Session::run`], with every letter chosen by `pick`.
    pub fn run_with<F>(
        mut self,
        mut pick: F,
        mut observe: impl FnMut(&Round),
    ) -> Result<Report, Aborted>
    where
        F: FnMut(&[&'c Word], &Constraints) -> Option<u8>,
    {
        loop {
            match self.step_with(&mut pick) {
                Ok(Some(round)) => observe(&round),
                Ok(None) => return Ok(self.report()),
                Err(error) => {
                    return Err(Aborted {
                        error,
                        report: self.report(),
                    })
                }
            }
        }
    }

    pub fn report(&self) -> Report {
        Report {
            secret: self.secret.to_string(),
            status: self.status,
            attempts: self.attempts,
            knowns: self.state.to_string(),
            rejects: self.state.rejects(),
            remaining: filter(self.remaining.iter().copied(), &self.state).len(),
        }
    }
}
