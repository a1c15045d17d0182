use crate::letters::ALPHABET;
use crate::{Constraints, Word};
use rayon::current_num_threads;
use rayon::prelude::*;

/// Pools smaller than this are tallied on the calling thread even when a pool is available.
const PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Rank {
    /// Total occurrences of the letter across all candidates, counting repeats within a word.
    #[default]
    Occurrences,

    /// Number of candidates that contain the letter at least once.
    Presence,
}

type Tally = [usize; ALPHABET];

fn add(mut tally: Tally, word: &Word, rank: Rank) -> Tally {
    for c in word.letters().iter() {
        tally[(c - b'a') as usize] += match rank {
            Rank::Occurrences => word.count(c),
            Rank::Presence => 1,
        };
    }
    tally
}

fn merge(mut a: Tally, b: Tally) -> Tally {
    for (a, b) in a.iter_mut().zip(b) {
        *a += b;
    }
    a
}

/// Per-letter scores over `candidates`, indexed by `letter - b'a'`.
pub fn tally(candidates: &[&Word], rank: Rank) -> Tally {
    // Only worth fanning out for larger pools.
    if current_num_threads() > 1 && candidates.len() > PARALLEL_THRESHOLD {
        candidates
            .par_iter()
            .fold(|| [0; ALPHABET], |t, w| add(t, w, rank))
            .reduce(|| [0; ALPHABET], merge)
    } else {
        candidates
            .iter()
            .fold([0; ALPHABET], |t, w| add(t, w, rank))
    }
}

/// Picks the next letter to guess: the unguessed letter with the highest score among
/// `candidates`, ties going to the alphabetically first letter.
///
/// Returns `None` if no unguessed letter appears in any candidate, which includes the case where
/// there are no candidates at all.
pub fn suggest(candidates: &[&Word], state: &Constraints, rank: Rank) -> Option<u8> {
    let tally = tally(candidates, rank);
    (b'a'..=b'z')
        .zip(tally)
        .filter(|&(c, n)| n > 0 && !state.is_guessed(c))
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(c, _)| c)
}
