use crate::letters::{LetterSet, ALPHABET};
use crate::{Error, Result, DICTIONARY};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::Path;

static BUILTIN: OnceCell<Corpus> = OnceCell::new();

/// A dictionary word along with the letter statistics the solver needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: Box<str>,
    letters: LetterSet,
    counts: [u16; ALPHABET],
}

impl Word {
    /// Fails with [`Error::InvalidEntry`] (at index 0) unless `text` is non-empty and all `a-z`.
    pub fn new(text: &str) -> Result<Self> {
        Self::at(0, text)
    }

    fn at(index: usize, text: &str) -> Result<Self> {
        if text.is_empty() || !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(Error::InvalidEntry {
                index,
                entry: text.to_string(),
            });
        }
        let mut counts = [0u16; ALPHABET];
        for c in text.bytes() {
            let n = &mut counts[(c - b'a') as usize];
            *n = n.saturating_add(1);
        }
        Ok(Self {
            text: text.into(),
            letters: text.bytes().collect(),
            counts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The distinct letters of the word.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// How many times `letter` occurs in the word. Zero for anything outside `a-z`.
    pub fn count(&self, letter: u8) -> usize {
        if !letter.is_ascii_lowercase() {
            return 0;
        }
        usize::from(self.counts[(letter - b'a') as usize])
    }

    /// Every position at which `letter` occurs.
    pub fn positions(&self, letter: u8) -> Vec<usize> {
        self.text
            .bytes()
            .enumerate()
            .filter(|&(_, c)| c == letter)
            .map(|(i, _)| i)
            .collect()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// An immutable word list, grouped by word length.
///
/// Buckets are computed once at construction, so [`Corpus::bucket`] is a plain index. A `Corpus`
/// is never modified after it is built and may be shared freely between sessions and threads.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    // buckets[n] holds the words of length n, in load order.
    buckets: Vec<Vec<Word>>,
    index: HashSet<Box<str>>,
    len: usize,
}

impl Corpus {
    /// The dictionary compiled into the crate.
    pub fn builtin() -> &'static Corpus {
        BUILTIN.get_or_init(|| {
            Corpus::from_words(DICTIONARY).expect("built-in dictionary is validated by build.rs")
        })
    }

    /// Builds a corpus from individual entries, rejecting any that is empty or not all `a-z`.
    pub fn from_words<I>(words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut corpus = Corpus::default();
        for (index, word) in words.into_iter().enumerate() {
            let word = Word::at(index, word.as_ref())?;
            let n = word.len();
            if n >= corpus.buckets.len() {
                corpus.buckets.resize_with(n + 1, Vec::new);
            }
            corpus.index.insert(word.text.clone());
            corpus.buckets[n].push(word);
            corpus.len += 1;
        }
        Ok(corpus)
    }

    /// Builds a corpus from whitespace-separated words.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.split_whitespace())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// All words of length `n`, in load order. Empty if there are none.
    pub fn bucket(&self, n: usize) -> &[Word] {
        self.buckets.get(n).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest word, or 0 for an empty corpus.
    pub fn max_len(&self) -> usize {
        self.lengths().next_back().unwrap_or(0)
    }

    /// The word lengths that have at least one entry, in ascending order.
    pub fn lengths(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(n, _)| n)
    }

    /// Every word, shortest first, in load order within each length.
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.buckets.iter().flatten()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::{Corpus, Word};
    use crate::Error;

    #[test]
    fn word_stats() {
        let w = Word::new("jazz").unwrap();
        assert_eq!(w.len(), 4);
        assert_eq!(w.count(b'z'), 2);
        assert_eq!(w.count(b'j'), 1);
        assert_eq!(w.count(b'q'), 0);
        assert_eq!(w.letters().len(), 3);
        assert_eq!(w.positions(b'z'), [2, 3]);
        assert!(w.positions(b'e').is_empty());
        assert_eq!(w.count(b'Z'), 0);
        assert_eq!(w.count(b'{'), 0);
        assert!(!w.contains(b'J'));
    }

    #[test]
    fn long_runs_are_counted_exactly() {
        let w = Word::new(&"a".repeat(300)).unwrap();
        assert_eq!(w.count(b'a'), 300);
    }

    #[test]
    fn buckets_keep_load_order() {
        let c = Corpus::parse("cat a dog\nbird i\tcar").unwrap();
        assert_eq!(c.len(), 6);
        let three: Vec<_> = c.bucket(3).iter().map(Word::as_str).collect();
        assert_eq!(three, ["cat", "dog", "car"]);
        let one: Vec<_> = c.bucket(1).iter().map(Word::as_str).collect();
        assert_eq!(one, ["a", "i"]);
        assert_eq!(c.bucket(4).len(), 1);
        assert_eq!(c.lengths().collect::<Vec<_>>(), [1, 3, 4]);
        assert_eq!(c.max_len(), 4);
        assert!(c.contains("dog"));
        assert!(!c.contains("cow"));
        assert!(!c.contains("do"));
        assert!(!c.contains(""));
    }

    #[test]
    fn missing_length_is_empty() {
        let c = Corpus::parse("cat").unwrap();
        assert!(c.bucket(2).is_empty());
        assert!(c.bucket(100).is_empty());
        assert!(c.bucket(0).is_empty());
    }

    #[test]
    fn rejects_bad_entries() {
        match Corpus::from_words(["cat", "", "dog"]) {
            Err(Error::InvalidEntry { index, entry }) => {
                assert_eq!(index, 1);
                assert_eq!(entry, "");
            }
            r => panic!("unexpected {:?}", r),
        }
        assert!(matches!(
            Corpus::parse("cat d0g"),
            Err(Error::InvalidEntry { index: 1, .. })
        ));
        assert!(matches!(
            Corpus::parse("Cat"),
            Err(Error::InvalidEntry { index: 0, .. })
        ));
        assert!(matches!(
            Corpus::parse("café"),
            Err(Error::InvalidEntry { .. })
        ));
    }

    #[test]
    fn empty_corpus() {
        let c = Corpus::parse("  \n ").unwrap();
        assert!(c.is_empty());
        assert_eq!(c.max_len(), 0);
    }
}
