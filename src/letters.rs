use std::fmt;

/// Number of letters in the (lowercase ASCII) alphabet.
pub const ALPHABET: usize = (b'z' - b'a' + 1) as usize;

/// A set of lowercase ASCII letters, stored as a 26-bit mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

// Bytes outside a-z map to the empty mask, so they are never members.
#[inline]
fn bit(letter: u8) -> u32 {
    if letter.is_ascii_lowercase() {
        1 << (letter - b'a')
    } else {
        0
    }
}

impl LetterSet {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds `letter`, returning whether it was newly inserted.
    ///
    /// Panics if `letter` is not `a-z`.
    pub fn insert(&mut self, letter: u8) -> bool {
        assert!(letter.is_ascii_lowercase(), "'{}' is not a-z", letter as char);
        let was = self.contains(letter);
        self.0 |= bit(letter);
        !was
    }

    #[inline]
    pub fn contains(&self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c as char)?;
        }
        write!(f, "}}")
    }
}
