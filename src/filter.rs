use crate::{Constraints, Word};

impl Word {
    /// Check if this word could still be the secret given everything in `state`.
    pub fn matches(&self, state: &Constraints) -> bool {
        if self.len() != state.len() {
            return false;
        }
        let letters = self.letters();
        if !state.known().is_subset(&letters) || !state.rejects().is_disjoint(&letters) {
            return false;
        }
        // Every occurrence of a known letter has been revealed, so one may not sit in an
        // unknown slot.
        self.as_bytes()
            .iter()
            .zip(state.knowns())
            .all(|(&c, known)| match *known {
                Some(k) => c == k,
                None => !state.known().contains(c),
            })
    }
}

/// The words consistent with `state`, in their original order.
pub fn filter<'w, I>(words: I, state: &Constraints) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    words.into_iter().filter(|w| w.matches(state)).collect()
}

#[cfg(test)]
mod tests {
    use super::filter;
    use crate::{Constraints, Corpus, Word};

    macro_rules! check {
        ($knowns:literal / $rejects:literal allows $word:literal) => {
            assert!(Word::new($word).unwrap().matches(&state!($knowns / $rejects)));
        };
        ($knowns:literal / $rejects:literal disallows $word:literal) => {
            assert!(!Word::new($word).unwrap().matches(&state!($knowns / $rejects)));
        };
    }

    #[test]
    fn fresh_state_allows_same_length() {
        check!("___" / "" allows "cat");
        check!("___" / "" disallows "cats");
        check!("___" / "" disallows "at");
    }

    #[test]
    fn known_positions() {
        check!("ja__" / "" allows "jazz");
        check!("ja__" / "" disallows "jump");
        check!("_a_" / "" allows "car");
        check!("_a_" / "" disallows "arc");
    }

    #[test]
    fn known_letter_in_unknown_slot() {
        // All of the secret's a's are already placed.
        check!("ja__" / "" disallows "java");
        check!("_a_" / "" disallows "aaa");
        check!("__zz" / "" allows "jazz");
        check!("___z" / "" disallows "jazz");
    }

    #[test]
    fn rejected_letters() {
        check!("___" / "t" allows "car");
        check!("___" / "t" disallows "cat");
        check!("_a_" / "nt" allows "car");
        check!("_a_" / "nt" disallows "can");
    }

    #[test]
    fn filter_keeps_order() {
        let c = Corpus::parse("cat car can cab").unwrap();
        let out = filter(c.bucket(3), &state!("_a_" / "t"));
        let out: Vec<_> = out.iter().map(|w| w.as_str()).collect();
        assert_eq!(out, ["car", "can", "cab"]);
    }

    #[test]
    fn filter_empty() {
        let none: &[Word] = &[];
        assert!(filter(none, &Constraints::new(3)).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let c = Corpus::builtin();
        let state = state!("__a__" / "ot");
        let once = filter(c.bucket(5), &state);
        let twice = filter(once.iter().copied(), &state);
        assert_eq!(once, twice);
        assert!(once.iter().any(|w| w.as_str() == "brand"));
    }
}
