use hangman_solver::{filter, Corpus, LetterSet, Options, Rank, Session, Status, Word};
use rayon::prelude::*;

/// Plays `secret` round by round, checking the invariants that must hold after every step.
fn checked<'a>(corpus: &'a Corpus, secret: &str, rank_by: Rank) -> Session<'a> {
    let mut options = Options::default();
    options.rank_by = rank_by;
    let mut session = options.session(corpus, secret).unwrap();
    let secret_word = Word::new(secret).unwrap();
    let mut guessed = LetterSet::new();
    let mut before = session.candidates().len();

    while let Some(round) = session.step().unwrap() {
        let pool = session.candidates();
        assert!(pool.len() <= before, "pool grew for '{}'", secret);
        before = pool.len();

        // The secret is never filtered away.
        assert!(pool.iter().any(|w| w.as_str() == secret));
        assert_eq!(filter([&secret_word], session.constraints()).len(), 1);

        assert!(guessed.insert(round.guess), "'{}' guessed twice", round.guess as char);
        let state = session.constraints();
        assert!(state.known().is_disjoint(&state.rejects()));
        assert_eq!(state.known().union(&state.rejects()), guessed);
        assert_eq!(guessed.len(), session.attempts());
        assert!(session.attempts() <= 26);
    }
    session
}

#[test]
fn every_builtin_word_is_solved() {
    let corpus = Corpus::builtin();
    for word in corpus.words() {
        for rank_by in [Rank::Occurrences, Rank::Presence] {
            let session = checked(corpus, word.as_str(), rank_by);
            assert_eq!(session.status(), Status::Solved, "{}", word);
            assert!(session.constraints().is_solved());
        }
    }
}

#[test]
fn filter_is_idempotent() {
    let corpus = Corpus::builtin();
    let mut session = Options::default().session(corpus, "puzzle").unwrap();
    while session.step().unwrap().is_some() {
        let state = session.constraints();
        let once = filter(corpus.bucket(6), state);
        let twice = filter(once.iter().copied(), state);
        assert_eq!(once, twice);
    }
}

#[test]
fn sessions_share_a_corpus_across_threads() {
    let corpus = Corpus::builtin();
    let secrets: Vec<&str> = corpus.words().step_by(13).map(Word::as_str).collect();
    let play = |secret: &&str| {
        Options::default()
            .session(corpus, secret)
            .unwrap()
            .run(|_| {})
            .unwrap()
    };
    let parallel: Vec<_> = secrets.par_iter().map(play).collect();
    let sequential: Vec<_> = secrets.iter().map(play).collect();
    assert_eq!(parallel, sequential);
    assert!(parallel.iter().all(|r| r.solved()));
}
