use hangterm::games::hangman::{parse_words, MAX_ATTEMPTS};
use hangterm::{GameEngine, GameError, GuessOutcome, RoundStatus, SelectionPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine(words: &[&str]) -> GameEngine<StdRng> {
    GameEngine::new(words, SelectionPolicy::First, StdRng::seed_from_u64(11)).unwrap()
}

#[test]
fn cat_round_from_word_file_text() {
    let words = parse_words("# animals\n\nCAT\n");
    let mut game =
        GameEngine::new(&words, SelectionPolicy::Random, StdRng::seed_from_u64(1)).unwrap();

    let steps = [
        ('z', GuessOutcome::Miss, "___", 5),
        ('c', GuessOutcome::Hit, "c__", 5),
        ('a', GuessOutcome::Hit, "ca_", 5),
        ('q', GuessOutcome::Miss, "ca_", 4),
        ('t', GuessOutcome::Hit, "cat", 4),
    ];
    for (letter, outcome, mask, attempts) in steps {
        assert_eq!(game.guess(letter), Ok(outcome));
        assert_eq!(game.masked_word(), mask);
        assert_eq!(game.attempts_left(), attempts);
    }

    assert!(game.is_won());
    assert!(game.is_over());
    assert_eq!(game.status(), RoundStatus::Won);
    assert_eq!(game.secret_word_revealed(), "cat");
}

#[test]
fn losing_round_stays_lost() {
    let mut game = engine(&["kiwi"]);
    let misses = ['a', 'b', 'c', 'd', 'e', 'f'];
    for (i, letter) in misses.iter().enumerate() {
        assert_eq!(game.guess(*letter), Ok(GuessOutcome::Miss));
        assert_eq!(game.attempts_left(), MAX_ATTEMPTS - 1 - i as u8);
    }
    assert_eq!(game.status(), RoundStatus::Lost);

    assert_eq!(game.guess('k'), Ok(GuessOutcome::RoundAlreadyOver));
    assert_eq!(game.masked_word(), "____");
    assert_eq!(game.attempts_left(), 0);
}

#[test]
fn successive_rounds_do_not_leak() {
    let mut game = engine(&["cat"]);
    game.guess('c').unwrap();
    game.guess('x').unwrap();

    game.initialize(&["horse", "zebra"]).unwrap();
    assert_eq!(game.secret_word_revealed(), "horse");
    assert_eq!(game.attempts_left(), MAX_ATTEMPTS);
    assert!(game.guessed_letters().is_empty());
    assert_eq!(game.masked_word(), "_____");

    game.guess('o').unwrap();
    game.new_round();
    assert!(game.guessed_letters().is_empty());
    assert_eq!(game.candidate_count(), 2);
}

#[test]
fn unusable_sources_are_reported() {
    let none: Vec<String> = parse_words("# only comments\n");
    let err = GameEngine::new(&none, SelectionPolicy::Random, StdRng::seed_from_u64(0)).err();
    assert_eq!(err, Some(GameError::InvalidWordSource));

    let invalid = ["42", "c-3po"];
    let bad = GameEngine::new(&invalid, SelectionPolicy::Random, StdRng::seed_from_u64(0)).err();
    assert_eq!(bad, Some(GameError::InvalidWordSource));
}

#[test]
fn invalid_guess_is_recoverable() {
    let mut game = engine(&["dog"]);
    assert_eq!(game.guess('?'), Err(GameError::InvalidGuess('?')));
    assert_eq!(game.guess('d'), Ok(GuessOutcome::Hit));
    assert_eq!(game.masked_word(), "d__");
}

#[test]
fn engine_errors_convert_into_crate_result() -> hangterm::Result<()> {
    let mut game = GameEngine::new(&["owl"], SelectionPolicy::First, StdRng::seed_from_u64(3))?;
    assert_eq!(game.guess('w')?, GuessOutcome::Hit);

    let failed: hangterm::Result<GuessOutcome> = game.guess('#').map_err(Into::into);
    let err = failed.unwrap_err();
    assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::InvalidGuess('#')));
    Ok(())
}
