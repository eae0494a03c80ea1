//! Game session state machine
//!
//! A [`Session`] owns the target, board, keyboard and outcome, and is the only
//! thing that mutates them. Input arrives one event at a time through
//! [`Session::submit_input`] and is processed to completion before the next.

use super::board::{Board, SubmitResult};
use super::input::{InputEvent, InputQueue, KeyClassifier, StandardKeys};
use super::keyboard::KeyboardState;
use crate::core::{COLS, ROWS, Word};
use crate::wordlists::WordSource;
use log::{debug, info};

/// Result of a session so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Undecided,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

/// State machine view of [`Outcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Undecided => Self::Playing,
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
        }
    }
}

/// Session options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reject full rows whose word is not in the word source
    pub require_known_word: bool,
}

/// Why an input left the session unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game is already won or lost
    GameOver,
    /// No room for another letter
    RowFull,
    /// Nothing to delete
    RowEmpty,
    /// Submit before the row has [`COLS`] letters
    RowIncomplete,
    /// Submit of a word the source does not know (strict mode only)
    UnknownWord,
    /// Key the classifier rejected
    InvalidKey,
}

/// What an input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    LetterPlaced,
    LetterDeleted,
    Scored(SubmitResult),
    Ignored(IgnoreReason),
}

impl Response {
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// One play-through, from target selection to a terminal outcome or reset
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{Outcome, Session, SessionConfig};
/// use wordle_game::wordlists::FixedWordSource;
///
/// let source = FixedWordSource::single(Word::new("apple").unwrap());
/// let mut session = Session::new(source, SessionConfig::default());
///
/// for key in ["a", "p", "p", "l", "e", "Enter"] {
///     session.submit_key(key);
/// }
///
/// assert_eq!(session.outcome(), Outcome::Won);
/// assert_eq!(session.target().map(Word::text), Some("APPLE"));
/// ```
pub struct Session<W: WordSource, K: KeyClassifier = StandardKeys> {
    source: W,
    classifier: K,
    config: SessionConfig,
    target: Word,
    board: Board,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl<W: WordSource> Session<W> {
    /// Start a session using the standard key names
    pub fn new(source: W, config: SessionConfig) -> Self {
        Self::with_classifier(source, StandardKeys, config)
    }
}

impl<W: WordSource, K: KeyClassifier> Session<W, K> {
    /// Start a session with a custom key classifier
    pub fn with_classifier(mut source: W, classifier: K, config: SessionConfig) -> Self {
        let target = source.pick_target();
        debug!("new session, strict={}", config.require_known_word);

        Self {
            source,
            classifier,
            config,
            target,
            board: Board::new(),
            keyboard: KeyboardState::new(),
            outcome: Outcome::Undecided,
        }
    }

    /// Throw the current game away and start another with a new target
    pub fn reset(&mut self) {
        self.target = self.source.pick_target();
        self.board = Board::new();
        self.keyboard = KeyboardState::new();
        self.outcome = Outcome::Undecided;
        debug!("session reset");
    }

    /// Classify a raw key name and apply it
    pub fn submit_key(&mut self, raw: &str) -> Response {
        match self.classifier.classify(raw) {
            Some(event) => self.submit_input(event),
            None => {
                debug!("rejected key {raw:?}");
                Response::Ignored(IgnoreReason::InvalidKey)
            }
        }
    }

    /// Process every queued key in order
    pub fn drain(&mut self, queue: &mut InputQueue) -> Vec<Response> {
        std::iter::from_fn(|| queue.pop())
            .map(|raw| self.submit_key(&raw))
            .collect()
    }

    /// Apply one classified event
    pub fn submit_input(&mut self, event: InputEvent) -> Response {
        if self.outcome.is_decided() {
            return Response::Ignored(IgnoreReason::GameOver);
        }

        match event {
            InputEvent::Letter(letter) => {
                if !letter.is_ascii_alphabetic() {
                    return Response::Ignored(IgnoreReason::InvalidKey);
                }
                if self.board.place_letter(letter.to_ascii_uppercase()) {
                    Response::LetterPlaced
                } else {
                    Response::Ignored(IgnoreReason::RowFull)
                }
            }
            InputEvent::Delete => {
                if self.board.delete_letter() {
                    Response::LetterDeleted
                } else {
                    Response::Ignored(IgnoreReason::RowEmpty)
                }
            }
            InputEvent::Enter => self.submit_row(),
        }
    }

    fn submit_row(&mut self) -> Response {
        if self.config.require_known_word
            && let Some(word) = self.board.pending_word()
            && !self.source.contains(&word)
        {
            debug!("rejected unknown word {word}");
            return Response::Ignored(IgnoreReason::UnknownWord);
        }

        let Some(result) = self.board.submit_row(&self.target) else {
            return Response::Ignored(IgnoreReason::RowIncomplete);
        };

        self.keyboard.apply(&result.guess, &result.feedback);
        debug!(
            "row {} scored {} {}",
            result.next_row - 1,
            result.guess,
            result.feedback
        );

        if result.match_count == COLS {
            self.outcome = Outcome::Won;
            info!("won in {} guesses", result.next_row);
        } else if result.next_row == ROWS {
            self.outcome = Outcome::Lost;
            info!("lost, target was {}", self.target);
        }

        Response::Scored(result)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.outcome.into()
    }

    /// The target, revealed only once the game is decided
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.outcome.is_decided().then_some(&self.target)
    }

    /// Rows submitted so far
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.board.cursor().row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::FixedWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn session(target: &str) -> Session<FixedWordSource> {
        let source = FixedWordSource::single(Word::new(target).unwrap());
        Session::new(source, SessionConfig::default())
    }

    fn type_keys(session: &mut Session<FixedWordSource>, word: &str) -> Vec<Response> {
        let mut queue = InputQueue::new();
        queue.push_word(word);
        session.drain(&mut queue)
    }

    fn last_scored(responses: &[Response]) -> &SubmitResult {
        match responses.last() {
            Some(Response::Scored(result)) => result,
            other => panic!("expected a scored row, got {other:?}"),
        }
    }

    #[test]
    fn fresh_session_is_playing() {
        let session = session("apple");
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.outcome(), Outcome::Undecided);
        assert!(session.target().is_none());
        assert_eq!(session.guesses_used(), 0);
    }

    #[test]
    fn exact_guess_wins_on_first_row() {
        let mut session = session("apple");
        let responses = type_keys(&mut session, "apple");

        let result = last_scored(&responses);
        assert!(result.feedback.is_perfect());
        assert_eq!(result.match_count, COLS);
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.guesses_used(), 1);
        assert!(
            session.board().rows()[0]
                .iter()
                .all(|c| c.status == LetterStatus::Correct)
        );
    }

    #[test]
    fn paper_against_apple_keeps_playing() {
        let mut session = session("apple");
        let responses = type_keys(&mut session, "paper");

        let result = last_scored(&responses);
        assert_eq!(result.feedback.to_string(), "YYGY-");
        assert_eq!(result.match_count, 1);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.board().cursor().row, 1);
        assert_eq!(session.keyboard().status(b'R'), LetterStatus::Absent);
        assert_eq!(session.keyboard().status(b'P'), LetterStatus::Correct);
    }

    #[test]
    fn missing_on_last_row_loses_and_reveals_target() {
        let mut session = session("feast");
        for row in 0..ROWS {
            assert_eq!(session.state(), GameState::Playing, "row {row}");
            let responses = type_keys(&mut session, "beast");
            assert_eq!(last_scored(&responses).match_count, COLS - 1);
        }

        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.target().map(Word::text), Some("FEAST"));
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut session = session("feast");
        for _ in 0..ROWS - 1 {
            type_keys(&mut session, "beast");
        }
        type_keys(&mut session, "feast");
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn incomplete_row_submit_changes_nothing() {
        let mut session = session("apple");
        for key in ["a", "p", "p"] {
            session.submit_key(key);
        }
        let before = session.board().clone();

        assert_eq!(
            session.submit_input(InputEvent::Enter),
            Response::Ignored(IgnoreReason::RowIncomplete)
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.outcome(), Outcome::Undecided);
    }

    #[test]
    fn input_after_win_is_ignored() {
        let mut session = session("apple");
        type_keys(&mut session, "apple");
        let board = session.board().clone();
        let keyboard = session.keyboard().clone();

        for event in [InputEvent::Letter(b'X'), InputEvent::Delete, InputEvent::Enter] {
            assert_eq!(
                session.submit_input(event),
                Response::Ignored(IgnoreReason::GameOver)
            );
        }
        assert_eq!(session.board(), &board);
        assert_eq!(session.board().cursor(), board.cursor());
        assert_eq!(session.keyboard(), &keyboard);
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn guards_report_reasons() {
        let mut session = session("apple");
        assert_eq!(
            session.submit_input(InputEvent::Delete),
            Response::Ignored(IgnoreReason::RowEmpty)
        );
        for key in ["a", "b", "c", "d", "e"] {
            assert_eq!(session.submit_key(key), Response::LetterPlaced);
        }
        assert_eq!(
            session.submit_key("f"),
            Response::Ignored(IgnoreReason::RowFull)
        );
        assert_eq!(session.submit_key("Backspace"), Response::LetterDeleted);
    }

    #[test]
    fn invalid_keys_change_nothing() {
        let mut session = session("apple");
        let before = session.board().clone();

        for raw in ["1", "Tab", "", "ab"] {
            assert_eq!(
                session.submit_key(raw),
                Response::Ignored(IgnoreReason::InvalidKey)
            );
        }
        assert_eq!(
            session.submit_input(InputEvent::Letter(b'?')),
            Response::Ignored(IgnoreReason::InvalidKey)
        );
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn lowercase_letter_events_are_normalized() {
        let mut session = session("apple");
        session.submit_input(InputEvent::Letter(b'a'));
        assert_eq!(session.board().cell(0, 0).letter, Some(b'A'));
    }

    #[test]
    fn reset_starts_fresh_with_next_target() {
        let source = FixedWordSource::new(words_from_slice(&["apple", "tower"])).unwrap();
        let mut session = Session::new(source, SessionConfig::default());
        type_keys(&mut session, "apple");
        assert_eq!(session.state(), GameState::Won);

        session.reset();
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.keyboard(), &KeyboardState::new());
        assert!(session.target().is_none());

        type_keys(&mut session, "tower");
        assert_eq!(session.target().map(Word::text), Some("TOWER"));
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let source = FixedWordSource::new(words_from_slice(&["apple", "paper"])).unwrap();
        let config = SessionConfig {
            require_known_word: true,
        };
        let mut session = Session::new(source, config);

        let responses = type_keys(&mut session, "zzzzz");
        assert_eq!(
            responses.last(),
            Some(&Response::Ignored(IgnoreReason::UnknownWord))
        );
        assert_eq!(session.board().cursor().row, 0);
        assert_eq!(session.board().cursor().filled(), COLS);

        for _ in 0..COLS {
            session.submit_input(InputEvent::Delete);
        }
        let responses = type_keys(&mut session, "paper");
        assert_eq!(last_scored(&responses).match_count, 1);
    }

    #[test]
    fn lenient_mode_accepts_any_letters() {
        let mut session = session("apple");
        let responses = type_keys(&mut session, "zzzzz");
        assert!(matches!(responses.last(), Some(Response::Scored(_))));
    }

    struct DigitKeys;

    impl KeyClassifier for DigitKeys {
        fn classify(&self, raw: &str) -> Option<InputEvent> {
            match raw {
                "0" => Some(InputEvent::Enter),
                "9" => Some(InputEvent::Delete),
                _ => StandardKeys.classify(raw),
            }
        }
    }

    #[test]
    fn custom_classifier_is_used() {
        let source = FixedWordSource::single(Word::new("apple").unwrap());
        let mut session = Session::with_classifier(source, DigitKeys, SessionConfig::default());
        for key in ["a", "p", "p", "l", "x", "9", "e", "0"] {
            session.submit_key(key);
        }
        assert_eq!(session.outcome(), Outcome::Won);
    }
}
