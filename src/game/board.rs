//! The guess grid and its cursor

use crate::core::{COLS, Feedback, LetterStatus, ROWS, Word};

/// One tile of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Uppercase letter, if typed
    pub letter: Option<u8>,
    /// Set once when the row is submitted
    pub status: LetterStatus,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Position of the last typed letter
///
/// `column` is `None` while the active row has no letters yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: Option<usize>,
}

impl Cursor {
    /// Letters typed in the active row
    #[inline]
    #[must_use]
    pub fn filled(&self) -> usize {
        self.column.map_or(0, |c| c + 1)
    }
}

/// What a successful row submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub guess: Word,
    pub feedback: Feedback,
    /// Positions scored correct
    pub match_count: usize,
    /// Row the cursor moved to; equals [`ROWS`] after the last row
    pub next_row: usize,
}

/// ROWS x COLS grid of cells plus the cursor
///
/// Letters only change in the active row. Rows above it are fully lettered
/// and scored, rows below it are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    cursor: Cursor,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Cell at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row >= ROWS` or `col >= COLS`
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether every row has been submitted
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor.row >= ROWS
    }

    /// Whether the active row holds [`COLS`] letters
    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.cursor.filled() == COLS
    }

    /// Write `letter` after the last one in the active row
    ///
    /// Returns `false` without changes if the row is full or the board is
    /// exhausted.
    pub fn place_letter(&mut self, letter: u8) -> bool {
        if self.is_exhausted() || self.is_row_full() {
            return false;
        }

        let col = self.cursor.filled();
        self.cells[self.cursor.row][col].letter = Some(letter);
        self.cursor.column = Some(col);
        true
    }

    /// Clear the last letter of the active row
    ///
    /// Returns `false` without changes if the row is empty.
    pub fn delete_letter(&mut self) -> bool {
        let Some(col) = self.cursor.column else {
            return false;
        };

        self.cells[self.cursor.row][col].letter = None;
        self.cursor.column = col.checked_sub(1);
        true
    }

    /// The active row as a word, once it is full
    #[must_use]
    pub fn pending_word(&self) -> Option<Word> {
        if self.is_exhausted() || !self.is_row_full() {
            return None;
        }

        let mut letters = [0u8; COLS];
        for (slot, cell) in letters.iter_mut().zip(&self.cells[self.cursor.row]) {
            *slot = cell.letter?;
        }
        Word::from_letters(letters).ok()
    }

    /// Score the active row against `target` and move to the next row
    ///
    /// Returns `None` without changes unless the row is full. Deciding win or
    /// loss is left to the caller.
    pub fn submit_row(&mut self, target: &Word) -> Option<SubmitResult> {
        let guess = self.pending_word()?;
        let feedback = Feedback::calculate(&guess, target);

        let row = self.cursor.row;
        for (cell, &status) in self.cells[row].iter_mut().zip(feedback.statuses()) {
            cell.status = status;
        }

        self.cursor = Cursor {
            row: row + 1,
            column: None,
        };

        Some(SubmitResult {
            guess,
            match_count: feedback.count_correct(),
            feedback,
            next_row: row + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn type_word(board: &mut Board, word: &str) {
        for b in word.bytes() {
            board.place_letter(b);
        }
    }

    fn letters_in_active_row(board: &Board) -> usize {
        board.rows()[board.cursor().row]
            .iter()
            .filter(|c| !c.is_empty())
            .count()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cursor(), Cursor { row: 0, column: None });
        assert!(board.rows().iter().flatten().all(|c| *c == Cell::default()));
    }

    #[test]
    fn place_letter_advances_cursor() {
        let mut board = Board::new();
        assert!(board.place_letter(b'A'));
        assert_eq!(board.cursor().column, Some(0));
        assert_eq!(board.cell(0, 0).letter, Some(b'A'));
    }

    #[test]
    fn place_letter_on_full_row_is_noop() {
        let mut board = Board::new();
        type_word(&mut board, "APPLE");
        let before = board.clone();

        assert!(!board.place_letter(b'X'));
        assert_eq!(board, before);
        assert_eq!(board.cursor().column, Some(COLS - 1));
    }

    #[test]
    fn delete_letter_on_empty_row_is_noop() {
        let mut board = Board::new();
        assert!(!board.delete_letter());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn delete_letter_clears_last() {
        let mut board = Board::new();
        type_word(&mut board, "AP");
        assert!(board.delete_letter());
        assert_eq!(board.cursor().column, Some(0));
        assert_eq!(board.cell(0, 1).letter, None);
        assert!(board.delete_letter());
        assert_eq!(board.cursor().column, None);
    }

    #[test]
    fn submit_incomplete_row_is_noop() {
        let mut board = Board::new();
        type_word(&mut board, "APPL");
        let before = board.clone();

        assert!(board.submit_row(&Word::new("apple").unwrap()).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn submit_scores_row_and_moves_down() {
        let mut board = Board::new();
        type_word(&mut board, "PAPER");

        let result = board.submit_row(&Word::new("apple").unwrap()).unwrap();
        assert_eq!(result.guess.text(), "PAPER");
        assert_eq!(result.match_count, 1);
        assert_eq!(result.next_row, 1);
        assert_eq!(board.cursor(), Cursor { row: 1, column: None });

        let statuses: Vec<_> = board.rows()[0].iter().map(|c| c.status).collect();
        assert_eq!(statuses, result.feedback.statuses().to_vec());
        assert!(board.rows()[1].iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn exhausted_board_accepts_nothing() {
        let target = Word::new("feast").unwrap();
        let mut board = Board::new();
        for _ in 0..ROWS {
            type_word(&mut board, "BEAST");
            assert!(board.submit_row(&target).is_some());
        }

        assert!(board.is_exhausted());
        assert!(!board.place_letter(b'A'));
        assert!(!board.delete_letter());
        assert!(board.submit_row(&target).is_none());
    }

    #[derive(Debug, Clone)]
    enum Edit {
        Place(u8),
        Delete,
    }

    fn edit_strategy() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (b'A'..=b'Z').prop_map(Edit::Place),
            Just(Edit::Delete),
        ]
    }

    proptest! {
        #[test]
        fn cursor_tracks_letter_count(edits in proptest::collection::vec(edit_strategy(), 0..40)) {
            let mut board = Board::new();
            for edit in edits {
                match edit {
                    Edit::Place(b) => { board.place_letter(b); }
                    Edit::Delete => { board.delete_letter(); }
                }

                prop_assert_eq!(board.cursor().filled(), letters_in_active_row(&board));
                let filled = board.cursor().filled();
                prop_assert!(board.rows()[0][filled..].iter().all(Cell::is_empty));
            }
        }
    }
}
