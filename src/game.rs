use crate::alphabet::Alphabet;

/// Timestamp in milliseconds, as supplied by the caller's clock.
pub type Millis = u64;

/// Progress through the alphabet, replaced wholesale on every key press.
///
/// `advance` is a pure function from the old value to a new one; nothing here
/// is ever mutated in place, which keeps transitions trivial to test and
/// makes "restart" a plain `Game::new`.
///
/// Invariants kept by construction:
/// - `timestamps.len() == cursor`
/// - `started_at` is set iff `cursor >= 1`, and never changes afterwards
/// - `finished_at` is set iff `cursor == alphabet.len()`, and never changes
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    alphabet: Alphabet,
    cursor: usize,
    started_at: Option<Millis>,
    finished_at: Option<Millis>,
    timestamps: Vec<Millis>,
    miss_count: u32,
}

impl Game {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            cursor: 0,
            started_at: None,
            finished_at: None,
            timestamps: Vec::new(),
            miss_count: 0,
        }
    }

    /// Apply one key press at time `now` and return the successor state.
    ///
    /// A press matching the expected letter advances the cursor and records
    /// `now`; anything else bumps the miss counter and changes nothing else.
    /// Presses after completion always land in the miss branch (the cursor is
    /// past the end, so no letter can match); they are ordinary misses, not an
    /// error. Exactly one of the cursor or the miss counter moves per call.
    pub fn advance(&self, pressed: char, now: Millis) -> Game {
        if self.current_letter() == Some(pressed) {
            let cursor = self.cursor + 1;
            let mut timestamps = self.timestamps.clone();
            timestamps.push(now);

            Game {
                alphabet: self.alphabet.clone(),
                cursor,
                started_at: Some(self.started_at.unwrap_or(now)),
                finished_at: if cursor == self.alphabet.len() {
                    Some(now)
                } else {
                    self.finished_at
                },
                timestamps,
                miss_count: self.miss_count,
            }
        } else {
            Game {
                alphabet: self.alphabet.clone(),
                miss_count: self.miss_count + 1,
                timestamps: self.timestamps.clone(),
                ..*self
            }
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Index of the next expected letter; equals `alphabet.len()` when done.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The letter the player should press next, `None` once complete.
    pub fn current_letter(&self) -> Option<char> {
        self.alphabet.get(self.cursor)
    }

    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<Millis> {
        self.finished_at
    }

    /// One timestamp per correct press, in press order.
    pub fn timestamps(&self) -> &[Millis] {
        &self.timestamps
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.alphabet.len()
    }

    /// Duration from first to last correct press, `None` until finished.
    pub fn elapsed(&self) -> Option<Millis> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_ab() -> Game {
        Game::new(Alphabet::from_letters("ab").unwrap())
    }

    #[test]
    fn test_new_game_is_blank() {
        let game = game_ab();
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.timestamps(), &[] as &[Millis]);
        assert_eq!(game.miss_count(), 0);
        assert_eq!(game.started_at(), None);
        assert_eq!(game.finished_at(), None);
        assert!(!game.has_started());
        assert!(!game.is_complete());
        assert_eq!(game.current_letter(), Some('a'));
        assert_eq!(game.elapsed(), None);
    }

    #[test]
    fn test_correct_press_advances() {
        let game = game_ab().advance('a', 100);
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.started_at(), Some(100));
        assert_eq!(game.finished_at(), None);
        assert_eq!(game.timestamps(), &[100]);
        assert_eq!(game.miss_count(), 0);
        assert_eq!(game.current_letter(), Some('b'));
    }

    #[test]
    fn test_miss_only_bumps_counter() {
        let before = game_ab();
        let after = before.advance('x', 50);
        assert_eq!(after.cursor(), before.cursor());
        assert_eq!(after.timestamps(), before.timestamps());
        assert_eq!(after.started_at(), before.started_at());
        assert_eq!(after.finished_at(), before.finished_at());
        assert_eq!(after.miss_count(), 1);
    }

    #[test]
    fn test_advance_does_not_mutate_predecessor() {
        let before = game_ab();
        let _ = before.advance('a', 100);
        assert_eq!(before.cursor(), 0);
        assert!(before.timestamps().is_empty());
    }

    #[test]
    fn test_worked_example_from_two_letter_alphabet() {
        // miss, then 'a'@100, then 'b'@250
        let game = game_ab().advance('x', 10).advance('a', 100).advance('b', 250);

        assert_eq!(game.miss_count(), 1);
        assert_eq!(game.cursor(), 2);
        assert_eq!(game.started_at(), Some(100));
        assert_eq!(game.finished_at(), Some(250));
        assert_eq!(game.timestamps(), &[100, 250]);
        assert!(game.is_complete());
        assert_eq!(game.elapsed(), Some(150));
    }

    #[test]
    fn test_started_at_set_on_first_correct_press_only() {
        let game = game_ab().advance('a', 100).advance('b', 250);
        assert_eq!(game.started_at(), Some(100));

        // a miss before the first correct press does not start the clock
        let game = game_ab().advance('q', 5);
        assert_eq!(game.started_at(), None);
    }

    #[test]
    fn test_full_swedish_run() {
        let alphabet = Alphabet::swedish();
        let mut game = Game::new(alphabet.clone());
        for (i, c) in alphabet.iter().enumerate() {
            assert!(!game.is_complete());
            game = game.advance(c, 1_000 + i as Millis * 10);
        }
        assert!(game.is_complete());
        assert_eq!(game.cursor(), 29);
        assert_eq!(game.timestamps().len(), 29);
        assert_eq!(game.started_at(), Some(1_000));
        assert_eq!(game.finished_at(), Some(1_280));
        assert_eq!(game.elapsed(), Some(280));
        assert_eq!(game.current_letter(), None);
        assert_eq!(game.miss_count(), 0);
    }

    #[test]
    fn test_press_after_completion_counts_as_miss() {
        let done = game_ab().advance('a', 100).advance('b', 250);
        let after = done.advance('a', 300);

        assert_eq!(after.miss_count(), 1);
        assert_eq!(after.cursor(), 2);
        assert_eq!(after.finished_at(), Some(250));
        assert_eq!(after.timestamps(), &[100, 250]);
        assert!(after.is_complete());
    }

    #[test]
    fn test_finished_at_carried_forward_unchanged() {
        let mut game = game_ab().advance('a', 100).advance('b', 250);
        for t in [300, 400, 500] {
            game = game.advance('z', t);
        }
        assert_eq!(game.finished_at(), Some(250));
        assert_eq!(game.elapsed(), Some(150));
        assert_eq!(game.miss_count(), 3);
    }

    #[test]
    fn test_symbol_outside_alphabet_is_a_miss() {
        let game = game_ab().advance('ö', 10);
        assert_eq!(game.miss_count(), 1);
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn test_elapsed_undefined_until_finished() {
        let game = game_ab();
        assert_eq!(game.elapsed(), None);
        let game = game.advance('a', 100);
        assert_eq!(game.elapsed(), None);
        let game = game.advance('b', 250);
        assert_eq!(game.elapsed(), Some(150));
    }

    #[test]
    fn test_restart_deep_equals_fresh_game() {
        let alphabet = Alphabet::from_letters("ab").unwrap();
        let played = Game::new(alphabet.clone())
            .advance('x', 1)
            .advance('a', 2)
            .advance('b', 3);
        assert!(played.is_complete());

        let restarted = Game::new(alphabet.clone());
        assert_eq!(restarted, Game::new(alphabet));
        assert_eq!(restarted.cursor(), 0);
        assert_eq!(restarted.miss_count(), 0);
        assert!(restarted.timestamps().is_empty());
    }

    #[test]
    fn test_timestamps_track_cursor_exactly() {
        let mut game = Game::new(Alphabet::from_letters("abc").unwrap());
        let presses = ['a', 'x', 'b', 'x', 'c'];
        for (i, c) in presses.iter().enumerate() {
            game = game.advance(*c, i as Millis * 100);
            assert_eq!(game.timestamps().len(), game.cursor());
        }
        assert_eq!(game.cursor(), 3);
        assert_eq!(game.miss_count(), 2);
    }
}
