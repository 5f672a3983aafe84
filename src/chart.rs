//! Turns a finished [`Game`](crate::game::Game) into chart-ready data.

use crate::game::{Game, Millis};

/// One point of the per-letter timing series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterPoint {
    pub letter: char,
    pub at: Millis,
}

impl LetterPoint {
    pub fn new(letter: char, at: Millis) -> Self {
        Self { letter, at }
    }
}

impl From<(char, Millis)> for LetterPoint {
    fn from(v: (char, Millis)) -> Self {
        LetterPoint { letter: v.0, at: v.1 }
    }
}

impl From<LetterPoint> for (char, Millis) {
    fn from(p: LetterPoint) -> Self {
        (p.letter, p.at)
    }
}

/// Pair each alphabet letter with the timestamp of its correct press.
///
/// Intended for a complete game, where the series covers the whole alphabet.
/// Called earlier it pairs index-wise up to however many presses have landed,
/// never past either end.
pub fn letter_series(game: &Game) -> Vec<LetterPoint> {
    let len = game.alphabet().len().min(game.timestamps().len());
    game.alphabet()
        .iter()
        .zip(game.timestamps().iter())
        .take(len)
        .map(|(letter, &at)| LetterPoint::new(letter, at))
        .collect()
}

/// Chart-ready (letter index, ms since first press) pairs for the results
/// plot. Raw timestamps make poor axis values, so each point is rebased onto
/// the game's own start.
pub fn relative_series(game: &Game) -> Vec<(f64, f64)> {
    let start = match game.started_at() {
        Some(start) => start,
        None => return Vec::new(),
    };
    game.timestamps()
        .iter()
        .enumerate()
        .map(|(i, &at)| (i as f64, at.saturating_sub(start) as f64))
        .collect()
}

/// Total elapsed time in seconds with exactly two decimals, or a placeholder
/// while the game is unfinished.
pub fn format_elapsed_seconds(game: &Game) -> String {
    match game.elapsed() {
        Some(ms) => format!("{:.2}", ms as f64 / 1000.0),
        None => String::from("--.--"),
    }
}

/// Compute X (letter index) and Y (ms since start) bounds for the results chart
pub fn compute_chart_params(series: &[(f64, f64)]) -> (f64, f64) {
    let mut highest_ms = 0.0;
    for &(_, ms) in series {
        if ms > highest_ms {
            highest_ms = ms;
        }
    }

    let mut last_index = match series.last() {
        Some(p) => p.0,
        None => 1.0,
    };
    if last_index < 1.0 {
        last_index = 1.0;
    }

    (last_index, highest_ms.round())
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
