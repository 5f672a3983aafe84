pub mod alphabet;
pub mod chart;
pub mod game;
pub mod highscore;
pub mod runtime;
pub mod ui;

use crate::{
    alphabet::Alphabet,
    game::{Game, Millis},
    highscore::{FileScoreStore, HighScore, ScoreStore},
    runtime::{Clock, CrosstermEventSource, FixedTicker, GameEvent, Runner, TerminalGuard, WallClock},
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// alphabet sprint: press the whole alphabet in order, as fast as you can
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal alphabet sprint. Press every letter of the alphabet in order; each correct press is timed and the results screen charts how long every letter took."
)]
pub struct Cli {
    /// alphabet to play
    #[clap(short = 'a', long, value_enum, default_value_t = AlphabetPreset::Swedish)]
    alphabet: AlphabetPreset,

    /// custom letter sequence to practice instead of a preset
    #[clap(short = 'p', long)]
    letters: Option<String>,

    /// show game-state internals while playing
    #[clap(long)]
    debug: bool,

    /// skip loading and saving the high score
    #[clap(long)]
    no_highscore: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum AlphabetPreset {
    Swedish,
    English,
}

impl AlphabetPreset {
    fn as_alphabet(&self) -> Alphabet {
        match self {
            AlphabetPreset::Swedish => Alphabet::swedish(),
            AlphabetPreset::English => Alphabet::english(),
        }
    }
}

impl Cli {
    fn to_alphabet(&self) -> Alphabet {
        self.letters
            .as_deref()
            .and_then(Alphabet::from_letters)
            .unwrap_or_else(|| self.alphabet.as_alphabet())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Typing,
    Results,
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub game: Game,
    pub state: AppState,
    pub best: Option<HighScore>,
    pub new_record: bool,
    pub debug: bool,
    pub now_ms: Millis,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let game = Game::new(cli.to_alphabet());
        Self {
            debug: cli.debug,
            cli: Some(cli),
            game,
            state: AppState::Typing,
            best: None,
            new_record: false,
            now_ms: 0,
        }
    }

    /// Discard the current run and start over with the same alphabet.
    pub fn reset(&mut self) {
        self.game = Game::new(self.game.alphabet().clone());
        self.state = AppState::Typing;
        self.new_record = false;
    }

    /// Advance the game with one key press and, on completion, settle the
    /// results (high score check included).
    pub fn on_letter(&mut self, c: char, now: Millis, scores: Option<&dyn ScoreStore>) {
        self.game = self.game.advance(c, now);
        if self.game.is_complete() && self.state == AppState::Typing {
            self.state = AppState::Results;
            if let (Some(elapsed), Some(store)) = (self.game.elapsed(), scores) {
                match store.record_if_best(elapsed) {
                    Some(record) => {
                        self.new_record = true;
                        self.best = Some(record);
                    }
                    None => self.best = store.load(),
                }
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _guard = TerminalGuard::acquire()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli);
    start_tui(&mut terminal, &mut app)?;

    terminal.show_cursor()?;

    Ok(())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let scores: Option<FileScoreStore> = match &app.cli {
        Some(cli) if cli.no_highscore => None,
        _ => Some(FileScoreStore::new()),
    };
    if let Some(store) = &scores {
        app.best = store.load();
    }

    let clock = WallClock::new();
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            GameEvent::Tick => {
                app.now_ms = clock.now_ms();
                // Redraw on ticks only while the run timer is visible
                if app.game.has_started() && !app.game.is_complete() {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            GameEvent::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Left => {
                        app.reset();
                    }
                    KeyCode::Char(c) => {
                        if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'c' {
                            break;
                        }

                        match app.state {
                            AppState::Typing => {
                                app.now_ms = clock.now_ms();
                                app.on_letter(
                                    c,
                                    app.now_ms,
                                    scores.as_ref().map(|s| s as &dyn ScoreStore),
                                );
                            }
                            AppState::Results => match c {
                                'r' | 'n' => app.reset(),
                                _ => {}
                            },
                        }
                    }
                    _ => {}
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
