// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod alphabet;
pub mod chart;
pub mod game;
pub mod highscore;
pub mod runtime;
