//! Game registration settings.
//!
//! `GameConfig` describes the calling application as the service sees it. It is
//! built through [`GameConfig::builder()`], which validates the values before
//! anything is sent.
//!
//! # Examples
//!
//! ```rust
//! use gamesense::config::GameConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = GameConfig::builder("TEST_GAME")
//!     .display_name("Test Game")
//!     .developer("Acme")
//!     .deinitialize_timer_ms(10_000)
//!     .build()?; // returns Result<GameConfig, GameConfigError>
//! assert_eq!(cfg.deinitialize_timer_ms, 10_000);
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `game_id`: Identifier of the game; upper-case letters, digits, `-` and `_` only.
//! - `display_name`: Optional human readable name shown in the service's UI.
//! - `developer`: Optional developer name.
//! - `deinitialize_timer_ms`: Idle time before the service drops the game's
//!   effects (default: 15000, valid range `1000..=60000`).

use std::fmt;

pub const DEFAULT_DEINITIALIZE_TIMER_MS: u32 = 15_000;
const DEINITIALIZE_TIMER_RANGE: std::ops::RangeInclusive<u32> = 1_000..=60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub game_id: String,
    pub display_name: Option<String>,
    pub developer: Option<String>,
    pub deinitialize_timer_ms: u32,
}

impl GameConfig {
    pub fn builder<S: Into<String>>(game_id: S) -> GameConfigBuilder {
        GameConfigBuilder {
            inner: GameConfig {
                game_id: game_id.into(),
                display_name: None,
                developer: None,
                deinitialize_timer_ms: DEFAULT_DEINITIALIZE_TIMER_MS,
            },
        }
    }
}

/// Builder for [`GameConfig`].
#[derive(Debug, Clone)]
pub struct GameConfigBuilder {
    inner: GameConfig,
}

impl GameConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut GameConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn display_name<S: Into<String>>(self, name: S) -> Self { self.map(|c| c.display_name = Some(name.into())) }
    pub fn developer<S: Into<String>>(self, dev: S) -> Self { self.map(|c| c.developer = Some(dev.into())) }
    pub fn deinitialize_timer_ms(self, ms: u32) -> Self { self.map(|c| c.deinitialize_timer_ms = ms) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<GameConfig, GameConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameConfigError {
    InvalidGameId(String),
    TimerOutOfRange(u32),
}

impl fmt::Display for GameConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameConfigError::InvalidGameId(id) =>
                write!(f, "game id {id:?} may only contain A-Z, 0-9, '-' and '_'"),
            GameConfigError::TimerOutOfRange(ms) =>
                write!(f, "deinitialize_timer_ms {ms} is out of range (expected 1000..=60000)"),
        }
    }
}
impl std::error::Error for GameConfigError {}

/// Returns true for identifiers the service accepts for games and events.
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

fn validate(c: &GameConfig) -> Result<(), GameConfigError> {
    if !is_valid_identifier(&c.game_id) {
        return Err(GameConfigError::InvalidGameId(c.game_id.clone()));
    }
    if !DEINITIALIZE_TIMER_RANGE.contains(&c.deinitialize_timer_ms) {
        return Err(GameConfigError::TimerOutOfRange(c.deinitialize_timer_ms));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GameConfig::builder("MY_GAME").build().unwrap();
        assert_eq!(cfg.deinitialize_timer_ms, DEFAULT_DEINITIALIZE_TIMER_MS);
        assert!(cfg.display_name.is_none());
        assert!(cfg.developer.is_none());
    }

    #[test]
    fn identifiers() {
        assert!(is_valid_identifier("TEST_GAME"));
        assert!(is_valid_identifier("GAME-2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("test_game"));
        assert!(!is_valid_identifier("TEST GAME"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            GameConfig::builder("lower").build().unwrap_err(),
            GameConfigError::InvalidGameId("lower".into())
        );
        assert_eq!(
            GameConfig::builder("OK").deinitialize_timer_ms(500).build().unwrap_err(),
            GameConfigError::TimerOutOfRange(500)
        );
        assert!(GameConfig::builder("OK").deinitialize_timer_ms(60_001).build().is_err());
        assert!(GameConfig::builder("OK").deinitialize_timer_ms(60_000).build().is_ok());
    }
}
