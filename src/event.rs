//! Application-defined events.
//!
//! A [`GameEvent`] is registered once with the service, optionally bound to
//! screen handlers, and then sent repeatedly with a new numeric value. The
//! event remembers the last value that was sent, so a bitmap screen can be
//! re-rendered without changing it.

use serde::{Serialize, Serializer};

use crate::config::is_valid_identifier;
use crate::errors::GameSenseError;

/// Icon shown next to an event on screen devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum EventIcon {
    #[default]
    None = 0,
    Health = 1,
    Armor = 2,
    Ammo = 3,
    Money = 4,
    Flashbang = 5,
    Kills = 6,
    Headshot = 7,
    Helmet = 8,
    Hunger = 10,
    Air = 11,
    Compass = 12,
    Tool = 13,
    Mana = 14,
    Clock = 15,
    Lightning = 16,
    Item = 17,
    At = 18,
    Muted = 19,
    Talking = 20,
    Connect = 21,
    Disconnect = 22,
    Music = 23,
    Play = 24,
    Pause = 25,
    Cpu = 27,
    Gpu = 28,
    Ram = 29,
    Assists = 30,
    CreepScore = 31,
    Dead = 32,
    Dragon = 33,
    Enemies = 35,
    GameStart = 36,
    Gold = 37,
    Health2 = 38,
    Kills2 = 39,
    Mana2 = 40,
    Teammates = 41,
    Timer = 42,
    Temperature = 43,
}

impl EventIcon {
    /// Numeric id used by the service.
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl Serialize for EventIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    game_id: String,
    event_id: String,
    min_value: i32,
    max_value: i32,
    icon: EventIcon,
    value_optional: bool,
    value: i32,
}

impl GameEvent {
    pub fn builder<G: Into<String>, E: Into<String>>(game_id: G, event_id: E) -> GameEventBuilder {
        GameEventBuilder {
            inner: GameEvent {
                game_id: game_id.into(),
                event_id: event_id.into(),
                min_value: 0,
                max_value: 100,
                icon: EventIcon::None,
                value_optional: false,
                value: 0,
            },
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn icon(&self) -> EventIcon {
        self.icon
    }

    pub fn value_optional(&self) -> bool {
        self.value_optional
    }

    /// Last value sent for this event (0 before the first send).
    pub fn value(&self) -> i32 {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

/// Builder for [`GameEvent`]. Defaults: range `0..=100`, no icon, value required.
#[derive(Debug, Clone)]
pub struct GameEventBuilder {
    inner: GameEvent,
}

impl GameEventBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut GameEvent)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn min_value(self, v: i32) -> Self { self.map(|e| e.min_value = v) }
    pub fn max_value(self, v: i32) -> Self { self.map(|e| e.max_value = v) }
    pub fn icon(self, icon: EventIcon) -> Self { self.map(|e| e.icon = icon) }
    pub fn value_optional(self, optional: bool) -> Self { self.map(|e| e.value_optional = optional) }

    pub fn build(self) -> Result<GameEvent, GameSenseError> {
        let ev = self.inner;
        for id in [&ev.game_id, &ev.event_id] {
            if !is_valid_identifier(id) {
                return Err(GameSenseError::InvalidIdentifier(id.clone()));
            }
        }
        if ev.min_value > ev.max_value {
            return Err(GameSenseError::InvalidRange { min: ev.min_value, max: ev.max_value });
        }
        Ok(ev)
    }
}
