//! JSON bodies for the service's endpoints.
//!
//! Each struct maps one-to-one onto the body of a POST request. Field names
//! follow the service (`snake_case` for the game/event endpoints,
//! `kebab-case` inside screen handlers). Optional fields are omitted when
//! unset.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::GameConfig;
use crate::event::{EventIcon, GameEvent};
use crate::screen::{ScreenDeviceType, ScreenLine, ScreenZone};

/// Body of `/game_metadata`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterGame {
    pub game: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    pub deinitialize_timer_length_ms: u32,
}

impl From<&GameConfig> for RegisterGame {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            game: cfg.game_id.clone(),
            game_display_name: cfg.display_name.clone(),
            developer: cfg.developer.clone(),
            deinitialize_timer_length_ms: cfg.deinitialize_timer_ms,
        }
    }
}

/// Body of `/register_game_event`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterEvent {
    pub game: String,
    pub event: String,
    pub min_value: i32,
    pub max_value: i32,
    pub icon_id: EventIcon,
    pub value_optional: bool,
}

impl From<&GameEvent> for RegisterEvent {
    fn from(ev: &GameEvent) -> Self {
        Self {
            game: ev.game_id().to_string(),
            event: ev.event_id().to_string(),
            min_value: ev.min_value(),
            max_value: ev.max_value(),
            icon_id: ev.icon(),
            value_optional: ev.value_optional(),
        }
    }
}

/// Body of `/bind_game_event`: the event registration plus its handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindEvent {
    #[serde(flatten)]
    pub event: RegisterEvent,
    pub handlers: Vec<ScreenHandler>,
}

/// A screen handler inside a bind request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenHandler {
    #[serde(rename = "device-type")]
    pub device_type: ScreenDeviceType,
    pub zone: ScreenZone,
    pub mode: String,
    pub datas: Vec<ScreenFrameData>,
}

impl ScreenHandler {
    pub const MODE: &'static str = "screen";
}

/// One frame of a screen handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScreenFrameData {
    Lines {
        lines: Vec<ScreenLine>,
    },
    Image {
        #[serde(rename = "has-text")]
        has_text: bool,
        #[serde(rename = "image-data")]
        image_data: Vec<u8>,
    },
}

/// Body of `/game_event`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendEvent {
    pub game: String,
    pub event: String,
    pub data: EventData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventData {
    pub value: i32,
    /// Extra context for handlers, e.g. `image-data-128x40` for bitmap screens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<Map<String, Value>>,
}
