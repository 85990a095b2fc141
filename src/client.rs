//! Client for the service's event API.
//!
//! [`GameSense`] turns games, events and screens into request bodies and hands
//! them to a [`Transport`]. The usual flow is:
//!
//! 1. [`register_game`](GameSense::register_game) once at startup,
//! 2. [`register_event`](GameSense::register_event) or
//!    [`bind_screen`](GameSense::bind_screen) for each event,
//! 3. [`send_event`](GameSense::send_event) whenever a value changes, and
//!    [`render`](GameSense::render) after drawing on a bitmap screen.
//!
//! Bitmap screens must be bound before they are rendered; the service ignores
//! image frames for events it has no bitmap handler for.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use gamesense::client::GameSense;
//! use gamesense::config::GameConfig;
//! use gamesense::event::GameEvent;
//! use gamesense::screen::{Screen, ScreenDeviceType, ScreenZone};
//! use gamesense::transport::RecordingTransport;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(RecordingTransport::new());
//! let gs = GameSense::new(GameConfig::builder("TEST_GAME").build()?, transport.clone());
//! gs.register_game()?;
//!
//! let event = GameEvent::builder("TEST_GAME", "TEST_EVENT").build()?;
//! let mut screen = Screen::bitmap(ScreenDeviceType::Screen128x40, ScreenZone::One);
//! gs.bind_screen(&event, &screen)?;
//!
//! screen.framebuffer_mut().unwrap().draw_rect(10, 10, 20, 10, true)?;
//! gs.render(&screen, &event)?;
//! assert_eq!(transport.len(), 3);
//! # Ok(()) }
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::GameConfig;
use crate::errors::GameSenseError;
use crate::event::GameEvent;
use crate::payload::{BindEvent, EventData, RegisterEvent, RegisterGame, SendEvent};
use crate::screen::Screen;
use crate::transport::{Endpoint, Transport};

pub struct GameSense {
    config: GameConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for GameSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSense").field("config", &self.config).finish_non_exhaustive()
    }
}

impl GameSense {
    pub fn new(config: GameConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Registers (or updates) the game's metadata.
    pub fn register_game(&self) -> Result<(), GameSenseError> {
        self.post(Endpoint::GameMetadata, &RegisterGame::from(&self.config))
    }

    /// Registers an event without any handlers.
    pub fn register_event(&self, event: &GameEvent) -> Result<(), GameSenseError> {
        self.check_game(event);
        self.post(Endpoint::RegisterGameEvent, &RegisterEvent::from(event))
    }

    /// Registers `event` with `screen` as its only handler.
    pub fn bind_screen(&self, event: &GameEvent, screen: &Screen) -> Result<(), GameSenseError> {
        self.bind_screens(event, std::slice::from_ref(screen))
    }

    /// Registers `event` with one handler per screen, e.g. for several device sizes.
    pub fn bind_screens(&self, event: &GameEvent, screens: &[Screen]) -> Result<(), GameSenseError> {
        self.check_game(event);
        log::debug!(
            "binding {} screen handler(s) to event {}/{}",
            screens.len(),
            event.game_id(),
            event.event_id()
        );

        let body = BindEvent {
            event: RegisterEvent::from(event),
            handlers: screens.iter().map(Screen::handler).collect(),
        };
        self.post(Endpoint::BindGameEvent, &body)
    }

    /// Sends a new value for `event`, with optional frame data for its handlers.
    ///
    /// The value is stored on the event once the service accepted it.
    pub fn send_event(
        &self,
        event: &mut GameEvent,
        value: i32,
        frame: Option<Map<String, Value>>,
    ) -> Result<(), GameSenseError> {
        self.post_event(event, value, frame)?;
        event.set_value(value);
        Ok(())
    }

    /// Pushes the current bitmap of `screen`, resending the event's last value.
    pub fn render(&self, screen: &Screen, event: &GameEvent) -> Result<(), GameSenseError> {
        let frame = screen.image_frame().ok_or(GameSenseError::NotABitmapScreen)?;
        self.post_event(event, event.value(), Some(frame))
    }

    fn post_event(
        &self,
        event: &GameEvent,
        value: i32,
        frame: Option<Map<String, Value>>,
    ) -> Result<(), GameSenseError> {
        let body = SendEvent {
            game: event.game_id().to_string(),
            event: event.event_id().to_string(),
            data: EventData { value, frame },
        };
        self.post(Endpoint::GameEvent, &body)
    }

    fn check_game(&self, event: &GameEvent) {
        if event.game_id() != self.config.game_id {
            log::warn!(
                "event {} belongs to game {}, client is registered as {}",
                event.event_id(),
                event.game_id(),
                self.config.game_id
            );
        }
    }

    fn post<T: Serialize>(&self, endpoint: Endpoint, body: &T) -> Result<(), GameSenseError> {
        let body = serde_json::to_value(body)?;
        log::debug!("POST {}", endpoint);

        self.transport.post(endpoint, &body).map_err(|e| {
            log::warn!("POST {} failed: {:#}", endpoint, e);
            GameSenseError::Transport(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventIcon;
    use crate::screen::{ScreenDeviceType, ScreenLine, ScreenZone};
    use crate::transport::RecordingTransport;
    use serde_json::json;

    fn setup() -> (Arc<RecordingTransport>, GameSense) {
        let transport = Arc::new(RecordingTransport::new());
        let cfg = GameConfig::builder("TEST_GAME")
            .display_name("Test Game")
            .deinitialize_timer_ms(10_000)
            .build()
            .unwrap();
        let gs = GameSense::new(cfg, transport.clone());
        (transport, gs)
    }

    fn event() -> GameEvent {
        GameEvent::builder("TEST_GAME", "TEST_EVENT").build().unwrap()
    }

    #[test]
    fn register_game_posts_metadata() {
        let (t, gs) = setup();
        gs.register_game().unwrap();

        let req = t.last().unwrap();
        assert_eq!(req.endpoint, Endpoint::GameMetadata);
        assert_eq!(
            req.body,
            json!({
                "game": "TEST_GAME",
                "game_display_name": "Test Game",
                "deinitialize_timer_length_ms": 10000
            })
        );
    }

    #[test]
    fn register_event_posts_registration() {
        let (t, gs) = setup();
        let ev = GameEvent::builder("TEST_GAME", "AMMO")
            .icon(EventIcon::Ammo)
            .max_value(30)
            .value_optional(true)
            .build()
            .unwrap();
        gs.register_event(&ev).unwrap();

        let req = t.last().unwrap();
        assert_eq!(req.endpoint, Endpoint::RegisterGameEvent);
        assert_eq!(req.body["icon_id"], 3);
        assert_eq!(req.body["max_value"], 30);
        assert_eq!(req.body["value_optional"], true);
    }

    #[test]
    fn bind_text_screen() {
        let (t, gs) = setup();
        let mut screen = Screen::text(ScreenDeviceType::Screen128x40, ScreenZone::One);
        screen.as_text_mut().unwrap().add_lines([ScreenLine::text().prefix("Test 1: ")]);

        gs.bind_screen(&event(), &screen).unwrap();

        let req = t.last().unwrap();
        assert_eq!(req.endpoint, Endpoint::BindGameEvent);
        assert_eq!(req.body["event"], "TEST_EVENT");
        assert_eq!(req.body["handlers"][0]["datas"][0]["lines"][0]["prefix"], "Test 1: ");
    }

    #[test]
    fn bind_several_screens() {
        let (t, gs) = setup();
        let screens: Vec<Screen> = ScreenDeviceType::ALL
            .iter()
            .map(|&d| Screen::bitmap(d, ScreenZone::One))
            .collect();
        gs.bind_screens(&event(), &screens).unwrap();

        let handlers = t.last().unwrap().body["handlers"].as_array().unwrap().clone();
        assert_eq!(handlers.len(), 4);
        assert_eq!(handlers[3]["device-type"], "screened-128x52");
        assert_eq!(handlers[3]["datas"][0]["image-data"].as_array().unwrap().len(), 16 * 52);
    }

    #[test]
    fn send_event_records_value() {
        let (t, gs) = setup();
        let mut ev = event();
        gs.send_event(&mut ev, 42, None).unwrap();

        assert_eq!(ev.value(), 42);
        assert_eq!(
            t.last().unwrap().body,
            json!({ "game": "TEST_GAME", "event": "TEST_EVENT", "data": { "value": 42 } })
        );
    }

    #[test]
    fn failed_send_keeps_previous_value() {
        let (t, gs) = setup();
        let mut ev = event();
        gs.send_event(&mut ev, 7, None).unwrap();

        t.fail_next(1);
        let err = gs.send_event(&mut ev, 8, None).unwrap_err();
        assert!(matches!(err, GameSenseError::Transport(_)));
        assert_eq!(ev.value(), 7);
    }

    #[test]
    fn render_sends_bitmap_frame_with_current_value() {
        let (t, gs) = setup();
        let mut ev = event();
        let mut screen = Screen::bitmap(ScreenDeviceType::Screen128x40, ScreenZone::One);
        gs.bind_screen(&ev, &screen).unwrap();
        gs.send_event(&mut ev, 5, None).unwrap();

        screen.framebuffer_mut().unwrap().draw_rect(10, 10, 20, 10, true).unwrap();
        gs.render(&screen, &ev).unwrap();

        let req = t.last().unwrap();
        assert_eq!(req.endpoint, Endpoint::GameEvent);
        assert_eq!(req.body["data"]["value"], 5);

        let bytes: Vec<u8> = req.body["data"]["frame"]["image-data-128x40"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap() as u8)
            .collect();
        assert_eq!(bytes.len(), 640);
        assert_eq!(bytes[161] & (1 << 5), 1 << 5);
        assert_eq!(bytes.iter().map(|b| b.count_ones()).sum::<u32>(), 200);
        assert_eq!(bytes, screen.framebuffer().unwrap().export_bytes());
    }

    #[test]
    fn render_text_screen_is_an_error() {
        let (t, gs) = setup();
        let screen = Screen::text(ScreenDeviceType::Screen128x36, ScreenZone::One);
        assert!(matches!(gs.render(&screen, &event()), Err(GameSenseError::NotABitmapScreen)));
        assert!(t.is_empty());
    }
}
