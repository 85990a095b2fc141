use gamesense::config::GameConfig;
use gamesense::event::{EventIcon, GameEvent};
use gamesense::screen::{Screen, ScreenDeviceType, ScreenLine, ScreenZone};
use gamesense::transport::RecordingTransport;
use gamesense::{GameSense, GameSenseError};
use std::sync::Arc;

fn main() -> Result<(), GameSenseError> {
    env_logger::init();

    let transport = Arc::new(RecordingTransport::new());
    let gs = GameSense::new(GameConfig::builder("TEST_GAME").build()?, transport.clone());
    gs.register_game()?;

    let mut event = GameEvent::builder("TEST_GAME", "TEST_EVENT")
        .icon(EventIcon::Health)
        .build()?;

    // "Test 1: <value>" followed by a progress bar
    let mut screen = Screen::text(ScreenDeviceType::Screen128x40, ScreenZone::One);
    if let Some(text) = screen.as_text_mut() {
        text.add_lines([ScreenLine::text().prefix("Test 1: "), ScreenLine::progress_bar()]);
    }
    gs.bind_screen(&event, &screen)?;

    for value in (0..=100).step_by(10) {
        gs.send_event(&mut event, value, None)?;
    }

    if let Some(last) = transport.last() {
        println!("{}", serde_json::to_string_pretty(&last.body)?);
    }
    println!("{} requests sent", transport.len());

    Ok(())
}
