use gamesense::config::GameConfig;
use gamesense::event::GameEvent;
use gamesense::screen::{Screen, ScreenDeviceType, ScreenZone};
use gamesense::transport::RecordingTransport;
use gamesense::{GameSense, GameSenseError};
use std::sync::Arc;

fn main() -> Result<(), GameSenseError> {
    env_logger::init();

    // The recording transport stands in for the service so the payloads can be inspected.
    let transport = Arc::new(RecordingTransport::new());
    let config = GameConfig::builder("TEST_GAME")
        .display_name("Test Game")
        .deinitialize_timer_ms(10_000)
        .build()?;
    let gs = GameSense::new(config, transport.clone());
    gs.register_game()?;

    let event = GameEvent::builder("TEST_GAME", "TEST_EVENT").build()?;

    // A bitmap screen for the Apex 7 / Apex Pro family.
    let mut screen = Screen::bitmap(ScreenDeviceType::Screen128x40, ScreenZone::One);

    // The screen has to be bound before a bitmap can be rendered on it
    gs.bind_screen(&event, &screen)?;

    if let Some(fb) = screen.framebuffer_mut() {
        fb.draw_rect(10, 10, 20, 10, true)?;
        fb.draw_line(0, 0, 127, 39, true)?;
        fb.draw_line(0, 39, 127, 0, true)?;
    }
    gs.render(&screen, &event)?;

    for req in transport.requests() {
        let body = serde_json::to_string(&req.body)?;
        println!("POST {} ({} bytes)", req.endpoint, body.len());
    }
    if let Some(fb) = screen.framebuffer() {
        println!("{} of {} pixels on", fb.count_set_pixels(), fb.width() * fb.height());
    }

    Ok(())
}
