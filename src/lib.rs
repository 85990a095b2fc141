//! Client library for the GameSense event service.
//!
//! Register a game, register and send events with numeric values, and bind
//! events to the small OLED screens of supported devices. Bitmap screens are
//! drawn locally on a packed monochrome [`bitmap::Framebuffer`] and pushed with
//! each event.
pub mod bitmap;
pub mod client;
pub mod config;
pub mod errors;
pub mod event;
pub mod payload;
pub mod screen;
pub mod transport;

pub use client::GameSense;
pub use errors::GameSenseError;
