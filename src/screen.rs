//! Screen handlers for OLED-equipped devices.
//!
//! A [`Screen`] describes what a device's screen shows when a bound event
//! fires. It is either a text screen, made of an ordered list of
//! [`ScreenLine`]s (text and progress bars rendered by the service), or a bitmap
//! screen that owns a [`Framebuffer`](crate::bitmap::Framebuffer) drawn by the
//! caller and pushed with every event.
//!
//! The supported screen sizes are a closed set, see [`ScreenDeviceType`].
//!
//! # Examples
//!
//! ```
//! use gamesense::screen::{Screen, ScreenDeviceType, ScreenLine, ScreenZone};
//!
//! let mut screen = Screen::text(ScreenDeviceType::Screen128x40, ScreenZone::One);
//! if let Some(text) = screen.as_text_mut() {
//!     text.add_lines([ScreenLine::text().prefix("HP: "), ScreenLine::progress_bar()]);
//! }
//! assert_eq!(screen.handler().datas.len(), 1);
//!
//! let mut screen = Screen::bitmap(ScreenDeviceType::Screen128x40, ScreenZone::One);
//! screen.framebuffer_mut().unwrap().draw_rect(0, 0, 8, 8, true).unwrap();
//! assert!(screen.image_frame().unwrap().contains_key("image-data-128x40"));
//! ```

mod device;
mod line;
#[allow(clippy::module_inception)]
mod screen;

pub use device::{ScreenDeviceType, ScreenZone};
pub use line::ScreenLine;
pub use screen::{BitmapScreen, Screen, ScreenContent, TextScreen};
