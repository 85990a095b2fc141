//! Monochrome bitmap rasterization for screen peripherals.
//!
//! A [`Framebuffer`] holds a packed 1-bit-per-pixel image for one of the small
//! OLED screens the service can drive. Pixels are stored row-major, most
//! significant bit first: pixel `(x, y)` lives in bit `7 - (x % 8)` of byte
//! `y * ceil(width / 8) + x / 8`. This layout is the wire format the service
//! expects for `image-data` payloads, so the bytes returned by
//! [`Framebuffer::export_bytes`] can be sent as-is.
//!
//! All drawing calls are bounds-checked. A call that would touch a pixel
//! outside the bitmap is rejected with [`GameSenseError::OutOfRange`] before
//! any pixel is written.
//!
//! # Examples
//!
//! ```
//! use gamesense::bitmap::Framebuffer;
//!
//! let mut fb = Framebuffer::new(128, 40).unwrap();
//! fb.draw_rect(10, 10, 20, 10, true).unwrap();
//! fb.draw_line(0, 0, 127, 39, true).unwrap();
//!
//! let bytes = fb.export_bytes();
//! assert_eq!(bytes.len(), 16 * 40);
//! ```
//!
//! [`GameSenseError::OutOfRange`]: crate::errors::GameSenseError::OutOfRange

mod framebuffer;
mod line;

pub use framebuffer::Framebuffer;
pub use line::BresenhamLine;
