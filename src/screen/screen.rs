use serde_json::{Map, Value};

use crate::bitmap::Framebuffer;
use crate::errors::GameSenseError;
use crate::payload::{ScreenFrameData, ScreenHandler};
use crate::screen::{ScreenDeviceType, ScreenLine, ScreenZone};

/// Text screen: an ordered list of lines rendered by the service.
///
/// The screen has no frame until lines are first added or set. From then on
/// it always sends one frame, even after all lines are removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextScreen {
    lines: Vec<ScreenLine>,
    has_frame: bool,
}

impl TextScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ScreenLine] {
        &self.lines
    }

    /// Appends lines after the existing ones.
    pub fn add_lines<I: IntoIterator<Item = ScreenLine>>(&mut self, lines: I) {
        self.lines.extend(lines);
        self.has_frame = true;
    }

    /// Removes and returns the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> Result<ScreenLine, GameSenseError> {
        if index >= self.lines.len() {
            return Err(GameSenseError::LineIndexOutOfRange { index, len: self.lines.len() });
        }
        Ok(self.lines.remove(index))
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Replaces all lines.
    pub fn set_lines<I: IntoIterator<Item = ScreenLine>>(&mut self, lines: I) {
        self.lines = lines.into_iter().collect();
        self.has_frame = true;
    }

    /// Whether a frame has been started by adding or setting lines.
    pub fn has_frame(&self) -> bool {
        self.has_frame
    }
}

/// Bitmap screen: a caller-drawn framebuffer sized for the device.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapScreen {
    framebuffer: Framebuffer,
}

impl BitmapScreen {
    pub fn new(device: ScreenDeviceType) -> Self {
        Self { framebuffer: Framebuffer::for_device(device) }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent {
    Text(TextScreen),
    Bitmap(BitmapScreen),
}

/// A screen handler for one device type and zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    device_type: ScreenDeviceType,
    zone: ScreenZone,
    content: ScreenContent,
}

impl Screen {
    /// Creates a text screen with no lines.
    pub fn text(device_type: ScreenDeviceType, zone: ScreenZone) -> Self {
        Self { device_type, zone, content: ScreenContent::Text(TextScreen::new()) }
    }

    /// Creates a bitmap screen with an all-off framebuffer.
    pub fn bitmap(device_type: ScreenDeviceType, zone: ScreenZone) -> Self {
        Self { device_type, zone, content: ScreenContent::Bitmap(BitmapScreen::new(device_type)) }
    }

    pub fn device_type(&self) -> ScreenDeviceType {
        self.device_type
    }

    pub fn zone(&self) -> ScreenZone {
        self.zone
    }

    pub fn content(&self) -> &ScreenContent {
        &self.content
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self.content, ScreenContent::Bitmap(_))
    }

    pub fn as_text(&self) -> Option<&TextScreen> {
        match &self.content {
            ScreenContent::Text(text) => Some(text),
            ScreenContent::Bitmap(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextScreen> {
        match &mut self.content {
            ScreenContent::Text(text) => Some(text),
            ScreenContent::Bitmap(_) => None,
        }
    }

    pub fn as_bitmap(&self) -> Option<&BitmapScreen> {
        match &self.content {
            ScreenContent::Bitmap(bitmap) => Some(bitmap),
            ScreenContent::Text(_) => None,
        }
    }

    pub fn as_bitmap_mut(&mut self) -> Option<&mut BitmapScreen> {
        match &mut self.content {
            ScreenContent::Bitmap(bitmap) => Some(bitmap),
            ScreenContent::Text(_) => None,
        }
    }

    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        match &self.content {
            ScreenContent::Bitmap(bitmap) => Some(bitmap.framebuffer()),
            ScreenContent::Text(_) => None,
        }
    }

    pub fn framebuffer_mut(&mut self) -> Option<&mut Framebuffer> {
        match &mut self.content {
            ScreenContent::Bitmap(bitmap) => Some(bitmap.framebuffer_mut()),
            ScreenContent::Text(_) => None,
        }
    }

    /// Handler description sent when binding this screen to an event.
    pub fn handler(&self) -> ScreenHandler {
        let datas = match &self.content {
            ScreenContent::Text(text) if !text.has_frame() => Vec::new(),
            ScreenContent::Text(text) => vec![ScreenFrameData::Lines { lines: text.lines().to_vec() }],
            ScreenContent::Bitmap(bitmap) => vec![ScreenFrameData::Image {
                has_text: false,
                image_data: bitmap.framebuffer().export_bytes(),
            }],
        };

        ScreenHandler {
            device_type: self.device_type,
            zone: self.zone,
            mode: ScreenHandler::MODE.to_string(),
            datas,
        }
    }

    /// Event frame carrying the current bitmap, keyed `image-data-<w>x<h>`.
    ///
    /// Returns `None` for text screens.
    pub fn image_frame(&self) -> Option<Map<String, Value>> {
        let fb = self.framebuffer()?;
        let mut frame = Map::new();
        frame.insert(self.device_type.image_data_key(), Value::from(fb.export_bytes()));
        Some(frame)
    }
}
