use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Screen sizes supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenDeviceType {
    /// Rival 700, Rival 710
    #[serde(rename = "screened-128x36")]
    Screen128x36,
    /// Apex 7, Apex 7 TKL, Apex Pro, Apex Pro TKL
    #[serde(rename = "screened-128x40")]
    Screen128x40,
    /// Arctis Pro Wireless
    #[serde(rename = "screened-128x48")]
    Screen128x48,
    /// GameDAC / Arctis Pro + GameDAC
    #[serde(rename = "screened-128x52")]
    Screen128x52,
}

impl ScreenDeviceType {
    pub const ALL: [ScreenDeviceType; 4] = [
        ScreenDeviceType::Screen128x36,
        ScreenDeviceType::Screen128x40,
        ScreenDeviceType::Screen128x48,
        ScreenDeviceType::Screen128x52,
    ];

    /// `(width, height)` in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            ScreenDeviceType::Screen128x36 => (128, 36),
            ScreenDeviceType::Screen128x40 => (128, 40),
            ScreenDeviceType::Screen128x48 => (128, 48),
            ScreenDeviceType::Screen128x52 => (128, 52),
        }
    }

    /// Size label as used in event frame keys, e.g. `"128x40"`.
    pub fn size_label(self) -> String {
        let (w, h) = self.dimensions();
        format!("{w}x{h}")
    }

    /// Frame key under which a full bitmap is sent with an event, e.g. `"image-data-128x40"`.
    pub fn image_data_key(self) -> String {
        format!("image-data-{}", self.size_label())
    }
}

impl Display for ScreenDeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "screened-{}", self.size_label())
    }
}

/// Screen zone on a device. All current devices have a single screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenZone {
    #[default]
    #[serde(rename = "one")]
    One,
}
